// tests/transcript_pipeline.rs
use transcript_packer::specs::transcript::{parse, parse_raw};
use transcript_packer::transcript::{resolve_lines, FinalizedLine, RawLine};
use transcript_packer::Error;

const PAGE: &str = concat!(
    "<!DOCTYPE html><html><head><title>Transcripts/Friendship is Magic</title>",
    "<script>var dd = '<dd>not a line</dd>';</script></head><body>\n",
    "<div class=\"mw-parser-output\"><p>Opening scene.</p>\n<dl>\n",
    "<dd><b>Twilight Sparkle</b>: Spike, take a letter.</dd>\n",
    "<dd>[Spike yawns]</dd>\n",
    "<dd>[Rarity: gasps]</dd>\n",
    "<dd>[music: soft piano]</dd>\n",
    "<dd><b>Rarity</b>: It&#39;s &quot;<i>fabulous</i>&quot;</dd>\n",
    "<dd><b>[Verse 1: Pinkie Pie]</b> <dd>Welcome welcome welcome</dd><dd>A fine welcome to you</dd></dd>\n",
    "<dd><b>Applejack</b> Yeehaw</dd>\n",
    "</dl></div></body></html>",
);

fn line(character: &str, text: &str) -> FinalizedLine {
    FinalizedLine::new(character, text)
}

#[test]
fn page_to_finalized_lines() {
    let lines = parse(PAGE).unwrap();
    assert_eq!(lines, vec![
        line("Twilight Sparkle", "Spike, take a letter."),
        line("", "Spike yawns"),
        line("Rarity", "gasps"),
        line("", "music: soft piano"),
        line("Rarity", "It's \"fabulous\""),
        line("Pinkie Pie", "Welcome welcome welcome"),
        line("Pinkie Pie", "A fine welcome to you"),
        line("Applejack", "Yeehaw"),
    ]);
}

#[test]
fn raw_lines_keep_markup_shape() {
    let raw = parse_raw(PAGE).unwrap();
    assert_eq!(raw[0], RawLine::new("Twilight Sparkle", ": Spike, take a letter."));
    assert_eq!(raw[5], RawLine::new("[Verse 1: Pinkie Pie]", " "));
    assert_eq!(raw[6], RawLine::new("", "Welcome welcome welcome"));
    assert_eq!(raw.len(), 9);
}

#[test]
fn page_without_lines_is_empty() {
    let lines = parse("<html><body><p>No transcript yet.</p></body></html>").unwrap();
    assert!(lines.is_empty());
}

#[test]
fn stray_close_abandons_the_page() {
    let doc = "<dl><dd><b>Spike</b>: Hi</dd></dd><dd>more</dd></dl>";
    assert!(matches!(parse(doc), Err(Error::MismatchedClose { .. })));
}

#[test]
fn truncated_page_keeps_partial_line() {
    let doc = "<dl><dd><b>Spike</b>: Dear Princess Celestia";
    assert_eq!(parse(doc).unwrap(), vec![line("Spike", "Dear Princess Celestia")]);
}

fn resolve_again(lines: &[FinalizedLine]) -> Vec<FinalizedLine> {
    resolve_lines(lines.iter().cloned().map(RawLine::from).collect())
}

#[test]
fn named_colon_free_lines_survive_a_second_resolve() {
    let once = parse(PAGE).unwrap();
    let again = resolve_again(&once);
    assert_eq!(once.len(), again.len());

    let mut checked = 0;
    for (a, b) in once.iter().zip(&again) {
        if !a.character.is_empty() && !a.character.starts_with('[') && !a.text.contains(':') {
            assert_eq!(a, b);
            checked += 1;
        }
    }
    assert_eq!(checked, 6);
}

#[test]
fn untagged_line_picks_up_carried_speaker_on_second_resolve() {
    let once = parse("<dd><b>Twilight Sparkle</b>: Spike, take a letter.</dd><dd>[Spike yawns]</dd>").unwrap();
    assert_eq!(once[1], line("", "Spike yawns"));

    // Brackets are gone, so the line now reads as a continuation
    let again = resolve_again(&once);
    assert_eq!(again[0], once[0]);
    assert_eq!(again[1], line("Twilight Sparkle", "Spike yawns"));
}
