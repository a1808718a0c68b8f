// src/core/html.rs
// Flat token stream over a page, backed by the html5ever tokenizer.
// No tree is built: the page parsers only care about tag/text order.
//
// What callers can rely on:
// - tag and attribute names are lowercase
// - entities in text and attribute values are decoded
// - comments and doctypes are dropped
// - adjacent character runs are merged, so one text node is one Text token
// - <script>/<style>/<title>/<textarea> bodies are read as text, not markup
// - a tag cut off by the end of the page is dropped

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag as HtmlTag, TagKind, Token as HtmlToken, TokenSink, TokenSinkResult,
    Tokenizer, TokenizerOpts,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub attrs: Vec<(String, String)>,
}

impl Tag {
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl From<HtmlTag> for Tag {
    fn from(tag: HtmlTag) -> Self {
        Tag {
            name: s!(&*tag.name),
            attrs: tag
                .attrs
                .into_iter()
                .map(|a| (s!(&*a.name.local), s!(&*a.value)))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Start(Tag),
    End(String),
    SelfClosing(Tag),
    Text(String),
}

impl Token {
    pub fn is_start(&self, name: &str) -> bool {
        matches!(self, Token::Start(tag) if tag.is(name))
    }

    pub fn is_end(&self, name: &str) -> bool {
        matches!(self, Token::End(n) if n == name)
    }
}

/// Tokens of one page, in document order.
pub struct Tokens {
    inner: std::vec::IntoIter<Token>,
}

impl Tokens {
    pub fn new(doc: &str) -> Self {
        let tokenizer = Tokenizer::new(Collector::default(), TokenizerOpts::default());
        let input = BufferQueue::default();
        input.push_back(StrTendril::from_slice(doc));
        let _ = tokenizer.feed(&input);
        tokenizer.end();

        let tokens = tokenizer.sink.tokens.take();
        Self { inner: tokens.into_iter() }
    }
}

impl Iterator for Tokens {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

// Elements whose body the tokenizer must not read as markup
fn raw_kind(name: &str) -> Option<RawKind> {
    match name {
        "script" => Some(RawKind::ScriptData),
        "style" => Some(RawKind::Rawtext),
        "title" | "textarea" => Some(RawKind::Rcdata),
        _ => None,
    }
}

#[derive(Default)]
struct Collector {
    tokens: RefCell<Vec<Token>>,
}

impl Collector {
    fn push_text(&self, t: &str) {
        let mut tokens = self.tokens.borrow_mut();
        if let Some(Token::Text(prev)) = tokens.last_mut() {
            prev.push_str(t);
        } else {
            tokens.push(Token::Text(s!(t)));
        }
    }
}

impl TokenSink for Collector {
    type Handle = ();

    fn process_token(&self, token: HtmlToken, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            HtmlToken::TagToken(tag) => match tag.kind {
                TagKind::StartTag => {
                    let raw = raw_kind(&tag.name);
                    let tok = if tag.self_closing {
                        Token::SelfClosing(tag.into())
                    } else {
                        Token::Start(tag.into())
                    };
                    self.tokens.borrow_mut().push(tok);
                    if let Some(kind) = raw {
                        return TokenSinkResult::RawData(kind);
                    }
                }
                TagKind::EndTag => self.tokens.borrow_mut().push(Token::End(s!(&*tag.name))),
            },
            HtmlToken::CharacterTokens(t) => self.push_text(&t),
            // comments, doctypes, NULs, parse errors, EOF
            _ => {}
        }
        TokenSinkResult::Continue
    }
}
