// src/macros.rs

#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literal, const or var
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/* ---------- logging ---------- */
// Each macro writes to the file sink in `log.rs` and emits the
// matching `tracing` event with the same message.
// The binary installs no subscriber: its log is the file sink plus stderr.
// The events are for programs that embed the library and bring their own.

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::log::tracing::info!("{}", msg);
        $crate::log::write_log($crate::log::Level::Info, &msg)
    }};
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::log::tracing::debug!("{}", msg);
        $crate::log::write_log($crate::log::Level::Debug, &msg)
    }};
}

/// Warning-level logging; also echoed to stderr
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::log::tracing::warn!("{}", msg);
        $crate::log::write_log($crate::log::Level::Warn, &msg)
    }};
}

/// Error-level logging; also echoed to stderr
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::log::tracing::error!("{}", msg);
        $crate::log::write_log($crate::log::Level::Error, &msg)
    }};
}
