// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;

pub use html::{Tag, Token, Tokens};
pub use net::{HttpSource, PageSource};
