#![forbid(non_camel_case_types)]
#![forbid(unsafe_code)]

//! A streaming XML tokenizer together with a byte-level token splitter.
//!
//! [`Tokenizer`] is a pull parser: it reads bytes from an arbitrary
//! [`Read`](std::io::Read) source in a single pass and yields structurally
//! typed tokens (start and end tags with resolved namespaces, character
//! data, comments, directives, processing instructions), never buffering
//! beyond the current token. [`split`] is its stateless companion: given a
//! growing buffer it locates the next token-sized byte range without
//! interpreting it, so an external chunk scanner can frame XML for
//! downstream decoding.
//!
//! Neither component validates: entity references are passed through
//! untouched, tag balance is not checked, and no source positions are
//! tracked.

pub use crate::error::{Error, Result, SyntaxError};
pub use crate::splitter::{split, SplitResult, CDATA_END, CDATA_START};
pub use crate::token::Token;
pub use crate::tokenizer::{Tokenizer, Tokens};

pub mod attribute;
pub mod bytes;
pub mod error;
pub mod name;
pub mod namespace;
pub mod splitter;
pub mod token;
pub mod tokenizer;
