//! A stateless byte-level splitter locating XML token boundaries.
//!
//! The splitter frames tokens without interpreting them: it is meant to sit
//! inside a scanner-style driver which accumulates input in a buffer, asks
//! for the next frame, and advances past it. It performs no validation and
//! never fails; ambiguous input at end of input is returned whole.

use memchr::memchr;
use memchr::memmem;

/// The opening delimiter of a CDATA section.
pub const CDATA_START: &[u8] = b"<![CDATA[";
/// The closing delimiter of a CDATA section.
pub const CDATA_END: &[u8] = b"]]>";

/// The outcome of a single [`split`] call.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SplitResult<'a> {
    /// A complete token-sized slice of the input.
    ///
    /// `advance` is the number of bytes the driver must consume; for every
    /// token kind produced here it equals `token.len()`, but the two are
    /// reported separately to keep the scanner-driver contract explicit.
    Token { advance: usize, token: &'a [u8] },

    /// The buffer does not yet contain a full token; the driver should read
    /// more input and call again.
    NeedMoreData,

    /// The input is exhausted.
    EndOfInput,
}

/// Locates the next XML token boundary in `data`.
///
/// Dispatch is on the first bytes of the buffer:
///
/// * a `<![CDATA[` prefix frames everything through the closing `]]>`,
///   delimiters included; stripping them is the caller's business;
/// * any first byte other than `<` frames character data up to, but not
///   including, the next `<` (the `<` belongs to the following token);
/// * otherwise the frame runs through the first `>` outside of single or
///   double quotes.
///
/// With `at_eof` set, an unterminated token is returned whole.
pub fn split(data: &[u8], at_eof: bool) -> SplitResult<'_> {
    if data.is_empty() {
        return if at_eof {
            SplitResult::EndOfInput
        } else {
            SplitResult::NeedMoreData
        };
    }

    if data.starts_with(CDATA_START) {
        split_cdata(data, at_eof)
    } else if data[0] != b'<' {
        split_char_data(data, at_eof)
    } else {
        split_tag(data, at_eof)
    }
}

fn split_cdata(data: &[u8], at_eof: bool) -> SplitResult<'_> {
    match memmem::find(data, CDATA_END) {
        Some(idx) => {
            let end = idx + CDATA_END.len();
            SplitResult::Token {
                advance: end,
                token: &data[..end],
            }
        }
        None if at_eof => SplitResult::Token {
            advance: data.len(),
            token: data,
        },
        None => SplitResult::NeedMoreData,
    }
}

fn split_char_data(data: &[u8], at_eof: bool) -> SplitResult<'_> {
    match memchr(b'<', data) {
        Some(idx) => SplitResult::Token {
            advance: idx,
            token: &data[..idx],
        },
        None if at_eof => SplitResult::Token {
            advance: data.len(),
            token: data,
        },
        None => SplitResult::NeedMoreData,
    }
}

fn split_tag(data: &[u8], at_eof: bool) -> SplitResult<'_> {
    let mut quote = None;

    for (i, &b) in data.iter().enumerate() {
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            }
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => {
                    return SplitResult::Token {
                        advance: i + 1,
                        token: &data[..=i],
                    }
                }
                _ => {}
            },
        }
    }

    if at_eof {
        SplitResult::Token {
            advance: data.len(),
            token: data,
        }
    } else {
        SplitResult::NeedMoreData
    }
}
