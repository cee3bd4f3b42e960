//! The streaming pull tokenizer.
//!
//! [`Tokenizer`] reads a byte source one byte at a time and yields one
//! [`Token`] per [`Tokenizer::token`] call. It keeps no lookahead beyond a
//! single pending `<` and the synthesized end tag of a self-closing element,
//! so arbitrarily large documents stream through in constant space.

use std::io::Read;
use std::iter::FusedIterator;

use crate::error::{Result, SyntaxError};
use crate::name::Name;
use crate::namespace::NamespaceStack;
use crate::token::Token;

mod cdata;
mod comment;
mod directive;
mod name;
mod procinst;
mod source;
mod start_element;

use self::source::ByteReader;

/// A pull-based XML tokenizer over an arbitrary byte source.
///
/// A tokenizer is constructed per document and driven with
/// [`token`](Tokenizer::token) until it returns `Ok(None)` (clean end of
/// input) or an error; both are terminal. It is not a validating parser:
/// it performs exactly the checks needed to delimit tokens, resolves
/// namespaces on element and attribute names, and leaves everything else
/// (entity expansion, tag matching, well-formedness) to the caller.
pub struct Tokenizer<R: Read> {
    source: ByteReader<R>,
    /// Character-data decoding consumed a `<` which belongs to the next
    /// token.
    found_start: bool,
    /// The end tag still owed to the caller after a self-closing start tag.
    self_close: Option<Name>,
    namespaces: NamespaceStack,
}

impl<R: Read> Tokenizer<R> {
    /// Creates a tokenizer reading from the given source.
    pub fn new(source: R) -> Tokenizer<R> {
        Tokenizer {
            source: ByteReader::new(source),
            found_start: false,
            self_close: None,
            namespaces: NamespaceStack::new(),
        }
    }

    /// Pulls the next token from the stream.
    ///
    /// `Ok(None)` reports end of input observed cleanly between tokens.
    /// End of input in the middle of a tag is a syntax error ("early
    /// EOF"); trailing character data is completed by it instead.
    pub fn token(&mut self) -> Result<Option<Token>> {
        if let Some(name) = self.self_close.take() {
            self.namespaces.pop();
            return Ok(Some(Token::end_element(name)));
        }

        let b = if self.found_start {
            self.found_start = false;
            b'<'
        } else {
            match self.source.next_byte()? {
                Some(b) => b,
                None => return Ok(None),
            }
        };

        if b != b'<' {
            return self.decode_char_data(b).map(Some);
        }

        match self.require_byte()? {
            b'!' => match self.require_byte()? {
                b'-' => {
                    if self.require_byte()? != b'-' {
                        return Err(SyntaxError::InvalidCommentStart.into());
                    }
                    self.decode_comment().map(Some)
                }
                b'[' => self.decode_cdata_or_directive().map(Some),
                b => self.decode_directive(vec![b]).map(Some),
            },
            b'?' => self.decode_processing_instruction().map(Some),
            b'/' => self.decode_end_element().map(Some),
            b => self.decode_start_element(b).map(Some),
        }
    }

    fn decode_char_data(&mut self, first: u8) -> Result<Token> {
        let mut data = vec![first];

        loop {
            match self.source.next_byte()? {
                // Trailing character data is completed by end of input; the
                // next call reports the end.
                None => return Ok(Token::CharData(data)),
                Some(b'<') => {
                    self.found_start = true;
                    return Ok(Token::CharData(data));
                }
                Some(b) => data.push(b),
            }
        }
    }

    /// At this point: `</` has been consumed.
    fn decode_end_element(&mut self) -> Result<Token> {
        let decoded = self.decode_name(None, false);
        let result = decoded.and_then(|(name, mut b, _)| {
            while b != b'>' {
                b = self.require_byte()?;
            }
            Ok(Token::end_element(name))
        });

        // The element's frame goes away even if its end tag is malformed.
        self.namespaces.pop();
        result
    }

    pub(super) fn require_byte(&mut self) -> Result<u8> {
        match self.source.next_byte()? {
            Some(b) => Ok(b),
            None => Err(SyntaxError::UnexpectedEof.into()),
        }
    }

    pub fn source(&self) -> &R {
        self.source.get_ref()
    }

    pub fn source_mut(&mut self) -> &mut R {
        self.source.get_mut()
    }

    /// Unwraps this tokenizer, returning the underlying reader. Bytes
    /// already pulled into the internal buffer are lost.
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }
}

impl<'r> Tokenizer<&'r [u8]> {
    /// A convenience method to create a tokenizer from a string slice.
    #[must_use]
    pub fn from_str(source: &'r str) -> Tokenizer<&'r [u8]> {
        Tokenizer::new(source.as_bytes())
    }
}

impl<R: Read> IntoIterator for Tokenizer<R> {
    type Item = Result<Token>;
    type IntoIter = Tokens<R>;

    fn into_iter(self) -> Tokens<R> {
        Tokens {
            tokenizer: self,
            finished: false,
        }
    }
}

/// An iterator over the tokens of a document.
///
/// Yields `Err` at most once and nothing afterwards; clean end of input
/// simply ends the iteration.
pub struct Tokens<R: Read> {
    tokenizer: Tokenizer<R>,
    finished: bool,
}

impl<R: Read> Tokens<R> {
    /// Unwraps the iterator, returning the internal tokenizer.
    pub fn into_inner(self) -> Tokenizer<R> {
        self.tokenizer
    }

    pub fn source(&self) -> &R {
        self.tokenizer.source()
    }

    pub fn source_mut(&mut self) -> &mut R {
        self.tokenizer.source_mut()
    }
}

impl<R: Read> Iterator for Tokens<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Result<Token>> {
        if self.finished {
            return None;
        }

        match self.tokenizer.token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> FusedIterator for Tokens<R> {}

/// Converts accumulated name-shaped bytes into an owned string.
///
/// The tokenizer does not validate encodings; invalid UTF-8 in a name or an
/// attribute value degrades to replacement characters instead of failing.
pub(super) fn reify_str(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
