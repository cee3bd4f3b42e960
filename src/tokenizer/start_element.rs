use std::io::Read;

use crate::attribute::Attribute;
use crate::bytes::is_whitespace_byte;
use crate::error::{Result, SyntaxError};
use crate::namespace::NS_XMLNS_PREFIX;
use crate::token::Token;

use super::{reify_str, Tokenizer};

impl<R: Read> Tokenizer<R> {
    /// At this point: `<` and the first byte of the element name have been
    /// consumed.
    pub(super) fn decode_start_element(&mut self, first: u8) -> Result<Token> {
        // The element's own declarations live in this frame; it stays on the
        // stack until the matching end tag (or the synthesized one after
        // `/>`).
        self.namespaces.push();

        let (mut name, mut b, by_default) = self.decode_name(Some(first), false)?;
        let unprefixed = by_default || name.namespace.is_empty();
        let mut default_declared = false;
        let mut attributes = Vec::new();

        loop {
            if is_whitespace_byte(b) {
                b = self.require_byte()?;
                continue;
            }

            match b {
                b'/' => {
                    let next = self.require_byte()?;
                    if next != b'>' {
                        return Err(SyntaxError::UnclosedEmptyElement { byte: next }.into());
                    }
                    self.self_close = Some(name.clone());
                    return Ok(Token::StartElement { name, attributes });
                }
                b'>' => return Ok(Token::StartElement { name, attributes }),
                _ => {
                    let attr = self.decode_attribute(b)?;

                    if attr.name.namespace.is_empty() && attr.name.local_name == NS_XMLNS_PREFIX {
                        // xmlns="..." declares this element's default
                        // namespace; an unprefixed element name picks it up
                        // retroactively.
                        if unprefixed {
                            name.namespace = attr.value.clone();
                        }
                        self.namespaces.set_default(attr.value.clone());
                        default_declared = true;
                    } else if attr.name.namespace == NS_XMLNS_PREFIX {
                        // xmlns:prefix="...": if the element's own name used
                        // this prefix before it was declared, resolve it
                        // now. An inherited default is never rewritten this
                        // way.
                        if !default_declared
                            && !by_default
                            && name.namespace == attr.name.local_name
                        {
                            name.namespace = attr.value.clone();
                        }
                        self.namespaces
                            .declare_prefix(attr.name.local_name.clone(), attr.value.clone());
                    }

                    // Namespace pseudo-attributes with nothing after the
                    // colon resolve to an empty local name; they are
                    // bookkept above but not reported.
                    if !attr.name.local_name.is_empty() {
                        attributes.push(attr);
                    }

                    b = self.require_byte()?;
                }
            }
        }
    }

    /// At this point: the first byte of the attribute name has been
    /// consumed.
    pub(super) fn decode_attribute(&mut self, first: u8) -> Result<Attribute> {
        let (name, b, _) = self.decode_name(Some(first), true)?;

        if b != b'=' {
            return Err(SyntaxError::BadAttributeSeparator { byte: b }.into());
        }

        let quote = self.require_byte()?;
        if quote != b'"' && quote != b'\'' {
            return Err(SyntaxError::UnquotedAttributeValue.into());
        }

        let mut value = Vec::new();
        loop {
            let b = self.require_byte()?;
            if b == quote {
                break;
            }
            value.push(b);
        }

        Ok(Attribute {
            name,
            value: reify_str(&value),
        })
    }
}
