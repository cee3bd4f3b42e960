use std::io::Read;

use crate::bytes::is_name_byte;
use crate::error::Result;
use crate::name::Name;

use super::{reify_str, Tokenizer};

impl<R: Read> Tokenizer<R> {
    /// Decodes a possibly prefixed name, resolving it against the current
    /// namespace scope.
    ///
    /// `first` is the byte the caller already consumed (`None` to read one),
    /// `attr` selects attribute mode, in which the default namespace does
    /// not apply. Returns the resolved name, the byte which terminated it,
    /// and whether the namespace was adopted from an enclosing default
    /// declaration.
    pub(super) fn decode_name(&mut self, first: Option<u8>, attr: bool) -> Result<(Name, u8, bool)> {
        let mut namespace = if attr {
            String::new()
        } else {
            self.namespaces.default_namespace().to_string()
        };

        let mut primary = Vec::new();
        let mut secondary = Vec::new();
        let mut saw_colon = false;

        let mut b = match first {
            Some(b) => b,
            None => self.require_byte()?,
        };

        loop {
            if b == b':' && !saw_colon {
                saw_colon = true;
            } else if is_name_byte(b) || b == b':' {
                if saw_colon {
                    secondary.push(b);
                } else {
                    primary.push(b);
                }
            } else {
                break;
            }
            b = self.require_byte()?;
        }

        if saw_colon {
            let prefix = reify_str(&primary);
            namespace = match self.namespaces.resolve_prefix(&prefix) {
                Some(uri) => uri.to_string(),
                // An undeclared prefix travels verbatim; the start-element
                // decoder may still rewrite it if this element declares the
                // prefix itself.
                None => prefix,
            };

            let name = Name {
                namespace,
                local_name: reify_str(&secondary),
            };
            return Ok((name, b, false));
        }

        let by_default = !namespace.is_empty();
        let name = Name {
            namespace,
            local_name: reify_str(&primary),
        };
        Ok((name, b, by_default))
    }
}
