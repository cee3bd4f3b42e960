use std::io::Read;

use crate::error::Result;
use crate::splitter::CDATA_START;
use crate::token::Token;

use super::Tokenizer;

impl<R: Read> Tokenizer<R> {
    /// At this point: `<![` has been consumed.
    ///
    /// If the remaining `CDATA[` of the opening delimiter matches, the
    /// section's content is emitted as character data. On a mismatch the
    /// bytes consumed so far turn out to be ordinary directive content.
    pub(super) fn decode_cdata_or_directive(&mut self) -> Result<Token> {
        let mut data = vec![b'['];

        for &expected in &CDATA_START[3..] {
            let b = self.require_byte()?;
            if b != expected {
                if b == b'>' {
                    return Ok(Token::Directive(data));
                }
                data.push(b);
                return self.decode_directive(data);
            }
            data.push(b);
        }

        self.decode_cdata()
    }

    /// At this point: `<![CDATA[` has been consumed.
    fn decode_cdata(&mut self) -> Result<Token> {
        let mut data = Vec::new();
        let mut brackets = 0;

        loop {
            let b = self.require_byte()?;
            match b {
                b']' => brackets += 1,
                b'>' if brackets >= 2 => {
                    // Brackets beyond the two that close the section are
                    // literal content.
                    for _ in 0..brackets - 2 {
                        data.push(b']');
                    }
                    return Ok(Token::CharData(data));
                }
                b => {
                    // A bracket run that did not end the section is literal
                    // content.
                    for _ in 0..brackets {
                        data.push(b']');
                    }
                    brackets = 0;
                    data.push(b);
                }
            }
        }
    }
}
