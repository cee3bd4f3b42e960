use std::io::Read;

use crate::error::Result;
use crate::token::Token;

use super::Tokenizer;

impl<R: Read> Tokenizer<R> {
    /// At this point: `<!--` has been consumed.
    pub(super) fn decode_comment(&mut self) -> Result<Token> {
        let mut data = Vec::new();
        let mut dashes = 0;

        loop {
            let b = self.require_byte()?;
            match b {
                b'-' => dashes += 1,
                b'>' if dashes >= 2 => return Ok(Token::Comment(data)),
                b => {
                    // A dash run that did not end the comment is literal
                    // content.
                    for _ in 0..dashes {
                        data.push(b'-');
                    }
                    dashes = 0;
                    data.push(b);
                }
            }
        }
    }
}
