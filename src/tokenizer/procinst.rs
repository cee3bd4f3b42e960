use std::io::Read;

use crate::bytes::is_whitespace_byte;
use crate::error::{Result, SyntaxError};
use crate::token::Token;

use super::{reify_str, Tokenizer};

impl<R: Read> Tokenizer<R> {
    /// At this point: `<?` has been consumed.
    ///
    /// Two phases: the target runs to the first whitespace, `?` or `>`;
    /// everything after it up to `?>` is the instruction.
    pub(super) fn decode_processing_instruction(&mut self) -> Result<Token> {
        let mut target = Vec::new();
        let mut data = Vec::new();
        // The target phase is over.
        let mut found_space = false;
        // The previous byte was a `?` that may close the instruction.
        let mut found_end = false;

        loop {
            let b = self.require_byte()?;

            if found_end && b != b'>' {
                // The `?` was literal content after all.
                data.push(b'?');
                found_end = false;
            }

            match b {
                b'>' if found_end => {
                    return Ok(Token::ProcessingInstruction {
                        target: reify_str(&target),
                        data,
                    });
                }
                b'?' => {
                    end_target_phase(&target, &mut found_space)?;
                    found_end = true;
                }
                b'>' => {
                    // A bare `>` is instruction content.
                    end_target_phase(&target, &mut found_space)?;
                    data.push(b'>');
                }
                b if is_whitespace_byte(b) => {
                    if found_space {
                        data.push(b);
                    } else {
                        end_target_phase(&target, &mut found_space)?;
                    }
                }
                b => {
                    if found_space {
                        data.push(b);
                    } else {
                        target.push(b);
                    }
                }
            }
        }
    }
}

fn end_target_phase(target: &[u8], found_space: &mut bool) -> Result<()> {
    if !*found_space {
        if target.is_empty() {
            return Err(SyntaxError::EmptyProcInstTarget.into());
        }
        *found_space = true;
    }
    Ok(())
}
