use std::io::{self, Read};

const BUFFER_SIZE: usize = 8192;

/// A byte-at-a-time view over an arbitrary reader.
///
/// Reads are buffered internally so that sources which are not already
/// byte-addressable do not pay one syscall per byte.
pub struct ByteReader<R: Read> {
    inner: R,
    buf: Box<[u8]>,
    pos: usize,
    cap: usize,
}

impl<R: Read> ByteReader<R> {
    pub fn new(inner: R) -> ByteReader<R> {
        ByteReader::with_capacity(inner, BUFFER_SIZE)
    }

    pub fn with_capacity(inner: R, buf_size: usize) -> ByteReader<R> {
        assert!(buf_size > 0, "Buffer cannot be empty");
        ByteReader {
            inner,
            buf: vec![0; buf_size].into_boxed_slice(),
            pos: 0,
            cap: 0,
        }
    }

    /// Returns the next byte of the source, or `None` at end of input.
    ///
    /// End of input is not sticky: if the underlying reader produces more
    /// data on a later read (a growing file, a reset cursor), subsequent
    /// calls pick it up.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        if self.pos == self.cap {
            let bytes_read;
            loop {
                match self.inner.read(&mut self.buf) {
                    Ok(n) => {
                        bytes_read = n;
                        break;
                    }
                    Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            }

            if bytes_read == 0 {
                return Ok(None);
            }

            self.cap = bytes_read;
            self.pos = 0;
        }

        let b = self.buf[self.pos];
        self.pos += 1;
        Ok(Some(b))
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
