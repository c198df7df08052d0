use crate::error::{IdxError, Result};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{ErrorKind, Read};

/// Magic number of an IDX file holding unsigned bytes in 3 dimensions (images).
pub const IMAGE_MAGIC: u32 = 0x0000_0803;
/// Magic number of an IDX file holding unsigned bytes in 1 dimension (labels).
pub const LABEL_MAGIC: u32 = 0x0000_0801;

const CHUNK_LEN: usize = 8192;

/// Cursor over an IDX stream.
///
/// Every header field in the format is a big-endian `u32`, the payload is a flat
/// run of bytes. The reader tracks how many bytes it has consumed so errors
/// can point at an offset.
pub struct IdxReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> IdxReader<R> {
    pub fn new(inner: R) -> IdxReader<R> {
        IdxReader { inner, position: 0 }
    }

    /// Reads the 4-byte magic number and checks it against `expected`.
    ///
    /// A stream that ends early surfaces as the underlying io error, a value
    /// that doesn't match is `IdxError::InvalidMagic`.
    pub fn expect_magic(&mut self, expected: u32) -> Result<()> {
        let found = self.read_u32()?;
        if found != expected {
            return Err(IdxError::InvalidMagic { expected, found });
        }
        Ok(())
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let value = self.inner.read_u32::<BigEndian>()?;
        self.position += 4;
        Ok(value)
    }

    /// Reads until `buf` is full or the stream ends, returning the byte count.
    pub fn read_full(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        self.position += filled as u64;
        Ok(filled)
    }

    /// Reads exactly `len` bytes, a short stream is `IdxError::Truncated`.
    ///
    /// The buffer only grows with bytes that actually arrived, so a header
    /// declaring more than the stream holds fails on the short read instead of
    /// allocating the declared size up front.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(len.min(CHUNK_LEN));
        let mut chunk = [0u8; CHUNK_LEN];
        while out.len() < len {
            let want = (len - out.len()).min(CHUNK_LEN);
            let n = self.read_full(&mut chunk[..want])?;
            out.extend_from_slice(&chunk[..n]);
            if n < want {
                return Err(IdxError::Truncated {
                    expected: len,
                    found: out.len(),
                });
            }
        }
        Ok(out)
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> u64 {
        self.position
    }
}
