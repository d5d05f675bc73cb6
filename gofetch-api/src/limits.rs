use thiserror::Error;

pub const MAX_RESPONSE_BYTES: usize = 10 * 1024 * 1024; // 10 MB

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LimitError {
    /// The server announced a body over the cap; nothing was read.
    #[error("declared response body too large: {declared} bytes (max {max})")]
    DeclaredTooLarge { max: usize, declared: u64 },
    /// The body grew past the cap while streaming.
    #[error("received response body too large: {received}+ bytes (max {max})")]
    ReceivedTooLarge { max: usize, received: usize },
}

pub type LimitResult<T> = Result<T, LimitError>;

/// Reject a `content-length` over `max` before reading the body.
pub fn check_declared(declared: u64, max: usize) -> LimitResult<()> {
    if declared > max as u64 {
        return Err(LimitError::DeclaredTooLarge { max, declared });
    }
    Ok(())
}

/// Body buffer that refuses to grow past its cap, whatever the server declared.
#[derive(Debug)]
pub struct CappedBody {
    buf: Vec<u8>,
    max: usize,
}

impl Default for CappedBody {
    fn default() -> Self {
        Self::with_max(MAX_RESPONSE_BYTES)
    }
}

impl CappedBody {
    pub fn with_max(max: usize) -> Self {
        Self { buf: Vec::new(), max }
    }

    /// Append a chunk; on overflow the buffer is left as it was.
    pub fn extend(&mut self, chunk: &[u8]) -> LimitResult<()> {
        let received = self.buf.len().saturating_add(chunk.len());
        if received > self.max {
            return Err(LimitError::ReceivedTooLarge { max: self.max, received });
        }
        self.buf.extend_from_slice(chunk);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
