use crate::base_stream::Stream;
use stream_error::{Result, StreamError};

/// In-memory stream over a consumable byte queue.
///
/// Reading drains the front of the queue, so the buffer only ever shrinks.
/// Writing persists nothing and only reports the count the truncation
/// contract would have transferred, which makes the type usable as a
/// stand-in endpoint where no OS resource is wanted.
pub struct BufferStream {
    /// `None` once the stream has been closed.
    buffer: Option<Vec<u8>>,
}

impl BufferStream {
    /// Create a stream over an initial byte sequence, possibly empty.
    pub fn new(initial: impl Into<Vec<u8>>) -> Self {
        Self {
            buffer: Some(initial.into()),
        }
    }

    /// Bytes still available for reading, or `None` after close.
    pub fn remaining(&self) -> Option<usize> {
        self.buffer.as_ref().map(Vec::len)
    }
}

impl Stream for BufferStream {
    /// Unlike the resource-backed variant, an exhausted buffer reports
    /// `StreamError::EndOfStream` instead of returning an empty result,
    /// and a zero-length read is valid.
    fn read(&mut self, length: usize) -> Result<Vec<u8>> {
        let buffer = self.buffer.as_mut().ok_or(StreamError::Closed)?;

        if buffer.is_empty() {
            return Err(StreamError::EndOfStream);
        }
        if length == 0 {
            return Ok(Vec::new());
        }
        if length >= buffer.len() {
            return Ok(std::mem::take(buffer));
        }
        Ok(buffer.drain(..length).collect())
    }

    /// Pass-through write: nothing is stored, the reported count is what
    /// the truncation contract would have transferred.
    fn write(&mut self, data: &[u8], length: Option<usize>) -> Result<usize> {
        if self.buffer.is_none() {
            return Err(StreamError::Closed);
        }
        Ok(length.unwrap_or(data.len()).min(data.len()))
    }

    fn close(&mut self) -> Result<()> {
        self.buffer.take().ok_or(StreamError::Closed)?;
        Ok(())
    }
}
