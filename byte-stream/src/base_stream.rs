use stream_error::Result;

/// Uniform contract over byte-oriented endpoints.
///
/// Callers hold a value typed as `Stream` and invoke read, write and close
/// without knowing the concrete endpoint behind it. Every operation is
/// binary safe: no byte value receives special treatment.
pub trait Stream {
    /// Read up to `length` bytes from the endpoint.
    ///
    /// The result may be shorter than requested only when fewer than
    /// `length` bytes remain to deliver.
    fn read(&mut self, length: usize) -> Result<Vec<u8>>;

    /// Write up to `length` bytes of `data`,
    /// or all of `data` when `length` is `None`.
    ///
    /// If `length` exceeds `data.len()`, all of `data` is written and its
    /// count returned. If `length` is smaller, only the first `length`
    /// bytes are transmitted and the remainder is discarded, not kept for
    /// a later call. Returns the count of bytes actually transferred.
    fn write(&mut self, data: &[u8], length: Option<usize>) -> Result<usize>;

    /// Release the endpoint.
    ///
    /// Closing is one-way: no operation is valid afterwards, and a second
    /// close fails with `StreamError::Closed`.
    fn close(&mut self) -> Result<()>;
}
