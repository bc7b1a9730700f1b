use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream};
#[cfg(unix)]
use std::os::unix::net::UnixStream;
use std::process::{ChildStdin, ChildStdout};

use crate::base_stream::Stream;
use stream_error::{Result, StreamError};

/// Capability contract of an already-open OS handle.
///
/// The stream only needs read, write and close from its backing resource,
/// not its identity; whether the handle is a file, a socket or a pipe is
/// the caller's concern. Opening and reconnecting never happen here, the
/// resource must be handed over ready for use.
pub trait Resource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    fn write(&mut self, data: &[u8]) -> io::Result<usize>;

    fn close(&mut self) -> io::Result<()>;
}

impl Resource for File {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }

    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Write::write(self, data)
    }

    /// The descriptor itself is released when the handle is dropped.
    fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl Resource for TcpStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }

    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Write::write(self, data)
    }

    fn close(&mut self) -> io::Result<()> {
        self.shutdown(Shutdown::Both)
    }
}

#[cfg(unix)]
impl Resource for UnixStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }

    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Write::write(self, data)
    }

    fn close(&mut self) -> io::Result<()> {
        self.shutdown(Shutdown::Both)
    }
}

impl Resource for ChildStdin {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(
            ErrorKind::Unsupported,
            "stdin pipe is write-only",
        ))
    }

    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Write::write(self, data)
    }

    fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

impl Resource for ChildStdout {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }

    fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(
            ErrorKind::Unsupported,
            "stdout pipe is read-only",
        ))
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Stream over a single caller-supplied OS resource (file, socket, pipe).
///
/// Operations block exactly as long as the resource does. A read deadline,
/// if any, is configured by the caller on the resource before it is handed
/// over; the stream only surfaces the deadline trip as
/// `StreamError::Timeout`.
pub struct ResourceStream<R: Resource> {
    /// `None` once the stream has been closed.
    handle: Option<R>,
}

impl<R: Resource> ResourceStream<R> {
    /// Wrap an already-open resource.
    pub fn new(handle: R) -> Self {
        Self {
            handle: Some(handle),
        }
    }
}

impl<R: Resource> Stream for ResourceStream<R> {
    /// Read up to `length` bytes in a single call to the resource
    /// primitive. A short or empty result near end-of-source is not an
    /// error.
    fn read(&mut self, length: usize) -> Result<Vec<u8>> {
        // Invalid length fails regardless of handle state.
        if length == 0 {
            return Err(StreamError::InvalidArgument(
                "cannot read zero bytes from a resource".to_owned(),
            ));
        }
        let handle = self.handle.as_mut().ok_or(StreamError::Closed)?;

        let mut buf = vec![0; length];
        let read = match handle.read(&mut buf) {
            Ok(read) => read,
            Err(err)
                if matches!(
                    err.kind(),
                    ErrorKind::TimedOut | ErrorKind::WouldBlock
                ) =>
            {
                // A read deadline configured on the resource tripped.
                return Err(StreamError::Timeout(format!(
                    "reading {} bytes",
                    length
                )));
            }
            Err(err) => return Err(StreamError::Io(err)),
        };
        buf.truncate(read);

        log::debug!("read {} of {} requested bytes", read, length);
        Ok(buf)
    }

    fn write(&mut self, data: &[u8], length: Option<usize>) -> Result<usize> {
        let handle = self.handle.as_mut().ok_or(StreamError::Closed)?;

        // Bytes beyond `length` are discarded, not kept for a later call.
        let length = length.unwrap_or(data.len()).min(data.len());
        let written = handle.write(&data[..length])?;

        log::debug!("wrote {} of {} submitted bytes", written, length);
        Ok(written)
    }

    fn close(&mut self) -> Result<()> {
        // The handle is taken out before closing, so even a failed close
        // leaves the stream unusable.
        let mut handle = self.handle.take().ok_or(StreamError::Closed)?;
        handle.close()?;
        Ok(())
    }
}
