//! Uniform, binary-safe abstraction over byte-oriented I/O endpoints.
//!
//! Every endpoint implements the [`Stream`] contract: bounded read, bounded
//! write and one-way close. Two realizations are provided:
//!
//! - [`ResourceStream`] adapts a single already-open OS handle
//!   (file, socket, pipe) supplied by the caller.
//! - [`BufferStream`] adapts an in-memory byte queue, consumed as it is
//!   read.
//!
//! The abstraction is synchronous and blocking: an operation suspends
//! exactly as long as the underlying resource does. Instances own their
//! storage exclusively and carry no internal locking, so a stream shared
//! between concurrent callers must be serialized by the caller.

pub mod base_stream;
pub mod buffer_stream;
pub mod resource_stream;

pub use base_stream::Stream;
pub use buffer_stream::BufferStream;
pub use resource_stream::{Resource, ResourceStream};
