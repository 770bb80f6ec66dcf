//! Types and methods for opening input streams and output sinks.

pub mod file;

pub use file::{InputStream, OutputStream};
