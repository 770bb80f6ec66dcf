//! A streaming reader and writer for extended TSV (ETSV) files: plain
//! tab-separated data carrying `#` comments, `##` metadata entries, and a
//! `#:` title line naming the columns.

pub mod dialect;
pub mod row;
pub mod field;
pub mod iterators;
pub mod options;
pub mod reader;
pub mod writer;
pub mod io;
pub mod args;
pub mod commands;
pub mod error;
pub mod test_utilities;

pub mod prelude {
    pub use crate::dialect::{Dialect, ETSV};
    pub use crate::error::EtsvError;
    pub use crate::field::{ColumnBinding, Converter, Formatter, InputField, OutputField};
    pub use crate::io::{InputStream, OutputStream};
    pub use crate::iterators::Pushback;
    pub use crate::options::{ReaderOptions, WriterOptions};
    pub use crate::reader::EtsvReader;
    pub use crate::row::{IntoValue, Row, Value};
    pub use crate::writer::EtsvWriter;
}
