//! Streaming ETSV reading with [`EtsvReader`].
//!
//! The reader is a lazy, forward-only iterator over data rows. All of the
//! preamble work — collecting `##` metadata, finding the `#:` title,
//! consuming a forced title, and binding header-named fields to column
//! positions — happens eagerly at construction, so iteration itself does
//! nothing but split lines and convert values. The first line that turns
//! out not to belong to the preamble is handed back through a one-slot
//! [`Pushback`] adapter rather than lost.
//!
//! `##` and `#:` prefixes are only recognized in the leading preamble
//! block; once data has started, every `#`-prefixed line is an ordinary
//! skipped comment.

use std::io::{BufRead, BufReader, Lines, Read};
use std::path::PathBuf;

use crate::dialect::{split_line, LineKind, ETSV};
use crate::error::EtsvError;
use crate::field::InputField;
use crate::io::file::InputStream;
use crate::iterators::Pushback;
use crate::options::ReaderOptions;
use crate::row::Row;

/// An extended TSV reader over any buffered line source.
///
/// Implements `Iterator<Item = Result<Row, EtsvError>>`; end of stream is
/// the iterator ending, never an error. A stream that ends while the
/// preamble is still being scanned (an empty or header-only file) is also
/// not an error: the reader constructs with whatever metadata and title it
/// saw, skips field resolution, and yields no rows.
///
/// # Examples
///
/// ```
/// use etsv::prelude::*;
///
/// let fields = vec![
///     InputField::new("id", "ID"),
///     InputField::new("length", "Length").with_converter(Converter::Integer),
/// ];
/// let mut reader =
///     EtsvReader::from_path("tests_data/example.etsv", fields, ReaderOptions::default())
///         .unwrap();
///
/// assert_eq!(reader.metadata(), &["run=demo".to_string()]);
/// let row = reader.read_row().unwrap().unwrap();
/// assert_eq!(row["id"], Value::String("seq1".to_string()));
/// assert_eq!(row["length"], Value::Integer(10));
/// ```
pub struct EtsvReader<B: BufRead> {
    lines: Pushback<Lines<B>>,
    fields: Vec<InputField>,
    options: ReaderOptions,
    metadata: Vec<String>,
    title: Option<Vec<String>>,
}

impl<B: BufRead> EtsvReader<B> {
    /// Create a reader over an open line source, scanning the preamble
    /// and resolving the supplied fields eagerly.
    ///
    /// Title forcing is implied when any field still needs header
    /// resolution. A field whose header is missing from the title fails
    /// here with [`EtsvError::HeaderNotFound`], never mid-stream.
    pub fn new(
        reader: B,
        fields: Vec<InputField>,
        options: ReaderOptions,
    ) -> Result<Self, EtsvError> {
        let mut reader = Self {
            lines: Pushback::new(reader.lines()),
            fields,
            options,
            metadata: Vec::new(),
            title: None,
        };
        if reader.scan_preamble()? {
            reader.resolve_fields()?;
        }
        Ok(reader)
    }

    // Scan `#`-prefixed preamble lines and, if needed, consume a forced
    // title line. Returns false if the stream ended during scanning, in
    // which case the file has no data and field resolution is skipped.
    fn scan_preamble(&mut self) -> Result<bool, EtsvError> {
        if self.options.extended_tsv {
            loop {
                let line = match self.lines.next() {
                    Some(Ok(line)) => line,
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(false),
                };
                match ETSV.classify(&line) {
                    LineKind::Title(rest) => {
                        // a later title line overwrites an earlier one
                        self.title = Some(split_line(rest, self.options.maxsplit));
                    }
                    LineKind::Metadata(rest) => self.metadata.push(rest.to_string()),
                    LineKind::Comment => {}
                    LineKind::Data => {
                        self.lines.step_back(Ok(line))?;
                        break;
                    }
                }
            }
        }
        let need_title =
            self.options.force_title || self.fields.iter().any(|field| !field.is_resolved());
        if self.title.is_none() && need_title {
            match self.lines.next() {
                Some(Ok(line)) => self.title = Some(split_line(&line, self.options.maxsplit)),
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    fn resolve_fields(&mut self) -> Result<(), EtsvError> {
        let title = self.title.as_deref().unwrap_or(&[]);
        for field in &mut self.fields {
            field.resolve(title)?;
        }
        Ok(())
    }

    /// Metadata lines collected from the preamble, prefix stripped and
    /// otherwise verbatim, in file order.
    pub fn metadata(&self) -> &[String] {
        &self.metadata
    }

    /// The title columns, once discovered or forced.
    pub fn title(&self) -> Option<&[String]> {
        self.title.as_deref()
    }

    /// The supplied fields, with their bindings resolved.
    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }

    /// Pull the next row, returning `Ok(None)` at end of stream, for
    /// callers preferring the transposed idiom over `Iterator`.
    pub fn read_row(&mut self) -> Result<Option<Row>, EtsvError> {
        self.next().transpose()
    }
}

impl EtsvReader<BufReader<Box<dyn Read>>> {
    /// Open a plaintext or gzipped ETSV file for reading.
    pub fn from_path(
        filepath: impl Into<PathBuf>,
        fields: Vec<InputField>,
        options: ReaderOptions,
    ) -> Result<Self, EtsvError> {
        let input = InputStream::new(filepath);
        Self::new(input.reader()?, fields, options)
    }
}

impl<B: BufRead> Iterator for EtsvReader<B> {
    type Item = Result<Row, EtsvError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            if self.options.extended_tsv && ETSV.is_comment(&line) {
                continue;
            }
            let values = split_line(&line, self.options.maxsplit);
            let mut row = Row::with_capacity(self.fields.len());
            for field in &self.fields {
                match field.parse(&values) {
                    Ok((name, value)) => {
                        row.insert(name, value);
                    }
                    Err(e) => return Some(Err(e)),
                }
            }
            return Some(Ok(row));
        }
    }
}
