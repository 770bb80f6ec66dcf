//! Streaming ETSV writing with [`EtsvWriter`].

use std::io::Write;
use std::path::PathBuf;

use crate::dialect::ETSV;
use crate::error::EtsvError;
use crate::field::OutputField;
use crate::io::file::OutputStream;
use crate::options::WriterOptions;
use crate::row::Row;

/// An extended TSV writer over any sink.
///
/// Construction writes the preamble once: each metadata string as a
/// `##`-prefixed line (extended mode only), then the title line listing
/// each field's label, `#:`-prefixed in extended mode and bare otherwise.
/// After that, [`EtsvWriter::write_row`] renders rows tab-separated in
/// field-list order. The writer holds no buffered state of its own;
/// buffering and flushing belong to the sink.
///
/// # Examples
///
/// ```
/// use etsv::prelude::*;
///
/// let fields = vec![OutputField::new("id", "ID"), OutputField::new("length", "Length")];
/// let metadata = vec!["note".to_string()];
/// let mut writer =
///     EtsvWriter::new(Vec::new(), fields, &metadata, WriterOptions::default()).unwrap();
///
/// let mut row = Row::new();
/// row.insert("id".to_string(), Value::from("x1"));
/// row.insert("length".to_string(), Value::from(10_i64));
/// writer.write_row(&row).unwrap();
///
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(text, "##note\n#:ID\tLength\nx1\t10\n");
/// ```
pub struct EtsvWriter<W: Write> {
    writer: W,
    fields: Vec<OutputField>,
}

impl<W: Write> EtsvWriter<W> {
    /// Create a writer over an open sink, emitting the metadata and title
    /// preamble immediately.
    pub fn new(
        mut writer: W,
        fields: Vec<OutputField>,
        metadata: &[String],
        options: WriterOptions,
    ) -> Result<Self, EtsvError> {
        if options.extended_tsv {
            for entry in metadata {
                writeln!(writer, "{}{}", ETSV.metadata, entry)?;
            }
        }
        if options.print_title {
            let labels: Vec<&str> = fields.iter().map(|field| field.title_label()).collect();
            let prefix = if options.extended_tsv {
                ETSV.title.as_str()
            } else {
                ""
            };
            writeln!(writer, "{}{}", prefix, labels.join("\t"))?;
        }
        Ok(Self { writer, fields })
    }

    /// Format and write one row. Every column is rendered before anything
    /// is written, so a failed row leaves the output untouched.
    pub fn write_row(&mut self, row: &Row) -> Result<(), EtsvError> {
        let mut columns = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            columns.push(field.format(row)?);
        }
        writeln!(self.writer, "{}", columns.join("\t"))?;
        Ok(())
    }

    pub fn fields(&self) -> &[OutputField] {
        &self.fields
    }

    /// Consume the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl EtsvWriter<Box<dyn Write>> {
    /// Create a plaintext or gzipped (by `.gz` extension) ETSV file for
    /// writing.
    pub fn from_path(
        filepath: impl Into<PathBuf>,
        fields: Vec<OutputField>,
        metadata: &[String],
        options: WriterOptions,
    ) -> Result<Self, EtsvError> {
        let output = OutputStream::new(filepath);
        Self::new(output.writer()?, fields, metadata, options)
    }

    /// Write to standard output.
    pub fn to_stdout(
        fields: Vec<OutputField>,
        metadata: &[String],
        options: WriterOptions,
    ) -> Result<Self, EtsvError> {
        let output = OutputStream::new_stdout();
        Self::new(output.writer()?, fields, metadata, options)
    }
}
