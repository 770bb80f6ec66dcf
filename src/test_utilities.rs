//! Test cases and test utility functions.
//!

use std::io::Write;

use rand::{thread_rng, Rng};
use tempfile::NamedTempFile;

use crate::error::EtsvError;
use crate::field::{Converter, InputField, OutputField};
use crate::options::WriterOptions;
use crate::row::{Row, Value};
use crate::writer::EtsvWriter;

// Stochastic test defaults
//
// This is the random number of rows to use in tests.
// The tradeoff is catching stochastic errors vs test time.
pub const NRANDOM_ROWS: usize = 1000;

// identifier space
pub const MAX_ID: usize = 100_000;

// length column bounds
pub const MIN_LEN: i64 = 1;
pub const MAX_LEN: i64 = 10_000;

/// Sample a random identifier like `seq841`.
pub fn random_id() -> String {
    let mut rng = thread_rng();
    format!("seq{}", rng.gen_range(0..MAX_ID))
}

/// Build a random row with the standard test columns `id`, `length`,
/// and `score`.
pub fn random_row() -> Row {
    let mut rng = thread_rng();
    let mut row = Row::new();
    row.insert("id".to_string(), Value::String(random_id()));
    row.insert(
        "length".to_string(),
        Value::Integer(rng.gen_range(MIN_LEN..MAX_LEN)),
    );
    row.insert("score".to_string(), Value::Float(rng.gen_range(0.0..100.0)));
    row
}

/// Build `n` random rows.
pub fn random_rows(n: usize) -> Vec<Row> {
    (0..n).map(|_| random_row()).collect()
}

/// The input fields matching the columns of [`random_row`].
pub fn standard_input_fields() -> Vec<InputField> {
    vec![
        InputField::new("id", "ID"),
        InputField::new("length", "Length").with_converter(Converter::Integer),
        InputField::new("score", "Score").with_converter(Converter::Float),
    ]
}

/// The output fields matching the columns of [`random_row`].
pub fn standard_output_fields() -> Vec<OutputField> {
    vec![
        OutputField::new("id", "ID"),
        OutputField::new("length", "Length"),
        OutputField::new("score", "Score"),
    ]
}

/// Write `n` random rows to a temporary ETSV file.
pub fn random_etsv_file(n: usize) -> Result<NamedTempFile, EtsvError> {
    let file = NamedTempFile::new()?;
    let metadata = vec!["generator=random".to_string()];
    let mut writer = EtsvWriter::from_path(
        file.path(),
        standard_output_fields(),
        &metadata,
        WriterOptions::default(),
    )?;
    for row in random_rows(n) {
        writer.write_row(&row)?;
    }
    writer.into_inner().flush()?;
    Ok(file)
}
