//! Implementations of the `etsv` subcommands.

use std::io::Write;
use std::path::PathBuf;

use crate::args::parse_column_selector;
use crate::error::EtsvError;
use crate::field::{InputField, OutputField};
use crate::io::{InputStream, OutputStream};
use crate::options::{ReaderOptions, WriterOptions};
use crate::reader::EtsvReader;
use crate::writer::EtsvWriter;

/// Stream an ETSV file, re-emitting the selected columns in the requested
/// order. Metadata is carried over to the output.
pub fn etsv_select(
    input: &str,
    columns: &[String],
    reader_options: ReaderOptions,
    writer_options: WriterOptions,
    output: Option<&PathBuf>,
) -> Result<(), EtsvError> {
    let fields: Vec<InputField> = columns
        .iter()
        .map(|selector| parse_column_selector(selector))
        .collect();
    let source = InputStream::from_arg(input);
    let reader = EtsvReader::new(source.reader()?, fields, reader_options)?;

    // Output labels reuse the input title entry of each bound column when
    // one exists, falling back to the selector text.
    let output_fields: Vec<OutputField> = reader
        .fields()
        .iter()
        .map(|field| {
            let label = field
                .index()
                .and_then(|index| reader.title().and_then(|title| title.get(index)))
                .cloned();
            match label {
                Some(label) => OutputField::new(field.name(), label),
                None => OutputField::from_name(field.name()),
            }
        })
        .collect();

    let metadata = reader.metadata().to_vec();
    let sink = output.map_or(OutputStream::new_stdout(), |file| OutputStream::new(file));
    let mut writer = EtsvWriter::new(sink.writer()?, output_fields, &metadata, writer_options)?;

    for row in reader {
        writer.write_row(&row?)?;
    }
    writer.into_inner().flush()?;
    Ok(())
}

/// Print the metadata block (and optionally the title columns) of an
/// ETSV file.
pub fn etsv_metadata(input: &str, show_title: bool) -> Result<(), EtsvError> {
    let source = InputStream::from_arg(input);
    let reader = EtsvReader::new(source.reader()?, Vec::new(), ReaderOptions::default())?;
    for entry in reader.metadata() {
        println!("{}", entry);
    }
    if show_title {
        if let Some(title) = reader.title() {
            println!("{}", title.join("\t"));
        }
    }
    Ok(())
}

/// Generate a random ETSV file, for tests and benchmarks.
#[cfg(feature = "dev-commands")]
pub fn etsv_random(num: usize, output: Option<&PathBuf>) -> Result<(), EtsvError> {
    use crate::test_utilities::{random_rows, standard_output_fields};

    let metadata = vec!["generator=random".to_string()];
    let fields = standard_output_fields();
    let options = WriterOptions::default();
    let mut writer = match output {
        Some(path) => EtsvWriter::from_path(path, fields, &metadata, options)?,
        None => EtsvWriter::to_stdout(fields, &metadata, options)?,
    };
    for row in random_rows(num) {
        writer.write_row(&row)?;
    }
    writer.into_inner().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::etsv_select;
    use crate::error::EtsvError;
    use crate::options::{ReaderOptions, WriterOptions};

    fn select(
        content: &str,
        columns: &[&str],
        reader_options: ReaderOptions,
        writer_options: WriterOptions,
    ) -> Result<String, EtsvError> {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.etsv");
        let output = dir.path().join("out.etsv");
        fs::write(&input, content).unwrap();

        let columns: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        etsv_select(
            input.to_str().unwrap(),
            &columns,
            reader_options,
            writer_options,
            Some(&output),
        )?;
        Ok(fs::read_to_string(&output).unwrap())
    }

    #[test]
    fn test_select_reorders_columns() {
        let result = select(
            "##m\n#:A\tB\nx\ty\n",
            &["B", "A"],
            ReaderOptions::default(),
            WriterOptions::default(),
        )
        .unwrap();
        assert_eq!(result, "##m\n#:B\tA\ny\tx\n");
    }

    #[test]
    fn test_select_by_column_number() {
        // a numeric selector picks up its label from the input title
        let result = select(
            "#:A\tB\nx\ty\n",
            &["2"],
            ReaderOptions::default(),
            WriterOptions::default(),
        )
        .unwrap();
        assert_eq!(result, "#:B\ny\n");
    }

    #[test]
    fn test_select_plain_output() {
        let writer_options = WriterOptions {
            extended_tsv: false,
            ..Default::default()
        };
        let result = select(
            "##m\n#:A\tB\nx\ty\n",
            &["A"],
            ReaderOptions::default(),
            writer_options,
        )
        .unwrap();
        assert_eq!(result, "A\nx\n");
    }

    #[test]
    fn test_select_missing_column() {
        let result = select(
            "#:A\tB\nx\ty\n",
            &["C"],
            ReaderOptions::default(),
            WriterOptions::default(),
        );
        assert!(matches!(result, Err(EtsvError::HeaderNotFound(h)) if h == "C"));
    }
}
