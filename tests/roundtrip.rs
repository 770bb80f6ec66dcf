//! Whole-stream round-trips and checks of the `etsv` binary.

use std::process::Command;

use etsv::prelude::*;
use etsv::test_utilities::{
    random_rows, standard_input_fields, standard_output_fields, NRANDOM_ROWS,
};

#[test]
fn test_write_read_roundtrip() {
    let rows = random_rows(NRANDOM_ROWS);
    let metadata = vec!["generator=random".to_string()];

    let mut writer = EtsvWriter::new(
        Vec::new(),
        standard_output_fields(),
        &metadata,
        WriterOptions::default(),
    )
    .unwrap();
    for row in &rows {
        writer.write_row(row).unwrap();
    }
    let bytes = writer.into_inner();

    let reader = EtsvReader::new(
        bytes.as_slice(),
        standard_input_fields(),
        ReaderOptions::default(),
    )
    .unwrap();
    assert_eq!(reader.metadata(), &metadata[..]);

    let recovered: Vec<Row> = reader.map(|row| row.unwrap()).collect();
    assert_eq!(recovered, rows);
}

#[test]
fn test_gzip_roundtrip() {
    let rows = random_rows(100);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.etsv.gz");

    let mut writer = EtsvWriter::from_path(
        &path,
        standard_output_fields(),
        &[],
        WriterOptions::default(),
    )
    .unwrap();
    for row in &rows {
        writer.write_row(row).unwrap();
    }
    // dropping the sink finishes the gzip stream
    drop(writer.into_inner());

    let reader =
        EtsvReader::from_path(&path, standard_input_fields(), ReaderOptions::default()).unwrap();
    let recovered: Vec<Row> = reader.map(|row| row.unwrap()).collect();
    assert_eq!(recovered, rows);
}

#[test]
fn test_select_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_etsv"))
        .arg("select")
        .arg("--columns")
        .arg("Score,ID")
        .arg("tests_data/example.etsv")
        .output()
        .expect("etsv select failed");

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "##run=demo\n#:Score\tID\n3.5\tseq1\n7.25\tseq2\n"
    );
}

#[test]
fn test_select_command_general_tsv() {
    let output = Command::new(env!("CARGO_BIN_EXE_etsv"))
        .arg("select")
        .arg("--columns")
        .arg("3,1")
        .arg("--general-tsv")
        .arg("--force-title")
        .arg("--plain")
        .arg("tests_data/example_general.tsv")
        .output()
        .expect("etsv select failed");

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Third\tFirst\nx\ta\ny\tb\nz\tc\nw\td\n"
    );
}

#[test]
fn test_metadata_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_etsv"))
        .arg("metadata")
        .arg("--title")
        .arg("tests_data/example.etsv")
        .output()
        .expect("etsv metadata failed");

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "run=demo\nID\tLength\tScore\n"
    );
}

#[test]
fn test_select_command_rejects_unknown_option() {
    let output = Command::new(env!("CARGO_BIN_EXE_etsv"))
        .arg("select")
        .arg("--columns")
        .arg("ID")
        .arg("--option")
        .arg("sep=,")
        .arg("tests_data/example.etsv")
        .output()
        .expect("etsv select failed");

    assert!(!output.status.success(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported option(s): sep"));
}
