//! Input/Output stream handling with [`InputStream`] and [`OutputStream`].
//!
//! These types abstract over reading/writing both plaintext and
//! gzip-compressed files, plus the standard streams, so the reader and
//! writer cores never open or close anything themselves. The returned
//! readers/writers own their file handles, which close on drop on every
//! exit path.

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::Write;
use std::io::{self, BufWriter};
use std::io::{BufReader, Read};
use std::path::PathBuf;

/// Check if a file is gzipped by looking for the magic numbers.
/// Files shorter than the magic are plaintext by definition.
fn is_gzipped_file(file_path: impl Into<PathBuf>) -> io::Result<bool> {
    let mut file = File::open(file_path.into())?;
    let mut buffer = [0; 2];
    let mut filled = 0;
    while filled < buffer.len() {
        let n = file.read(&mut buffer[filled..])?;
        if n == 0 {
            return Ok(false);
        }
        filled += n;
    }
    Ok(buffer == [0x1f, 0x8b])
}

#[derive(Clone, Debug)]
enum InputSource {
    File(PathBuf),
    Stdin,
}

/// Represents an input stream.
///
/// This struct handles opening data for reading, abstracting over
/// plaintext and gzip-compressed files (detected by magic bytes) and
/// standard input, through a common interface.
#[derive(Clone, Debug)]
pub struct InputStream {
    source: InputSource,
}

impl InputStream {
    /// Constructs a new `InputStream` over a file. Gzip-compressed input
    /// is uncompressed automatically.
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            source: InputSource::File(filepath.into()),
        }
    }

    /// Constructs a new [`InputStream`] over standard input.
    /// Standard input is never gzip-sniffed.
    pub fn new_stdin() -> Self {
        Self {
            source: InputSource::Stdin,
        }
    }

    /// The command-line convention: `-` means standard input, anything
    /// else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::new_stdin()
        } else {
            Self::new(arg)
        }
    }

    /// Opens the source and returns a buffered reader.
    pub fn reader(&self) -> io::Result<BufReader<Box<dyn Read>>> {
        let reader: Box<dyn Read> = match &self.source {
            InputSource::File(path) => {
                let is_gzipped = is_gzipped_file(path)?;
                let file = File::open(path)?;
                if is_gzipped {
                    Box::new(GzDecoder::new(file))
                } else {
                    Box::new(file)
                }
            }
            InputSource::Stdin => Box::new(io::stdin()),
        };
        Ok(BufReader::new(reader))
    }
}

enum OutputDestination {
    File(PathBuf),
    Stdout,
}

/// Represents an output stream.
///
/// This struct handles opening a sink for writing, abstracting over
/// plaintext files, gzip-compressed files (by the `.gz` extension), and
/// standard output.
pub struct OutputStream {
    destination: OutputDestination,
}

impl OutputStream {
    /// Constructs a new `OutputStream` over a file. If the file extension
    /// is `.gz`, the output is gzip-compressed automatically.
    pub fn new(filepath: impl Into<PathBuf>) -> Self {
        Self {
            destination: OutputDestination::File(filepath.into()),
        }
    }

    /// Constructs a new [`OutputStream`] for standard output.
    pub fn new_stdout() -> Self {
        Self {
            destination: OutputDestination::Stdout,
        }
    }

    /// The command-line convention: `-` means standard output, anything
    /// else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::new_stdout()
        } else {
            Self::new(arg)
        }
    }

    /// Opens the destination and returns a buffered writer.
    pub fn writer(&self) -> io::Result<Box<dyn Write>> {
        let writer: Box<dyn Write> = match &self.destination {
            OutputDestination::File(path) => {
                let is_gzip = path.extension().map_or(false, |ext| ext == "gz");
                if is_gzip {
                    Box::new(BufWriter::new(GzEncoder::new(
                        File::create(path)?,
                        Compression::default(),
                    )))
                } else {
                    Box::new(BufWriter::new(File::create(path)?))
                }
            }
            OutputDestination::Stdout => Box::new(BufWriter::new(io::stdout())),
        };
        Ok(writer)
    }
}
