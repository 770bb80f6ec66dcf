use std::path::PathBuf;

use clap::{Parser, Subcommand};
use etsv::{
    args::{ReaderArgs, WriterArgs},
    commands::{etsv_metadata, etsv_select},
    prelude::EtsvError,
};

#[cfg(feature = "dev-commands")]
use etsv::commands::etsv_random;

const INFO: &str = "\
etsv: tools for extended TSV files
usage: etsv [--help] <subcommand>

Subcommands:

  select: extract and reorder columns, by header label or column number.

  metadata: print the metadata entries of an ETSV file.

";

#[derive(Parser)]
#[clap(name = "etsv")]
#[clap(about = INFO)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Select {
        /// columns to select, as comma-separated header labels or 1-based
        /// column numbers; the output keeps this order
        #[arg(short, long, value_delimiter = ',', required = true)]
        columns: Vec<String>,

        /// an input ETSV file ("-" reads from standard input)
        #[arg(required = true)]
        input: String,

        #[clap(flatten)]
        reader: ReaderArgs,

        #[clap(flatten)]
        writer: WriterArgs,

        /// an optional output file (standard output will be used if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    Metadata {
        /// an input ETSV file ("-" reads from standard input)
        #[arg(required = true)]
        input: String,

        /// also print the title line's column labels
        #[arg(long)]
        title: bool,
    },

    #[cfg(feature = "dev-commands")]
    Random {
        /// number of random rows to generate
        #[arg(long, required = true)]
        rows: usize,

        /// an optional output file (standard output will be used if not specified)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn run() -> Result<(), EtsvError> {
    let cli = Cli::parse();
    match &cli.command {
        Some(Commands::Select {
            columns,
            input,
            reader,
            writer,
            output,
        }) => etsv_select(
            input,
            columns,
            reader.to_options()?,
            writer.to_options(),
            output.as_ref(),
        ),
        Some(Commands::Metadata { input, title }) => etsv_metadata(input, *title),
        #[cfg(feature = "dev-commands")]
        Some(Commands::Random { rows, output }) => etsv_random(*rows, output.as_ref()),
        None => {
            println!("{}\n", INFO);
            std::process::exit(1);
        }
    }
}

fn main() {
    match run() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
