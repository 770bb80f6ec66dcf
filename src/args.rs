//! Reusable command-line argument groups for ETSV tools.
//!
//! Any tool reading or writing ETSV shares the same handful of knobs, so
//! they are defined once here as `clap` [`Args`] groups to be
//! `#[command(flatten)]`-ed into subcommands: reader flags
//! (`--force-title`, `--general-tsv`, `--maxsplit`, plus the repeatable
//! `-O key=value` escape hatch) and writer flags (`--no-title`,
//! `--plain`). The column-selector rule also lives here: a selector that
//! parses as an integer is a 1-based column number, anything else is a
//! header label.

use clap::Args;

use crate::error::EtsvError;
use crate::field::InputField;
use crate::options::{ReaderOptions, WriterOptions};

/// Reader-side flags shared by ETSV commands.
#[derive(Args, Clone, Debug, Default)]
pub struct ReaderArgs {
    /// treat the first data line as the title even without a '#:' line
    #[arg(long)]
    pub force_title: bool,

    /// read plain TSV: no comment, metadata, or title handling
    #[arg(long)]
    pub general_tsv: bool,

    /// split each line at most this many times (negative for unlimited)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub maxsplit: Option<i64>,

    /// extra reader options as key=value (repeatable)
    #[arg(short = 'O', long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,
}

impl ReaderArgs {
    /// Assemble [`ReaderOptions`]: the typed flags first, then any `-O`
    /// pairs applied over them.
    pub fn to_options(&self) -> Result<ReaderOptions, EtsvError> {
        let mut options = ReaderOptions {
            force_title: self.force_title,
            extended_tsv: !self.general_tsv,
            ..Default::default()
        };
        if let Some(maxsplit) = self.maxsplit {
            options.maxsplit = maxsplit;
        }
        options.apply_pairs(&self.options)?;
        Ok(options)
    }
}

/// Writer-side flags shared by ETSV commands.
#[derive(Args, Clone, Debug, Default)]
pub struct WriterArgs {
    /// do not write a title line
    #[arg(long)]
    pub no_title: bool,

    /// write plain TSV: no metadata lines, bare title
    #[arg(long)]
    pub plain: bool,
}

impl WriterArgs {
    pub fn to_options(&self) -> WriterOptions {
        WriterOptions {
            print_title: !self.no_title,
            extended_tsv: !self.plain,
        }
    }
}

/// Build an [`InputField`] from a command-line column selector: an
/// integer is a 1-based column number, anything else is a header label.
/// The field name is the selector text itself.
pub fn parse_column_selector(selector: &str) -> InputField {
    match selector.parse::<usize>() {
        Ok(number) if number > 0 => InputField::indexed(selector, number - 1),
        _ => InputField::new(selector, selector),
    }
}
