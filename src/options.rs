//! Reader and writer configuration.
//!
//! Both option types are plain structs with [`Default`] values for typed
//! use, plus a stringly `key=value` interface ([`ReaderOptions::from_pairs`]
//! and friends) for runtime-assembled configuration such as the CLI's
//! repeatable `-O` argument. The pair interface is the only place an
//! unsupported option can be expressed, and it fails fast there.

use crate::error::EtsvError;

/// Configuration for [`EtsvReader`](crate::reader::EtsvReader).
#[derive(Clone, Debug)]
pub struct ReaderOptions {
    /// Treat the first line after the preamble as the title even when no
    /// `#:` line was found. Implied whenever a supplied field still needs
    /// header resolution.
    pub force_title: bool,
    /// Handle `#`-prefixed lines: preamble scanning and interleaved
    /// comment skipping. When off, every line is data.
    pub extended_tsv: bool,
    /// Cap on tab splits per line; negative means unlimited.
    pub maxsplit: i64,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            force_title: false,
            extended_tsv: true,
            maxsplit: -1,
        }
    }
}

impl ReaderOptions {
    /// Build options from `key=value` pairs; see [`ReaderOptions::apply_pairs`].
    pub fn from_pairs<S: AsRef<str>>(
        pairs: impl IntoIterator<Item = S>,
    ) -> Result<Self, EtsvError> {
        let mut options = Self::default();
        options.apply_pairs(pairs)?;
        Ok(options)
    }

    /// Apply `key=value` pairs over the current settings. Recognized keys
    /// are `force_title`, `extended_tsv` (both `true`/`false`, or bare for
    /// `true`), and `maxsplit` (integer). Unknown keys are collected and
    /// reported together.
    pub fn apply_pairs<S: AsRef<str>>(
        &mut self,
        pairs: impl IntoIterator<Item = S>,
    ) -> Result<(), EtsvError> {
        let mut unknown = Vec::new();
        for pair in pairs {
            let (key, value) = split_pair(pair.as_ref());
            match key {
                "force_title" => self.force_title = parse_bool(key, value)?,
                "extended_tsv" => self.extended_tsv = parse_bool(key, value)?,
                "maxsplit" => self.maxsplit = parse_int(key, value)?,
                _ => unknown.push(key.to_string()),
            }
        }
        check_unknown(unknown)
    }
}

/// Configuration for [`EtsvWriter`](crate::writer::EtsvWriter).
#[derive(Clone, Debug)]
pub struct WriterOptions {
    /// Write the title line.
    pub print_title: bool,
    /// Write the preamble prefixes (`##` metadata, `#:` title). When off,
    /// metadata is suppressed and the title is written bare.
    pub extended_tsv: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            print_title: true,
            extended_tsv: true,
        }
    }
}

impl WriterOptions {
    /// Build options from `key=value` pairs; see [`WriterOptions::apply_pairs`].
    pub fn from_pairs<S: AsRef<str>>(
        pairs: impl IntoIterator<Item = S>,
    ) -> Result<Self, EtsvError> {
        let mut options = Self::default();
        options.apply_pairs(pairs)?;
        Ok(options)
    }

    /// Apply `key=value` pairs over the current settings. Recognized keys
    /// are `print_title` and `extended_tsv`.
    pub fn apply_pairs<S: AsRef<str>>(
        &mut self,
        pairs: impl IntoIterator<Item = S>,
    ) -> Result<(), EtsvError> {
        let mut unknown = Vec::new();
        for pair in pairs {
            let (key, value) = split_pair(pair.as_ref());
            match key {
                "print_title" => self.print_title = parse_bool(key, value)?,
                "extended_tsv" => self.extended_tsv = parse_bool(key, value)?,
                _ => unknown.push(key.to_string()),
            }
        }
        check_unknown(unknown)
    }
}

// A bare key is shorthand for `key=true`.
fn split_pair(pair: &str) -> (&str, &str) {
    match pair.split_once('=') {
        Some((key, value)) => (key, value),
        None => (pair, "true"),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, EtsvError> {
    value
        .parse::<bool>()
        .map_err(|_| EtsvError::InvalidOptionValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn parse_int(key: &str, value: &str) -> Result<i64, EtsvError> {
    value
        .parse::<i64>()
        .map_err(|_| EtsvError::InvalidOptionValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

fn check_unknown(unknown: Vec<String>) -> Result<(), EtsvError> {
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(EtsvError::UnsupportedOption(unknown.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::{ReaderOptions, WriterOptions};
    use crate::error::EtsvError;

    #[test]
    fn test_defaults() {
        let reader = ReaderOptions::default();
        assert!(!reader.force_title);
        assert!(reader.extended_tsv);
        assert_eq!(reader.maxsplit, -1);

        let writer = WriterOptions::default();
        assert!(writer.print_title);
        assert!(writer.extended_tsv);
    }

    #[test]
    fn test_from_pairs() {
        let options =
            ReaderOptions::from_pairs(["force_title=true", "maxsplit=1", "extended_tsv=false"])
                .unwrap();
        assert!(options.force_title);
        assert!(!options.extended_tsv);
        assert_eq!(options.maxsplit, 1);
    }

    #[test]
    fn test_bare_key_is_true() {
        let options = ReaderOptions::from_pairs(["force_title"]).unwrap();
        assert!(options.force_title);
    }

    #[test]
    fn test_unknown_keys_collected() {
        let result = ReaderOptions::from_pairs(["sep=,", "force_title=true", "mode=fast"]);
        assert!(
            matches!(result, Err(EtsvError::UnsupportedOption(keys)) if keys == "sep, mode")
        );
    }

    #[test]
    fn test_invalid_value() {
        let result = ReaderOptions::from_pairs(["maxsplit=many"]);
        assert!(matches!(
            result,
            Err(EtsvError::InvalidOptionValue { key, value }) if key == "maxsplit" && value == "many"
        ));
    }

    #[test]
    fn test_writer_pairs() {
        let options = WriterOptions::from_pairs(["print_title=false"]).unwrap();
        assert!(!options.print_title);
        assert!(WriterOptions::from_pairs(["maxsplit=1"]).is_err());
    }

    #[test]
    fn test_apply_pairs_layering() {
        let mut options = ReaderOptions {
            maxsplit: 3,
            ..Default::default()
        };
        options.apply_pairs(["force_title=true"]).unwrap();
        assert!(options.force_title);
        assert_eq!(options.maxsplit, 3);
    }
}
