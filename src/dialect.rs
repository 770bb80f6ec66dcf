//! The ETSV dialect: line prefix handling and tab splitting.

use lazy_static::lazy_static;

lazy_static! {
    /// The standard ETSV dialect: `#` comments, `##` metadata, `#:` title.
    pub static ref ETSV: Dialect = Dialect {
        comment: "#".to_string(),
        metadata: "##".to_string(),
        title: "#:".to_string(),
    };
}

/// The line prefixes that give an extended TSV file its structure.
/// Anything without the comment prefix is data.
pub struct Dialect {
    pub comment: String,
    pub metadata: String,
    pub title: String,
}

/// The role of a single line within the preamble.
#[derive(Clone, Debug, PartialEq)]
pub enum LineKind<'a> {
    /// The title line; the payload is the unsplit header text.
    Title(&'a str),
    /// A metadata line; the payload keeps any leading whitespace.
    Metadata(&'a str),
    /// A plain comment, to be discarded.
    Comment,
    /// An unprefixed data line.
    Data,
}

impl Dialect {
    /// Classify one preamble line. The title and metadata prefixes are
    /// checked before the general comment prefix, since they share the
    /// leading `#`.
    pub fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if let Some(rest) = line.strip_prefix(self.title.as_str()) {
            LineKind::Title(rest)
        } else if let Some(rest) = line.strip_prefix(self.metadata.as_str()) {
            LineKind::Metadata(rest)
        } else if line.starts_with(self.comment.as_str()) {
            LineKind::Comment
        } else {
            LineKind::Data
        }
    }

    /// Whether this line carries the comment prefix. Past the preamble
    /// this is the only distinction that matters: metadata and title
    /// prefixes appearing after data has started are plain comments.
    pub fn is_comment(&self, line: &str) -> bool {
        line.starts_with(self.comment.as_str())
    }
}

/// Split a title or data line on tabs, after stripping a trailing newline.
///
/// A negative `maxsplit` leaves the number of splits unbounded; otherwise
/// the line is split at most `maxsplit` times, so the final piece keeps
/// any remaining tabs.
pub fn split_line(line: &str, maxsplit: i64) -> Vec<String> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    if maxsplit < 0 {
        line.split('\t').map(String::from).collect()
    } else {
        let pieces = (maxsplit as usize).saturating_add(1);
        line.splitn(pieces, '\t').map(String::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{split_line, LineKind, ETSV};

    #[test]
    fn test_classify() {
        assert_eq!(ETSV.classify("#:ID\tLength"), LineKind::Title("ID\tLength"));
        assert_eq!(ETSV.classify("## run=demo"), LineKind::Metadata(" run=demo"));
        assert_eq!(ETSV.classify("# a remark"), LineKind::Comment);
        assert_eq!(ETSV.classify("#"), LineKind::Comment);
        assert_eq!(ETSV.classify("x1\t10"), LineKind::Data);
        assert_eq!(ETSV.classify(""), LineKind::Data);
    }

    #[test]
    fn test_metadata_keeps_leading_whitespace() {
        match ETSV.classify("##   padded") {
            LineKind::Metadata(rest) => assert_eq!(rest, "   padded"),
            other => panic!("classified as {:?}", other),
        }
    }

    #[test]
    fn test_split_line_unlimited() {
        assert_eq!(split_line("a\tb\tc\n", -1), vec!["a", "b", "c"]);
        assert_eq!(split_line("", -1), vec![""]);
    }

    #[test]
    fn test_split_line_maxsplit() {
        assert_eq!(split_line("a\tb\tc", 1), vec!["a", "b\tc"]);
        assert_eq!(split_line("a\tb\tc", 0), vec!["a\tb\tc"]);
        assert_eq!(split_line("first\tsecond\t", 1), vec!["first", "second\t"]);
    }
}
