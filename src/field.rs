//! Named fields binding row values to file columns.
//!
//! [`InputField`] takes a column out of a split line and converts its text
//! into a [`Value`]; [`OutputField`] renders a named value back into the
//! text of one column. The two sides share nothing but the name-based
//! identity: names are plain strings used directly as row keys, and are
//! compared explicitly where it matters.

use crate::error::EtsvError;
use crate::row::{Row, Value};

/// How an [`InputField`] locates its column.
#[derive(Clone, Debug)]
pub enum ColumnBinding {
    /// Waiting on a title row; holds the header label to look for.
    Unresolved(String),
    /// Bound to a zero-based column position.
    Resolved(usize),
}

/// Converts the raw text of one column into a [`Value`].
///
/// [`Converter::Integer`] and [`Converter::Float`] trim surrounding
/// whitespace before parsing. A [`Converter::Function`] returns `None`
/// to reject a value.
#[derive(Clone, Copy, Debug, Default)]
pub enum Converter {
    /// Keep the text verbatim (the default).
    #[default]
    Text,
    /// Parse a base-10 integer.
    Integer,
    /// Parse a float.
    Float,
    /// An arbitrary caller-supplied conversion.
    Function(fn(&str) -> Option<Value>),
}

impl Converter {
    pub fn convert(&self, raw: &str) -> Option<Value> {
        match self {
            Converter::Text => Some(Value::String(raw.to_string())),
            Converter::Integer => raw.trim().parse::<i64>().ok().map(Value::Integer),
            Converter::Float => raw.trim().parse::<f64>().ok().map(Value::Float),
            Converter::Function(func) => func(raw),
        }
    }
}

/// A named input column: where to find it and how to convert its text.
#[derive(Clone, Debug)]
pub struct InputField {
    name: String,
    binding: ColumnBinding,
    converter: Converter,
}

impl InputField {
    /// Create a field that resolves its column by header label once a
    /// title row is known.
    pub fn new(name: impl Into<String>, header: impl Into<String>) -> Self {
        InputField {
            name: name.into(),
            binding: ColumnBinding::Unresolved(header.into()),
            converter: Converter::Text,
        }
    }

    /// Create a field already bound to a zero-based column position.
    pub fn indexed(name: impl Into<String>, index: usize) -> Self {
        InputField {
            name: name.into(),
            binding: ColumnBinding::Resolved(index),
            converter: Converter::Text,
        }
    }

    /// Set the value converter.
    pub fn with_converter(mut self, converter: Converter) -> Self {
        self.converter = converter;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The header label, while the column is still unresolved.
    pub fn header(&self) -> Option<&str> {
        match &self.binding {
            ColumnBinding::Unresolved(header) => Some(header),
            ColumnBinding::Resolved(_) => None,
        }
    }

    /// The zero-based column position, once resolved.
    pub fn index(&self) -> Option<usize> {
        match &self.binding {
            ColumnBinding::Unresolved(_) => None,
            ColumnBinding::Resolved(index) => Some(*index),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.binding, ColumnBinding::Resolved(_))
    }

    /// Bind this field to the first title column matching its header.
    /// Resolving an already-bound field is a no-op.
    pub fn resolve(&mut self, title: &[String]) -> Result<(), EtsvError> {
        if let ColumnBinding::Unresolved(header) = &self.binding {
            let index = title
                .iter()
                .position(|column| column == header)
                .ok_or_else(|| EtsvError::HeaderNotFound(header.clone()))?;
            self.binding = ColumnBinding::Resolved(index);
        }
        Ok(())
    }

    /// Convert this field's column out of a split line, returning the
    /// `(name, value)` pair for the row map.
    pub fn parse(&self, values: &[String]) -> Result<(String, Value), EtsvError> {
        let index = match &self.binding {
            ColumnBinding::Resolved(index) => *index,
            ColumnBinding::Unresolved(header) => {
                return Err(EtsvError::HeaderNotFound(header.clone()))
            }
        };
        let raw = values.get(index).ok_or_else(|| EtsvError::TooFewColumns {
            field: self.name.clone(),
            index,
            columns: values.len(),
        })?;
        let value = self
            .converter
            .convert(raw)
            .ok_or_else(|| EtsvError::ValueConversion {
                field: self.name.clone(),
                value: raw.clone(),
            })?;
        Ok((self.name.clone(), value))
    }
}

/// Renders a [`Value`] into the text of one output column.
///
/// Dispatch is an explicit `match`: a template is substituted, a function
/// is called, and the default falls back to the value's display form.
#[derive(Clone, Debug, Default)]
pub enum Formatter {
    /// The value's natural display form (the default).
    #[default]
    Display,
    /// Literal text with a single `{}` or `{:.N}` placeholder.
    Template(String),
    /// An arbitrary caller-supplied rendering.
    Function(fn(&Value) -> String),
}

impl Formatter {
    pub fn render(&self, value: &Value) -> String {
        match self {
            Formatter::Display => value.to_string(),
            Formatter::Template(template) => render_template(template, value),
            Formatter::Function(func) => func(value),
        }
    }
}

/// Substitute `value` into `template`. `{}` takes the display form;
/// `{:.N}` renders floats (and integers, widened) with `N` decimal places
/// and truncates strings to `N` characters. A template without a
/// placeholder, or with anything else between the braces, degrades to
/// the display form.
fn render_template(template: &str, value: &Value) -> String {
    let bounds = template
        .find('{')
        .and_then(|start| template[start..].find('}').map(|offset| (start, start + offset)));
    let (start, end) = match bounds {
        Some(bounds) => bounds,
        None => return template.to_string(),
    };
    let precision = template[start + 1..end]
        .strip_prefix(":.")
        .and_then(|digits| digits.parse::<usize>().ok());
    let rendered = match (precision, value) {
        (Some(precision), Value::Float(val)) => format!("{:.*}", precision, val),
        (Some(precision), Value::Integer(val)) => format!("{:.*}", precision, *val as f64),
        (Some(precision), Value::String(val)) => format!("{:.*}", precision, val),
        (None, _) => value.to_string(),
    };
    format!("{}{}{}", &template[..start], rendered, &template[end + 1..])
}

/// A named output column: its title label and how to render its value.
#[derive(Clone, Debug)]
pub struct OutputField {
    name: String,
    header: Option<String>,
    formatter: Formatter,
}

impl OutputField {
    /// Create a field with an explicit title label.
    pub fn new(name: impl Into<String>, header: impl Into<String>) -> Self {
        OutputField {
            name: name.into(),
            header: Some(header.into()),
            formatter: Formatter::Display,
        }
    }

    /// Create a field whose title label is just its name.
    pub fn from_name(name: impl Into<String>) -> Self {
        OutputField {
            name: name.into(),
            header: None,
            formatter: Formatter::Display,
        }
    }

    /// Set the formatter.
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// The label written on the title line: the header, or the name when
    /// no header was given.
    pub fn title_label(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.name)
    }

    /// Render this field's value out of `row`.
    pub fn format(&self, row: &Row) -> Result<String, EtsvError> {
        let value = row
            .get(self.name.as_str())
            .ok_or_else(|| EtsvError::MissingField(self.name.clone()))?;
        Ok(self.formatter.render(value))
    }
}
