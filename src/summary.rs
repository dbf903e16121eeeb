//! Human-readable summaries of a selection path.
//!
//! The default policy joins resolved option labels (`"Zhejiang / Hangzhou"`),
//! falling back to joining raw keys (`"zj/hz"`) when no resolved options are
//! available.

use crate::models::CascadeOption;

/// Formats a committed value and its resolved options into a label
pub trait SummaryFormatter {
    fn format(&self, value: &[String], options: &[CascadeOption]) -> String;
}

impl<F> SummaryFormatter for F
where
    F: Fn(&[String], &[CascadeOption]) -> String,
{
    fn format(&self, value: &[String], options: &[CascadeOption]) -> String {
        self(value, options)
    }
}

/// Label breadcrumb with key fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultFormatter {
    /// Placed between labels
    pub label_separator: String,
    /// Placed between keys when nothing is resolved
    pub key_separator: String,
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        Self {
            label_separator: " / ".to_string(),
            key_separator: "/".to_string(),
        }
    }
}

impl DefaultFormatter {
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            label_separator: separator.into(),
            ..Self::default()
        }
    }
}

impl SummaryFormatter for DefaultFormatter {
    fn format(&self, value: &[String], options: &[CascadeOption]) -> String {
        if options.is_empty() {
            return value.join(&self.key_separator);
        }
        options
            .iter()
            .map(CascadeOption::display_label)
            .collect::<Vec<_>>()
            .join(&self.label_separator)
    }
}
