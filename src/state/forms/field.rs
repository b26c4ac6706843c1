//! Symptom entry value objects

use serde::{Deserialize, Serialize};

/// Lowest severity the severity input accepts
pub const MIN_SEVERITY: u8 = 1;
/// Highest severity the severity input accepts
pub const MAX_SEVERITY: u8 = 10;

/// Which half of a symptom entry is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    Symptom,
    Severity,
}

impl EntryField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Symptom => "Symptom",
            Self::Severity => "Severity (1-10)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Symptom => "Enter symptom",
            Self::Severity => "1-10",
        }
    }
}

/// One (symptom, severity) pair edited as a unit.
///
/// Severity stays a string so an empty field survives until submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub symptom: String,
    pub severity: String,
}

impl SymptomEntry {
    #[cfg(test)]
    pub fn new(symptom: impl Into<String>, severity: impl Into<String>) -> Self {
        Self {
            symptom: symptom.into(),
            severity: severity.into(),
        }
    }

    /// Get the value of one field
    pub fn get(&self, field: EntryField) -> &str {
        match field {
            EntryField::Symptom => &self.symptom,
            EntryField::Severity => &self.severity,
        }
    }

    pub(super) fn set(&mut self, field: EntryField, value: String) {
        match field {
            EntryField::Symptom => self.symptom = value,
            EntryField::Severity => self.severity = value,
        }
    }

    /// Whether this entry goes into a submission payload
    pub fn is_submittable(&self) -> bool {
        !self.symptom.trim().is_empty() && !self.severity.is_empty()
    }

    /// Parsed severity, if the text is an integer in range
    pub fn severity_value(&self) -> Option<u8> {
        self.severity
            .parse::<u8>()
            .ok()
            .filter(|v| (MIN_SEVERITY..=MAX_SEVERITY).contains(v))
    }
}

/// Symptom text may only hold ASCII letters and whitespace
pub fn is_valid_symptom(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || is_symptom_whitespace(c))
}

/// Whitespace as a browser regex `\s` matches it. Unlike
/// `char::is_whitespace`, this excludes NEL and includes the byte order mark.
fn is_symptom_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Severity input rule: empty, or an integer between 1 and 10.
///
/// Applied by the severity input while typing, not by the form controller.
pub fn accepts_severity_input(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(value.parse::<u8>(), Ok(v) if (MIN_SEVERITY..=MAX_SEVERITY).contains(&v))
}
