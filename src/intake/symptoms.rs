//! Symptom narrative collection

use serde::{Deserialize, Serialize};

/// Ordered list of free-text symptom entries
///
/// At least one entry is required before a submission can be made; blank
/// entries are rejected at the point of entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomList {
    entries: Vec<String>,
}

impl SymptomList {
    pub fn new() -> Self {
        SymptomList::default()
    }

    /// Add a symptom entry, rejecting blank input
    pub fn add(&mut self, symptom: &str) -> Result<(), String> {
        let trimmed = symptom.trim();
        if trimmed.is_empty() {
            return Err("symptom description cannot be empty".to_string());
        }
        self.entries.push(trimmed.to_string());
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Comma-joined form used in the prompt sentence
    pub fn joined(&self) -> String {
        self.entries.join(", ")
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl FromIterator<String> for SymptomList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = SymptomList::new();
        for symptom in iter {
            // Blank entries from flag input are silently dropped.
            let _ = list.add(&symptom);
        }
        list
    }
}
