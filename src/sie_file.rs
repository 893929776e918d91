use crate::entry::Entry;

/// A parsed SIE document: its top-level entries in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SieFile {
    entries: Vec<Entry>,
}

impl SieFile {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Top-level entries carrying `label`, compared case-insensitively.
    pub fn entries_with_label(&self, label: &str) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.has_label(label))
            .collect()
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}
