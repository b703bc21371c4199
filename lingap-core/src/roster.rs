//! In-memory roster of active patients: the list the admitting and billing
//! screens select from. Loaded wholesale, filtered locally.

use crate::patient::PatientSummary;

/// Holds the most recent summary collection. `replace` swaps the whole set;
/// there are no incremental updates.
#[derive(Debug, Default)]
pub struct PatientRoster {
    records: Vec<PatientSummary>,
}

impl PatientRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire collection with a freshly fetched one.
    pub fn replace(&mut self, records: Vec<PatientSummary>) {
        self.records = records;
    }

    pub fn records(&self) -> &[PatientSummary] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive substring match against name, room, physician, and id.
    /// Pure: the underlying collection is never touched, and an empty query
    /// returns the full set.
    pub fn filter(&self, query: &str) -> Vec<&PatientSummary> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.records.iter().collect();
        }

        self.records
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.room
                        .as_deref()
                        .is_some_and(|room| room.to_lowercase().contains(&needle))
                    || p.physician
                        .as_deref()
                        .is_some_and(|doc| doc.to_lowercase().contains(&needle))
                    || p.id.to_string().contains(&needle)
            })
            .collect()
    }
}
