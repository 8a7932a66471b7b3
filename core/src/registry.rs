//! Presentation Registry - the session's list of presentations
//!
//! Newest first, ordered by insertion only. Records come in through
//! [`PresentationRegistry::prepend`] and leave through
//! [`PresentationRegistry::remove`]; there is no update and no dedup.
//! Nothing is written anywhere, a reload starts over.

use serde::{Deserialize, Serialize};

use crate::models::{sample_presentations, PresentationRecord};

/// In-memory ordered registry of presentations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresentationRegistry {
    records: Vec<PresentationRecord>,
}

impl PresentationRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the dashboard samples.
    pub fn with_samples() -> Self {
        Self {
            records: sample_presentations(),
        }
    }

    /// Insert at the front.
    pub fn prepend(&mut self, record: PresentationRecord) {
        log::debug!("Registry: + {} ({})", record.name, record.id);
        self.records.insert(0, record);
    }

    /// Remove the first record with this id.
    ///
    /// Returns the removed record, or `None` when nothing matched.
    pub fn remove(&mut self, id: &str) -> Option<PresentationRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        let removed = self.records.remove(index);
        log::debug!("Registry: - {} ({})", removed.name, removed.id);
        Some(removed)
    }

    /// Get a record by id.
    pub fn get(&self, id: &str) -> Option<&PresentationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &PresentationRecord> {
        self.records.iter()
    }

    /// Records as a slice, newest first.
    pub fn as_slice(&self) -> &[PresentationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of static view counters (records without one count as zero).
    pub fn total_views(&self) -> u64 {
        self.records.iter().filter_map(|r| r.views).sum()
    }

    /// Sum of static download counters.
    pub fn total_downloads(&self) -> u64 {
        self.records.iter().filter_map(|r| r.downloads).sum()
    }
}

impl<'a> IntoIterator for &'a PresentationRegistry {
    type Item = &'a PresentationRecord;
    type IntoIter = std::slice::Iter<'a, PresentationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: &str, name: &str) -> PresentationRecord {
        PresentationRecord {
            id: id.to_string(),
            name: name.to_string(),
            size: 1,
            mime_type: "application/pdf".to_string(),
            share_link: format!("https://zipslides.com/share/{}", id),
            local_url: None,
            uploaded_at: Utc::now(),
            views: None,
            downloads: None,
        }
    }

    fn ids(registry: &PresentationRegistry) -> Vec<&str> {
        registry.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut registry = PresentationRegistry::new();
        registry.prepend(record("a", "first.pdf"));
        registry.prepend(record("b", "second.pdf"));
        registry.prepend(record("c", "third.pdf"));
        assert_eq!(ids(&registry), ["c", "b", "a"]);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut registry = PresentationRegistry::new();
        for id in ["a", "b", "c", "d"] {
            registry.prepend(record(id, "x.pdf"));
        }

        let removed = registry.remove("b").unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(ids(&registry), ["d", "c", "a"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut registry = PresentationRegistry::with_samples();
        assert!(registry.remove("nope").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_names_coexist() {
        let mut registry = PresentationRegistry::new();
        registry.prepend(record("a", "deck.pdf"));
        registry.prepend(record("b", "deck.pdf"));
        assert_eq!(registry.len(), 2);

        registry.remove("a");
        assert_eq!(ids(&registry), ["b"]);
    }

    #[test]
    fn test_totals() {
        let mut registry = PresentationRegistry::with_samples();
        assert_eq!(registry.total_views(), 68);
        assert_eq!(registry.total_downloads(), 20);

        // uploads have no counters and do not change the totals
        registry.prepend(record("new", "fresh.pdf"));
        assert_eq!(registry.total_views(), 68);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_get() {
        let registry = PresentationRegistry::with_samples();
        assert_eq!(registry.get("2").map(|r| r.name.as_str()), Some("Marketing Strategy.pdf"));
        assert!(registry.get("3").is_none());
    }
}
