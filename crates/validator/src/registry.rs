//! Search and summary counts over a set of registration records.
//!
//! ```
//! use castra_validator::form::FormRecord;
//! use castra_validator::registry::{RegistryStats, SearchCriteria};
//!
//! let records = [
//!     FormRecord::new().with("animal", "Mel").with("especie", "CÃO").with("castra", "SIM"),
//!     FormRecord::new().with("animal", "Pipoca").with("especie", "GATO"),
//! ];
//!
//! let found = SearchCriteria::new().with("animal", "mel").filter(&records);
//! assert_eq!(found.len(), 1);
//!
//! let stats = RegistryStats::from_records(&records);
//! assert_eq!((stats.total, stats.dogs, stats.cats, stats.neutered), (2, 1, 1, 1));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::form::FormRecord;
use crate::validators::MICROCHIP_DIGITS;

// ============================================================================
// SEARCH
// ============================================================================

/// Per-field search terms, all of which must match.
///
/// A term matches when the record's value for that field is non-empty and
/// contains the term, ignoring case. Empty terms are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchCriteria {
    terms: BTreeMap<String, String>,
}

impl SearchCriteria {
    /// Criteria that match every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a term for `field`, replacing any previous one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, field: impl Into<String>, term: impl Into<String>) -> Self {
        self.terms.insert(field.into(), term.into().to_lowercase());
        self
    }

    /// True when no non-empty term is set.
    pub fn is_empty(&self) -> bool {
        self.terms.values().all(String::is_empty)
    }

    /// Whether `record` satisfies every term.
    pub fn matches(&self, record: &FormRecord) -> bool {
        self.terms
            .iter()
            .filter(|(_, term)| !term.is_empty())
            .all(|(field, term)| {
                record
                    .filled(field)
                    .is_some_and(|value| value.to_lowercase().contains(term.as_str()))
            })
    }

    /// Records satisfying every term, in input order.
    pub fn filter<'a>(&self, records: &'a [FormRecord]) -> Vec<&'a FormRecord> {
        let found: Vec<&FormRecord> = records.iter().filter(|r| self.matches(r)).collect();
        debug!(terms = self.terms.len(), records = records.len(), found = found.len(), "search finished");
        found
    }
}

impl<K, V> FromIterator<(K, V)> for SearchCriteria
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |criteria, (field, term)| criteria.with(field, term))
    }
}

// ============================================================================
// STATISTICS
// ============================================================================

/// `especie` value counted as a dog.
pub const SPECIES_DOG: &str = "CÃO";
/// `especie` value counted as a cat.
pub const SPECIES_CAT: &str = "GATO";
/// `castra` value counted as neutered.
pub const NEUTERED_YES: &str = "SIM";

/// Summary counts of a set of records.
///
/// Species and neutering are compared exactly against the form's option
/// values. A microchip counts when it is exactly 15 characters long.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    /// Number of records.
    pub total: usize,
    /// Records with `especie` = `CÃO`.
    pub dogs: usize,
    /// Records with `especie` = `GATO`.
    pub cats: usize,
    /// Records with `castra` = `SIM`.
    pub neutered: usize,
    /// Records with a 15-character microchip.
    pub microchipped: usize,
}

impl RegistryStats {
    /// Counts `records`.
    pub fn from_records(records: &[FormRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, record| {
            stats.add(record);
            stats
        })
    }

    /// Adds one record to the counts.
    pub fn add(&mut self, record: &FormRecord) {
        self.total += 1;
        match record.get("especie") {
            Some(SPECIES_DOG) => self.dogs += 1,
            Some(SPECIES_CAT) => self.cats += 1,
            _ => {}
        }
        if record.get("castra") == Some(NEUTERED_YES) {
            self.neutered += 1;
        }
        if record
            .filled("microchip")
            .is_some_and(|chip| chip.chars().count() == MICROCHIP_DIGITS)
        {
            self.microchipped += 1;
        }
    }
}
