//! Fixed prior tables for severity and hazard type
//!
//! Lookups are closed-world with a documented default: a label that is not
//! in the table never fails, it resolves to the table's default weight.
//! Matching is exact and case-sensitive.

/// A label → weight table with a default for unknown labels
#[derive(Debug, Clone, Copy)]
pub struct PriorTable {
    entries: &'static [(&'static str, f64)],
    default: f64,
}

/// Severity label weights, default 0.3
pub const SEVERITY_WEIGHTS: PriorTable = PriorTable {
    entries: &[
        ("low", 0.1),
        ("medium", 0.3),
        ("high", 0.6),
        ("critical", 0.8),
    ],
    default: 0.3,
};

/// Hazard type credibility, default 0.6
pub const HAZARD_CREDIBILITY: PriorTable = PriorTable {
    entries: &[
        ("flood", 0.9),
        ("cyclone", 0.8),
        ("tsunami", 0.7),
        ("storm_surge", 0.8),
        ("other", 0.6),
    ],
    default: 0.6,
};

impl PriorTable {
    /// Weight for a known label, `None` otherwise
    pub fn lookup(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| *key == label)
            .map(|(_, weight)| *weight)
    }

    /// Weight for `label`, falling back to the table default
    pub fn weight(&self, label: &str) -> f64 {
        self.lookup(label).unwrap_or(self.default)
    }

    pub fn is_known(&self, label: &str) -> bool {
        self.lookup(label).is_some()
    }
}
