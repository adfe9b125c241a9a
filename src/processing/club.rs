use ahash::RandomState;
use std::collections::HashMap;

/// Exact-match lookup from observed club spellings onto canonical club names.
/// The table is configuration, not logic: a new spelling variant is a table
/// edit. Matching is case- and accent-sensitive on purpose; every observed
/// variant gets its own row.
pub struct ClubNormalizer {
    table: HashMap<String, String, RandomState>,
}

impl ClubNormalizer {
    #[must_use]
    pub fn new(table: HashMap<String, String, RandomState>) -> Self {
        Self { table }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let table: HashMap<String, String, RandomState> = serde_json::from_str(json)?;
        Ok(Self { table })
    }

    /// `Some` only for spellings the table knows. Lets the pipeline count
    /// misses for the unmapped-club diagnostic.
    #[must_use]
    pub fn lookup(&self, raw: &str) -> Option<&str> {
        self.table.get(raw).map(String::as_str)
    }

    /// Best-effort canonical name: the mapped value when the table knows the
    /// spelling, otherwise the input unchanged.
    #[must_use]
    pub fn normalize<'a>(&'a self, raw: &'a str) -> &'a str {
        self.lookup(raw).unwrap_or(raw)
    }
}

impl Default for ClubNormalizer {
    fn default() -> Self {
        Self::from_json(include_str!("club_table.json"))
            .expect("embedded club table should be valid JSON")
    }
}
