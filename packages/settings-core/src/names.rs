//! Fuzzy name suggestions
//!
//! Error messages for unknown settings and invalid choices carry a
//! "Did you mean '...'?" hint. Candidates come from the registry itself or,
//! for choices drawn from game data, from external name tables supplied by
//! the caller. A missing table yields an empty suggestion.

use std::collections::HashMap;

/// Candidate must be within this share of edits (relative to the longer
/// string, in tenths) to be suggested at all.
const MAX_EDIT_TENTHS: usize = 6;

/// External name table kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    Item,
    Location,
    Entrance,
    HintSource,
}

impl NameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Location => "location",
            Self::Entrance => "entrance",
            Self::HintSource => "hint source",
        }
    }
}

/// Name tables owned by other subsystems (item list, location list, ...)
#[derive(Debug, Clone, Default)]
pub struct NameTables {
    tables: HashMap<NameKind, Vec<String>>,
}

impl NameTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) one table
    pub fn with_table<I, S>(mut self, kind: NameKind, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tables
            .insert(kind, names.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_items<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_table(NameKind::Item, names)
    }

    pub fn with_locations<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_table(NameKind::Location, names)
    }

    pub fn table(&self, kind: NameKind) -> Option<&[String]> {
        self.tables.get(&kind).map(|t| t.as_slice())
    }

    /// Suggestion against one table; empty when the table is unavailable
    pub fn suggest(&self, kind: NameKind, name: &str) -> String {
        match self.table(kind) {
            Some(table) => suggestion(name, table.iter().map(String::as_str)),
            None => String::new(),
        }
    }
}

/// "Did you mean 'x'?" for the closest candidate, or "" when nothing is close
pub fn suggestion<'a>(target: &str, candidates: impl IntoIterator<Item = &'a str>) -> String {
    match closest_match(target, candidates) {
        Some(found) => format!("Did you mean '{}'?", found),
        None => String::new(),
    }
}

/// Closest candidate by edit distance. Ties keep the earliest candidate.
pub fn closest_match<'a>(
    target: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let target_len = target.chars().count();

    let mut best: Option<(usize, &'a str)> = None;
    for candidate in candidates {
        let distance = levenshtein_distance(target, candidate);
        let longest = target_len.max(candidate.chars().count());
        if distance * 10 > longest * MAX_EDIT_TENTHS {
            continue;
        }
        match best {
            Some((best_distance, _)) if best_distance <= distance => {}
            _ => best = Some((distance, candidate)),
        }
    }

    best.map(|(_, candidate)| candidate)
}

/// Levenshtein distance over chars, two-row variant
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
