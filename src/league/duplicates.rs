use std::collections::HashSet;

use crate::models::fixture::{DuplicateReport, Fixture, TeamPair};

/// Count candidates whose unordered pair already exists among persisted matches
pub fn detect_duplicates<I>(candidates: &[Fixture], existing: I) -> DuplicateReport
where
    I: IntoIterator<Item = TeamPair>,
{
    let existing: HashSet<TeamPair> = existing.into_iter().collect();

    let conflicting: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, fixture)| existing.contains(&fixture.pair()))
        .map(|(index, _)| index)
        .collect();

    DuplicateReport {
        existing: conflicting.len(),
        new: candidates.len() - conflicting.len(),
        total: candidates.len(),
        conflicting,
    }
}

/// Report used when the persisted matches could not be read
pub fn unverified_report(candidates: &[Fixture]) -> DuplicateReport {
    DuplicateReport {
        existing: 0,
        new: candidates.len(),
        total: candidates.len(),
        conflicting: Vec::new(),
    }
}
