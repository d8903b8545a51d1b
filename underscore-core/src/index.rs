use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// A planned move of one file to its underscore-case name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenamePlan {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// The new base name contains only allowed characters
    pub is_valid_name: bool,
    /// The destination is an existing file that is not the source
    pub has_conflict: bool,
}

/// Several sources that would all be moved to the same destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationConflict {
    pub destination: PathBuf,
    pub sources: Vec<PathBuf>,
}

/// Accumulates rename plans for a batch and tracks what blocks it.
///
/// Plans are kept in insertion order. Inserting a plan for a source that is
/// already present replaces the earlier plan everywhere.
#[derive(Debug, Default)]
pub struct ConflictIndex {
    plans: Vec<RenamePlan>,
    by_source: HashMap<PathBuf, usize>,
    by_destination: HashMap<PathBuf, Vec<usize>>,
    destination_order: Vec<PathBuf>,
    conflicted_sources: HashSet<PathBuf>,
    invalid_sources: HashSet<PathBuf>,
    collided_destinations: HashSet<PathBuf>,
}

impl ConflictIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, plan: RenamePlan) {
        let slot = if let Some(&slot) = self.by_source.get(&plan.source) {
            self.withdraw(slot);
            self.plans[slot] = plan.clone();
            slot
        } else {
            self.plans.push(plan.clone());
            let slot = self.plans.len() - 1;
            self.by_source.insert(plan.source.clone(), slot);
            slot
        };

        if plan.has_conflict {
            self.conflicted_sources.insert(plan.source.clone());
        }
        if !plan.is_valid_name {
            self.invalid_sources.insert(plan.source.clone());
        }

        if !self.by_destination.contains_key(&plan.destination) {
            self.destination_order.push(plan.destination.clone());
        }
        let contributors = self
            .by_destination
            .entry(plan.destination.clone())
            .or_default();
        contributors.push(slot);
        if contributors.len() > 1 {
            self.collided_destinations.insert(plan.destination);
        }
    }

    /// Remove the plan in `slot` from every derived set
    fn withdraw(&mut self, slot: usize) {
        let previous = &self.plans[slot];
        self.conflicted_sources.remove(&previous.source);
        self.invalid_sources.remove(&previous.source);

        if let Some(list) = self.by_destination.get_mut(&previous.destination) {
            list.retain(|&s| s != slot);
            if list.len() < 2 {
                self.collided_destinations.remove(&previous.destination);
            }
        }
    }

    pub fn has_problems(&self) -> bool {
        !self.conflicted_sources.is_empty()
            || !self.collided_destinations.is_empty()
            || !self.invalid_sources.is_empty()
    }

    /// Number of entries across the three problem sets
    pub fn problem_count(&self) -> usize {
        self.conflicted_sources.len() + self.collided_destinations.len() + self.invalid_sources.len()
    }

    /// Plans whose destination already exists as an unrelated file
    pub fn conflicts(&self) -> Vec<&RenamePlan> {
        self.plans
            .iter()
            .filter(|p| self.conflicted_sources.contains(&p.source))
            .collect()
    }

    /// Destinations shared by two or more sources, sources in insertion order
    pub fn destination_conflicts(&self) -> Vec<DestinationConflict> {
        self.destination_order
            .iter()
            .filter(|d| self.collided_destinations.contains(*d))
            .map(|destination| {
                let mut slots = self.by_destination[destination].clone();
                slots.sort_unstable();
                DestinationConflict {
                    destination: destination.clone(),
                    sources: slots
                        .into_iter()
                        .map(|s| self.plans[s].source.clone())
                        .collect(),
                }
            })
            .collect()
    }

    /// Plans whose new name still contains unsupported characters
    pub fn invalid_names(&self) -> Vec<&RenamePlan> {
        self.plans
            .iter()
            .filter(|p| self.invalid_sources.contains(&p.source))
            .collect()
    }

    pub fn plans(&self) -> &[RenamePlan] {
        &self.plans
    }

    pub fn get(&self, source: &Path) -> Option<&RenamePlan> {
        self.by_source.get(source).map(|&slot| &self.plans[slot])
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
