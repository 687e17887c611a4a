//! Enable/disable delta between the currently enabled sites and the
//! operator's selection, and the phased application of that delta.

pub mod sequencer;

use std::collections::BTreeSet;

/// Names to enable and names to disable. The two lists never share a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationResult {
    pub to_enable: Vec<String>,
    pub to_disable: Vec<String>,
}

impl ReconciliationResult {
    pub fn is_empty(&self) -> bool {
        self.to_enable.is_empty() && self.to_disable.is_empty()
    }
}

/// Computes `desired \ current` and `current \ desired`.
///
/// Inputs are treated as sets: duplicates collapse and input order does not
/// change which names land in each list. Output keeps first-appearance order
/// so enumeration stays stable for the caller.
pub fn reconcile<S: AsRef<str>>(currently_enabled: &[S], desired_enabled: &[S]) -> ReconciliationResult {
    let current: BTreeSet<&str> = currently_enabled.iter().map(AsRef::as_ref).collect();
    let desired: BTreeSet<&str> = desired_enabled.iter().map(AsRef::as_ref).collect();

    ReconciliationResult {
        to_enable: difference_in_order(desired_enabled, &current),
        to_disable: difference_in_order(currently_enabled, &desired),
    }
}

fn difference_in_order<S: AsRef<str>>(names: &[S], exclude: &BTreeSet<&str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !exclude.contains(name) && seen.insert(*name))
        .map(str::to_string)
        .collect()
}
