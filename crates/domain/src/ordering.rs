//! Ordering — the by-name and by-energy device comparators.
//!
//! Both comparators tolerate absent operands: when either side is `None`
//! the result is `Equal` rather than an error. That permissive behavior is
//! part of the contract and is relied on by callers that compare optional
//! lookups without unwrapping them first.

use std::cmp::Ordering;

use crate::device::Device;

/// Compare two devices by energy consumption, ascending.
///
/// Uses the total order on `f64`; an absent operand compares `Equal`.
#[must_use]
pub fn by_energy(a: Option<&Device>, b: Option<&Device>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.energy_consumption.total_cmp(&b.energy_consumption),
        _ => Ordering::Equal,
    }
}

/// Compare two devices lexicographically by name, ascending.
///
/// An absent operand compares `Equal`.
#[must_use]
pub fn by_name(a: Option<&Device>, b: Option<&Device>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.name.cmp(&b.name),
        _ => Ordering::Equal,
    }
}
