/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Slater grouping of subshells
//!
//! Subshells are partitioned into the canonical groups
//! (1s)(2s,2p)(3s,3p)(3d)(4s,4p)(4d)(4f)(5s,5p)(5d)(5f)(6s,6p)(6d)(7s,7p).
//! Relative to a target subshell every other subshell is in the same group,
//! an inner group, or an outer group that does not shield at all.

use crate::atoms::{AngularMomentum, AtomError, ElectronConfiguration, Orbital, OrbitalLabel};
use serde::Serialize;

use crate::atoms::AngularMomentum::{D, F, P, S};

/// Canonical Slater groups, innermost first
const CANONICAL_GROUPS: [(u32, &[AngularMomentum]); 13] = [
    (1, &[S]),
    (2, &[S, P]),
    (3, &[S, P]),
    (3, &[D]),
    (4, &[S, P]),
    (4, &[D]),
    (4, &[F]),
    (5, &[S, P]),
    (5, &[D]),
    (5, &[F]),
    (6, &[S, P]),
    (6, &[D]),
    (7, &[S, P]),
];

/// Position of a subshell in the canonical grouping
pub fn group_index(label: OrbitalLabel) -> Option<usize> {
    CANONICAL_GROUPS
        .iter()
        .position(|(n, subshells)| *n == label.n && subshells.contains(&label.l))
}

/// Occupied subshells sharing one canonical group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlaterGroup {
    /// Index into the canonical grouping; 0 is the 1s group
    pub index: usize,
    pub orbitals: Vec<Orbital>,
}

impl SlaterGroup {
    /// Total electrons in the group
    pub fn electrons(&self) -> u32 {
        self.orbitals.iter().map(|o| o.occupancy()).sum()
    }

    pub fn is_innermost(&self) -> bool {
        self.index == 0
    }
}

/// Where another subshell sits relative to the target's group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GroupRelation {
    /// Same Slater group as the target
    SameGroup,
    /// Inner group whose principal quantum number is n or n - 1
    NextShell,
    /// Inner group at n - 2 or below
    DeepShell,
    /// Later group; never shields the target
    Outer,
}

impl GroupRelation {
    pub const ALL: [GroupRelation; 4] = [
        GroupRelation::SameGroup,
        GroupRelation::NextShell,
        GroupRelation::DeepShell,
        GroupRelation::Outer,
    ];
}

fn require_index(label: OrbitalLabel) -> Result<usize, AtomError> {
    group_index(label).ok_or_else(|| {
        AtomError::InvalidConfiguration(format!("{} has no Slater group", label))
    })
}

/// Classify `other` relative to the group of `target`
pub fn classify(target: OrbitalLabel, other: OrbitalLabel) -> Result<GroupRelation, AtomError> {
    let target_index = require_index(target)?;
    let other_index = require_index(other)?;

    let relation = if other_index == target_index {
        GroupRelation::SameGroup
    } else if other_index > target_index {
        GroupRelation::Outer
    } else if other.n + 1 >= target.n {
        GroupRelation::NextShell
    } else {
        GroupRelation::DeepShell
    };
    Ok(relation)
}

/// Partition a configuration into its occupied Slater groups, innermost first
pub fn groups_for(config: &ElectronConfiguration) -> Result<Vec<SlaterGroup>, AtomError> {
    let mut groups: Vec<SlaterGroup> = Vec::new();
    let mut indexed = config
        .orbitals()
        .iter()
        .map(|o| require_index(o.label()).map(|index| (index, *o)))
        .collect::<Result<Vec<_>, _>>()?;
    indexed.sort_by_key(|(index, o)| (*index, o.l()));

    for (index, orbital) in indexed {
        match groups.last_mut() {
            Some(group) if group.index == index => group.orbitals.push(orbital),
            _ => groups.push(SlaterGroup {
                index,
                orbitals: vec![orbital],
            }),
        }
    }
    Ok(groups)
}
