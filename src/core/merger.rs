//! Merging of candidate windows into disjoint zones.

use itertools::Itertools;

use crate::{
    core::window::{Window, Zone},
    prelude::*,
};

/// Merge overlapping or adjacent candidates into disjoint zones ordered by start.
///
/// Each merge spreads the combined price mass over the union interval,
/// so the total `price × duration` of the candidates is preserved.
#[must_use]
pub fn merge_zones(candidates: &[Window]) -> Vec<Zone> {
    if candidates.len() <= 1 {
        return candidates.iter().copied().map(Zone::from).collect();
    }
    let mut zones = fold(candidates);
    reconcile(&mut zones);
    zones.sort_by_key(|zone| zone.interval.start);
    debug!(n_candidates = candidates.len(), n_zones = zones.len(), "merged");
    zones
}

/// Single pass: absorb each candidate into the first zone it touches, or start a new zone.
fn fold(candidates: &[Window]) -> Vec<Zone> {
    let mut zones: Vec<Zone> = Vec::with_capacity(candidates.len());
    for candidate in
        candidates.iter().copied().map(Zone::from).sorted_by_key(|zone| zone.interval.start)
    {
        if let Some(zone) = zones.iter_mut().find(|zone| zone.interval.touches(candidate.interval))
        {
            *zone = zone.merge(candidate);
        } else {
            zones.push(candidate);
        }
    }
    zones
}

/// Merge pairwise until no two zones touch.
///
/// A zone grown by a merge may start touching one that was already compared,
/// hence the inner scan restarts and the sweep repeats.
fn reconcile(zones: &mut Vec<Zone>) {
    loop {
        let mut has_merged = false;
        let mut i = 0;
        while i < zones.len() {
            let mut j = i + 1;
            while j < zones.len() {
                if zones[i].interval.touches(zones[j].interval) {
                    let other = zones.remove(j);
                    zones[i] = zones[i].merge(other);
                    has_merged = true;
                    j = i + 1;
                } else {
                    j += 1;
                }
            }
            i += 1;
        }
        if !has_merged {
            break;
        }
    }
}
