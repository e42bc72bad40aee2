//! Attack resolution and sink detection.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{AttackResult, GameError};
use crate::config::NUM_SHIPS;
use crate::ship::ShipId;

/// Every successful hit scored by one attacker, in order. A ship appears
/// once per segment struck.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HitLog(Vec<ShipId>);

impl HitLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, ship: ShipId) {
        self.0.push(ship);
    }

    /// Number of hits recorded against `ship`.
    pub fn count(&self, ship: ShipId) -> usize {
        self.0.iter().filter(|&&s| s == ship).count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[ShipId] {
        &self.0
    }
}

/// Ships of one fleet that have gone down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SunkSet([bool; NUM_SHIPS]);

impl SunkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `ship` sunk. Returns `false` if it already was.
    pub fn insert(&mut self, ship: ShipId) -> bool {
        let slot = &mut self.0[ship.index()];
        let fresh = !*slot;
        *slot = true;
        fresh
    }

    pub fn contains(&self, ship: ShipId) -> bool {
        self.0[ship.index()]
    }

    pub fn len(&self) -> usize {
        self.0.iter().filter(|&&s| s).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when the whole fleet is sunk.
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|&s| s)
    }

    pub fn iter(&self) -> impl Iterator<Item = ShipId> + '_ {
        ShipId::all().filter(move |ship| self.contains(*ship))
    }
}

/// Everything one side owns: its board, the hits it has scored on the
/// opponent and which of its own ships are sunk.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Combatant {
    pub board: Board,
    pub hits: HitLog,
    pub sunk: SunkSet,
}

impl Combatant {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ships still afloat, in placement order.
    pub fn remaining(&self) -> impl Iterator<Item = ShipId> + '_ {
        ShipId::all().filter(move |ship| !self.sunk.contains(*ship))
    }
}

/// Attack `index` on `target`, logging a hit in `hits`. A repeat attack is
/// reported as [`AttackResult::AlreadyAttacked`] and changes nothing.
pub fn resolve_attack(
    hits: &mut HitLog,
    target: &mut Board,
    index: usize,
) -> Result<AttackResult, GameError> {
    if target.cell(index)?.is_attacked() {
        return Ok(AttackResult::AlreadyAttacked);
    }
    let before = target.strike(index)?;
    match before.occupant() {
        Some(ship) => {
            hits.record(ship);
            Ok(AttackResult::Hit(ship))
        }
        None => Ok(AttackResult::Miss),
    }
}

/// Recount the attacker's hit log against every ship in the fleet and mark
/// newly sunk ships in the defender's set. Returns only ships that went down
/// on this call, so repeating it is a no-op.
pub fn check_score(hits: &HitLog, defender_sunk: &mut SunkSet) -> Vec<ShipId> {
    ShipId::all()
        .filter(|&ship| hits.count(ship) == ship.length())
        .filter(|&ship| defender_sunk.insert(ship))
        .collect()
}
