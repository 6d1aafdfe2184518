//! Typed access to ledger state.
//!
//! ## Storage Layout
//!
//! | Key                            | Tier           | Lifecycle        |
//! |--------------------------------|----------------|------------------|
//! | `DataKey::Owner`               | `instance()`   | Entire contract  |
//! | `DataKey::Token`               | `instance()`   | Entire contract  |
//! | `DataKey::StrictSupply`        | `instance()`   | Entire contract  |
//! | `DataKey::BondCounter`         | `instance()`   | Entire contract  |
//! | `DataKey::Bond(id)`            | `persistent()` | Per bond         |
//! | `DataKey::Holding(id, addr)`   | `persistent()` | Per holder       |
//! | `DataKey::Roster(id)`          | `persistent()` | Per bond         |
//! | `DataKey::RosterMember(id, a)` | `persistent()` | Per holder       |
//! | `DataKey::UnitsSold(id)`       | `persistent()` | Per bond         |
//!
//! Persistent entries have their TTL extended whenever they are read or
//! written so that active bonds never expire out from under their holders.

use soroban_sdk::{Address, Env};

use crate::errors::LedgerError;
use crate::types::{BondInfo, DataKey};

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

pub(crate) fn bump(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}

// ─── Configuration ─────────────────────────────────────────────────────────

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(e: &Env) -> Result<Address, LedgerError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(LedgerError::NotInitialized)
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_token(e: &Env) -> Result<Address, LedgerError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(LedgerError::NotInitialized)
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
}

pub fn is_strict_supply(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::StrictSupply)
        .unwrap_or(false)
}

pub fn set_strict_supply(e: &Env, enabled: bool) {
    e.storage().instance().set(&DataKey::StrictSupply, &enabled);
}

// ─── Bond counter ──────────────────────────────────────────────────────────

pub fn bond_count(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::BondCounter)
        .unwrap_or(0)
}

/// Reserve the next bond id. Ids start at 1 and are never reused.
pub fn next_bond_id(e: &Env) -> Result<u64, LedgerError> {
    let id = bond_count(e)
        .checked_add(1)
        .ok_or(LedgerError::Overflow)?;
    e.storage().instance().set(&DataKey::BondCounter, &id);
    Ok(id)
}

// ─── Bonds ─────────────────────────────────────────────────────────────────

pub fn load_bond(e: &Env, bond_id: u64) -> Option<BondInfo> {
    let key = DataKey::Bond(bond_id);
    let bond: BondInfo = e.storage().persistent().get(&key)?;
    bump(e, &key);
    Some(bond)
}

pub fn save_bond(e: &Env, bond_id: u64, bond: &BondInfo) {
    let key = DataKey::Bond(bond_id);
    e.storage().persistent().set(&key, bond);
    bump(e, &key);
}

// ─── Holdings ──────────────────────────────────────────────────────────────

pub fn get_holding(e: &Env, bond_id: u64, holder: &Address) -> i128 {
    let key = DataKey::Holding(bond_id, holder.clone());
    match e.storage().persistent().get::<_, i128>(&key) {
        Some(amount) => {
            bump(e, &key);
            amount
        }
        None => 0,
    }
}

pub fn set_holding(e: &Env, bond_id: u64, holder: &Address, amount: i128) {
    let key = DataKey::Holding(bond_id, holder.clone());
    e.storage().persistent().set(&key, &amount);
    bump(e, &key);
}

// ─── Units sold ────────────────────────────────────────────────────────────

pub fn units_sold(e: &Env, bond_id: u64) -> i128 {
    let key = DataKey::UnitsSold(bond_id);
    match e.storage().persistent().get::<_, i128>(&key) {
        Some(sold) => {
            bump(e, &key);
            sold
        }
        None => 0,
    }
}

pub fn set_units_sold(e: &Env, bond_id: u64, sold: i128) {
    let key = DataKey::UnitsSold(bond_id);
    e.storage().persistent().set(&key, &sold);
    bump(e, &key);
}
