//! Holder roster: the ordered, append-only list of every address that has
//! ever held units of a bond.
//!
//! The list keeps insertion order for enumeration. A per-address membership
//! flag sits beside it so that enrolment never scans the list. An address
//! stays on the roster after its balance returns to zero.

use soroban_sdk::{Address, Env, Vec};

use crate::storage::bump;
use crate::types::DataKey;

/// Returns the roster of `bond_id` in insertion order. Empty for unknown ids.
pub fn holders(e: &Env, bond_id: u64) -> Vec<Address> {
    let key = DataKey::Roster(bond_id);
    match e.storage().persistent().get::<_, Vec<Address>>(&key) {
        Some(list) => {
            bump(e, &key);
            list
        }
        None => Vec::new(e),
    }
}

pub fn is_member(e: &Env, bond_id: u64, holder: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::RosterMember(bond_id, holder.clone()))
        .unwrap_or(false)
}

pub fn has_holders(e: &Env, bond_id: u64) -> bool {
    e.storage().persistent().has(&DataKey::Roster(bond_id))
}

/// Appends `holder` unless already present. Returns `true` when appended.
pub fn enroll(e: &Env, bond_id: u64, holder: &Address) -> bool {
    if is_member(e, bond_id, holder) {
        return false;
    }

    let mut list = holders(e, bond_id);
    list.push_back(holder.clone());

    let roster_key = DataKey::Roster(bond_id);
    e.storage().persistent().set(&roster_key, &list);
    bump(e, &roster_key);

    let member_key = DataKey::RosterMember(bond_id, holder.clone());
    e.storage().persistent().set(&member_key, &true);
    bump(e, &member_key);

    true
}
