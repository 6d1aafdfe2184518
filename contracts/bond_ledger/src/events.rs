use soroban_sdk::{Address, Env, String, Symbol};

/// Emitted when the owner issues a new bond.
///
/// # Topics
/// * `Symbol` - "bond_issued"
/// * `u64` - The new bond id
///
/// # Data
/// * `String` - Bond name
/// * `String` - Issuer name
/// * `i128` - Face value
pub fn emit_bond_issued(e: &Env, bond_id: u64, name: &String, issuer: &String, face_value: i128) {
    let topics = (Symbol::new(e, "bond_issued"), bond_id);
    let data = (name.clone(), issuer.clone(), face_value);
    e.events().publish(topics, data);
}

/// Emitted when units are bought from the ledger.
///
/// # Topics
/// * `Symbol` - "bond_purchased"
/// * `u64` - The bond id
///
/// # Data
/// * `Address` - The buyer
/// * `i128` - Units purchased
pub fn emit_bond_purchased(e: &Env, bond_id: u64, buyer: &Address, amount: i128) {
    let topics = (Symbol::new(e, "bond_purchased"), bond_id);
    let data = (buyer.clone(), amount);
    e.events().publish(topics, data);
}

/// Emitted when a holder sells units to another address.
///
/// # Topics
/// * `Symbol` - "bond_sold"
/// * `u64` - The bond id
///
/// # Data
/// * `Address` - The seller
/// * `Address` - The buyer
/// * `i128` - Units moved
pub fn emit_bond_sold(e: &Env, bond_id: u64, seller: &Address, buyer: &Address, amount: i128) {
    let topics = (Symbol::new(e, "bond_sold"), bond_id);
    let data = (seller.clone(), buyer.clone(), amount);
    e.events().publish(topics, data);
}

pub fn emit_ownership_transferred(e: &Env, previous: &Address, new_owner: &Address) {
    e.events().publish(
        (Symbol::new(e, "ownership_transferred"),),
        (previous.clone(), new_owner.clone()),
    );
}

pub fn emit_strict_supply_set(e: &Env, enabled: bool) {
    e.events()
        .publish((Symbol::new(e, "strict_supply_set"),), enabled);
}
