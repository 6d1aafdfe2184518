#![cfg(test)]

use crate::test_helpers;
use soroban_sdk::{
    testutils::{Address as _, Events},
    Address, Env, FromVal, String, Symbol, Val, Vec,
};

/// Most recent event published by `contract_id`: (topics, data).
fn last_ledger_event(e: &Env, contract_id: &Address) -> (Vec<Val>, Val) {
    let event = e
        .events()
        .all()
        .into_iter()
        .rev()
        .find(|ev| ev.0 == *contract_id)
        .unwrap();
    (event.1, event.2)
}

#[test]
fn test_bond_lifecycle_event_emissions() {
    let e = Env::default();
    let l = test_helpers::setup(&e);
    let b = Address::generate(&e);

    // --- 1. Issue ---
    let id = l.issue_default_bond(&e);

    let (topics, data) = last_ledger_event(&e, &l.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "bond_issued")
    );
    assert_eq!(u64::from_val(&e, &topics.get(1).unwrap()), id);
    let issued = <(String, String, i128)>::from_val(&e, &data);
    assert_eq!(
        issued,
        (
            String::from_str(&e, "Treasury 2030"),
            String::from_str(&e, "Acme Treasury"),
            1_000_i128
        )
    );

    // --- 2. Purchase ---
    l.client.purchase_bond(&l.buyer, &id, &100);

    let (topics, data) = last_ledger_event(&e, &l.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "bond_purchased")
    );
    assert_eq!(u64::from_val(&e, &topics.get(1).unwrap()), id);
    assert_eq!(
        <(Address, i128)>::from_val(&e, &data),
        (l.buyer.clone(), 100_i128)
    );

    // --- 3. Sale ---
    l.client.sell_bond(&l.buyer, &id, &40, &b);

    let (topics, data) = last_ledger_event(&e, &l.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "bond_sold")
    );
    assert_eq!(u64::from_val(&e, &topics.get(1).unwrap()), id);
    assert_eq!(
        <(Address, Address, i128)>::from_val(&e, &data),
        (l.buyer.clone(), b, 40_i128)
    );
}

#[test]
fn test_ownership_transfer_event() {
    let e = Env::default();
    let l = test_helpers::setup(&e);
    let successor = Address::generate(&e);

    l.client.transfer_ownership(&l.owner, &successor);

    let (topics, data) = last_ledger_event(&e, &l.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "ownership_transferred")
    );
    assert_eq!(
        <(Address, Address)>::from_val(&e, &data),
        (l.owner.clone(), successor)
    );
}

#[test]
fn test_strict_supply_event() {
    let e = Env::default();
    let l = test_helpers::setup(&e);

    l.client.set_strict_supply(&l.owner, &true);

    let (topics, data) = last_ledger_event(&e, &l.contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "strict_supply_set")
    );
    assert!(bool::from_val(&e, &data));
}
