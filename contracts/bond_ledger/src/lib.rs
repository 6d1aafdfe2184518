//! # Bond Ledger Contract
//!
//! An owner issues bond series; any address buys units against the settlement
//! token, sells units to another address, or redeems (burns) them.
//!
//! ## Key design decisions
//!
//! - **Single owner**: only the owner issues bonds. Ownership moves through
//!   `transfer_ownership`, never through ambient state.
//! - **Ordered checks, no partial effects**: every precondition is evaluated
//!   in a fixed order and the first failure is returned as a `LedgerError`.
//!   An error return rolls back all storage writes and token movements of the
//!   invocation.
//! - **Append-only roster**: an address enters a bond's roster the first time
//!   it receives units and is never removed.
//! - **Static supply cap**: purchases compare against `total_supply`, not the
//!   remaining supply, unless the owner enables strict supply.
//! - **Sale funds check on the seller**: `sell_bond` checks the seller's token
//!   balance although tokens move seller -> buyer.
//! - **No replay protection**: a repeated purchase is a new purchase.

#![no_std]

mod errors;
mod events;
mod roster;
mod storage;
mod token_integration;
mod types;
mod validation;

pub use errors::{ErrorCategory, ErrorExt, LedgerError};
pub use types::BondInfo;
pub use validation::MAX_UNITS_PER_CALL;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol, Vec};
use token_integration::SettlementToken;

#[cfg(test)]
mod test_helpers;

#[cfg(test)]
mod test_events;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_owner(e: &Env, caller: &Address) -> Result<(), LedgerError> {
    caller.require_auth();
    let owner = storage::get_owner(e)?;
    if owner != *caller {
        return Err(LedgerError::NotOwner);
    }
    Ok(())
}

/// Loads a bond that may accept operations.
///
/// This is the only place the activity flag is consulted.
fn require_active_bond(e: &Env, bond_id: u64) -> Result<BondInfo, LedgerError> {
    let bond = storage::load_bond(e, bond_id).ok_or(LedgerError::BondNotFound)?;
    if !bond.is_active {
        return Err(LedgerError::BondNotActive);
    }
    Ok(bond)
}

/// Checks `amount` against the supply cap and returns the new units-sold total.
fn check_supply(
    e: &Env,
    bond_id: u64,
    bond: &BondInfo,
    amount: i128,
) -> Result<i128, LedgerError> {
    if amount > bond.total_supply {
        return Err(LedgerError::InsufficientSupply);
    }
    let sold = storage::units_sold(e, bond_id)
        .checked_add(amount)
        .ok_or(LedgerError::Overflow)?;
    if storage::is_strict_supply(e) && sold > bond.total_supply {
        return Err(LedgerError::InsufficientSupply);
    }
    Ok(sold)
}

fn require_holding(
    e: &Env,
    bond_id: u64,
    holder: &Address,
    amount: i128,
) -> Result<i128, LedgerError> {
    let held = storage::get_holding(e, bond_id, holder);
    if held < amount {
        return Err(LedgerError::InsufficientHoldings);
    }
    Ok(held)
}

fn credit(e: &Env, bond_id: u64, holder: &Address, amount: i128) -> Result<(), LedgerError> {
    let held = storage::get_holding(e, bond_id, holder)
        .checked_add(amount)
        .ok_or(LedgerError::Overflow)?;
    storage::set_holding(e, bond_id, holder, held);
    roster::enroll(e, bond_id, holder);
    Ok(())
}

fn log_rejection(e: &Env, op: &str, bond_id: u64, err: LedgerError) {
    log!(e, "bond ledger rejected call", Symbol::new(e, op), bond_id, err as u32);
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct BondLedger;

#[contractimpl]
impl BondLedger {
    // ── Setup & ownership ──────────────────────────────────────────────────

    /// One-time initialization. Stores the owner and the settlement token.
    ///
    /// # Errors
    /// * `AlreadyInitialized`: called a second time
    pub fn initialize(e: Env, owner: Address, token: Address) -> Result<(), LedgerError> {
        if storage::is_initialized(&e) {
            return Err(LedgerError::AlreadyInitialized);
        }
        storage::set_owner(&e, &owner);
        storage::set_token(&e, &token);
        storage::set_strict_supply(&e, false);
        storage::bump_instance(&e);
        Ok(())
    }

    /// Hand the issuing authority to `new_owner`.
    ///
    /// # Errors
    /// * `NotOwner`: `owner` is not the current owner
    pub fn transfer_ownership(
        e: Env,
        owner: Address,
        new_owner: Address,
    ) -> Result<(), LedgerError> {
        require_owner(&e, &owner)?;
        storage::set_owner(&e, &new_owner);
        events::emit_ownership_transferred(&e, &owner, &new_owner);
        Ok(())
    }

    /// Toggle strict supply. When enabled, a purchase fails once the units
    /// sold so far plus the requested amount would exceed `total_supply`.
    pub fn set_strict_supply(e: Env, owner: Address, enabled: bool) -> Result<(), LedgerError> {
        require_owner(&e, &owner)?;
        storage::set_strict_supply(&e, enabled);
        events::emit_strict_supply_set(&e, enabled);
        Ok(())
    }

    // ── Bond lifecycle ─────────────────────────────────────────────────────

    /// Issue a new bond series and return its id. Ids start at 1.
    ///
    /// # Errors
    /// * `NotOwner`: `caller` is not the owner; nothing is created
    /// * `InvalidAmount`: negative `face_value` or `supply`
    #[allow(clippy::too_many_arguments)]
    pub fn issue_bond(
        e: Env,
        caller: Address,
        name: String,
        issuer: String,
        face_value: i128,
        maturity_date: u64,
        interest_rate: u32,
        supply: i128,
    ) -> Result<u64, LedgerError> {
        require_owner(&e, &caller)?;
        validation::require_non_negative(face_value)?;
        validation::require_non_negative(supply)?;

        let bond_id = storage::next_bond_id(&e)?;
        let bond = BondInfo {
            name,
            issuer,
            face_value,
            maturity_date,
            interest_rate,
            total_supply: supply,
            is_active: true,
        };
        storage::save_bond(&e, bond_id, &bond);
        storage::bump_instance(&e);

        events::emit_bond_issued(&e, bond_id, &bond.name, &bond.issuer, face_value);
        Ok(bond_id)
    }

    /// Buy `amount` units of `bond_id`. Pulls `amount` settlement tokens from
    /// `buyer` into ledger custody; the buyer must have approved the ledger.
    ///
    /// # Errors (checked in this order)
    /// * `BondNotFound` / `BondNotActive`
    /// * `InvalidAmount`: `amount <= 0`
    /// * `InsufficientSupply`: `amount` above the supply cap
    /// * `AmountExceedsLimit`: `amount > MAX_UNITS_PER_CALL`
    /// * `InsufficientFunds`: buyer's token balance below `amount`
    /// * `TransferFailed`: the token rejected the pull (e.g. no allowance)
    pub fn purchase_bond(
        e: Env,
        buyer: Address,
        bond_id: u64,
        amount: i128,
    ) -> Result<(), LedgerError> {
        buyer.require_auth();
        Self::purchase(&e, &buyer, bond_id, amount)
            .inspect_err(|err| log_rejection(&e, "purchase_bond", bond_id, *err))
    }

    /// Sell `amount` units of `bond_id` from `seller` to `buyer`. Settlement
    /// tokens move directly from the seller to the buyer.
    ///
    /// # Errors (checked in this order)
    /// * `BondNotFound` / `BondNotActive`
    /// * `InvalidAmount`: `amount <= 0`
    /// * `NoHolders`: the bond has never been held
    /// * `InsufficientHoldings`: seller holds fewer than `amount` units
    /// * `AmountExceedsLimit`: `amount > MAX_UNITS_PER_CALL`
    /// * `InsufficientFunds`: seller's token balance below `amount`
    /// * `TransferFailed`: the token rejected the movement
    pub fn sell_bond(
        e: Env,
        seller: Address,
        bond_id: u64,
        amount: i128,
        buyer: Address,
    ) -> Result<(), LedgerError> {
        seller.require_auth();
        Self::sell(&e, &seller, bond_id, amount, &buyer)
            .inspect_err(|err| log_rejection(&e, "sell_bond", bond_id, *err))
    }

    /// Retire `amount` units held by `holder`, burning the same amount of the
    /// holder's settlement tokens. No payout is made.
    ///
    /// # Errors
    /// * `BondNotFound` / `BondNotActive`
    /// * `InvalidAmount`: `amount <= 0`
    /// * `InsufficientHoldings`: holder has fewer than `amount` units
    /// * `TransferFailed`: the token rejected the burn
    pub fn redeem_bond(
        e: Env,
        holder: Address,
        bond_id: u64,
        amount: i128,
    ) -> Result<(), LedgerError> {
        holder.require_auth();
        Self::redeem(&e, &holder, bond_id, amount)
            .inspect_err(|err| log_rejection(&e, "redeem_bond", bond_id, *err))
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Returns the bond definition, or a zero-valued record for unknown ids.
    pub fn get_bond_info(e: Env, bond_id: u64) -> BondInfo {
        storage::load_bond(&e, bond_id).unwrap_or_else(|| BondInfo::empty(&e))
    }

    /// Every address that has ever held the bond, in first-acquisition order.
    pub fn get_bond_holders(e: Env, bond_id: u64) -> Vec<Address> {
        roster::holders(&e, bond_id)
    }

    pub fn get_bond_holder_amount(e: Env, bond_id: u64, holder: Address) -> i128 {
        storage::get_holding(&e, bond_id, &holder)
    }

    /// Highest bond id issued so far (0 before the first issuance).
    pub fn bond_count(e: Env) -> u64 {
        storage::bond_count(&e)
    }

    /// Units bought from the ledger for `bond_id`, across all purchases.
    pub fn get_units_sold(e: Env, bond_id: u64) -> i128 {
        storage::units_sold(&e, bond_id)
    }

    pub fn get_owner(e: Env) -> Result<Address, LedgerError> {
        storage::get_owner(&e)
    }

    pub fn get_token(e: Env) -> Result<Address, LedgerError> {
        storage::get_token(&e)
    }

    pub fn is_strict_supply(e: Env) -> bool {
        storage::is_strict_supply(&e)
    }
}

// Bodies of the mutating entry points. Kept outside `#[contractimpl]` so they
// are not exported.
impl BondLedger {
    fn purchase(e: &Env, buyer: &Address, bond_id: u64, amount: i128) -> Result<(), LedgerError> {
        let bond = require_active_bond(e, bond_id)?;
        validation::require_positive(amount)?;
        let sold = check_supply(e, bond_id, &bond, amount)?;
        validation::require_within_call_limit(amount)?;

        let token = SettlementToken::load(e)?;
        token.require_balance(buyer, amount)?;
        token.pull_into_custody(buyer, amount)?;

        credit(e, bond_id, buyer, amount)?;
        storage::set_units_sold(e, bond_id, sold);

        events::emit_bond_purchased(e, bond_id, buyer, amount);
        Ok(())
    }

    fn sell(
        e: &Env,
        seller: &Address,
        bond_id: u64,
        amount: i128,
        buyer: &Address,
    ) -> Result<(), LedgerError> {
        require_active_bond(e, bond_id)?;
        validation::require_positive(amount)?;
        if !roster::has_holders(e, bond_id) {
            return Err(LedgerError::NoHolders);
        }
        let held = require_holding(e, bond_id, seller, amount)?;
        validation::require_within_call_limit(amount)?;

        let token = SettlementToken::load(e)?;
        token.require_balance(seller, amount)?;
        token.transfer_from(seller, buyer, amount)?;

        // Debit first: when seller == buyer the credit must see the debited value.
        storage::set_holding(e, bond_id, seller, held - amount);
        credit(e, bond_id, buyer, amount)?;

        events::emit_bond_sold(e, bond_id, seller, buyer, amount);
        Ok(())
    }

    fn redeem(e: &Env, holder: &Address, bond_id: u64, amount: i128) -> Result<(), LedgerError> {
        require_active_bond(e, bond_id)?;
        validation::require_positive(amount)?;
        let held = require_holding(e, bond_id, holder, amount)?;

        let token = SettlementToken::load(e)?;
        token.burn_from(holder, amount)?;

        storage::set_holding(e, bond_id, holder, held - amount);
        Ok(())
    }
}
