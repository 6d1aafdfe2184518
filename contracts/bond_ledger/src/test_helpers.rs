//! Shared test helpers for bond_ledger tests.

#![cfg(test)]

use crate::{BondLedger, BondLedgerClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, String};

/// Default mint: large enough for all test scenarios.
pub const DEFAULT_MINT: i128 = 1_000_000;

/// Supply used by `issue_default_bond`.
pub const DEFAULT_SUPPLY: i128 = 1_000;

pub struct TestLedger<'a> {
    pub client: BondLedgerClient<'a>,
    pub owner: Address,
    pub buyer: Address,
    pub token: Address,
    pub contract_id: Address,
}

impl<'a> TestLedger<'a> {
    pub fn token_client(&self, e: &'a Env) -> TokenClient<'a> {
        TokenClient::new(e, &self.token)
    }

    /// Creates a funded account that has approved the ledger for its whole balance.
    pub fn funded_account(&self, e: &Env, mint_amount: i128) -> Address {
        let account = Address::generate(e);
        fund(e, &self.token, &self.contract_id, &account, mint_amount);
        account
    }

    pub fn issue_default_bond(&self, e: &Env) -> u64 {
        self.issue_bond_with_supply(e, DEFAULT_SUPPLY)
    }

    pub fn issue_bond_with_supply(&self, e: &Env, supply: i128) -> u64 {
        self.client.issue_bond(
            &self.owner,
            &String::from_str(e, "Treasury 2030"),
            &String::from_str(e, "Acme Treasury"),
            &1_000_i128,
            &1_893_456_000_u64,
            &450_u32,
            &supply,
        )
    }
}

/// Mints `amount` to `account` and approves `spender` for all of it.
pub fn fund(e: &Env, token: &Address, spender: &Address, account: &Address, amount: i128) {
    let asset_admin = StellarAssetClient::new(e, token);
    asset_admin.set_authorized(account, &true);
    asset_admin.mint(account, &amount);

    let expiry_ledger = e.ledger().sequence().saturating_add(10_000);
    TokenClient::new(e, token).approve(account, spender, &amount, &expiry_ledger);
}

/// Deploys the ledger and a Stellar asset token, funds one buyer, initializes.
pub fn setup(e: &Env) -> TestLedger<'_> {
    setup_with_mint(e, DEFAULT_MINT)
}

pub fn setup_with_mint(e: &Env, mint_amount: i128) -> TestLedger<'_> {
    e.mock_all_auths();

    let contract_id = e.register(BondLedger, ());
    let client = BondLedgerClient::new(e, &contract_id);
    let owner = Address::generate(e);
    let buyer = Address::generate(e);

    let token = e
        .register_stellar_asset_contract_v2(owner.clone())
        .address();
    fund(e, &token, &contract_id, &buyer, mint_amount);

    client.initialize(&owner, &token);

    TestLedger {
        client,
        owner,
        buyer,
        token,
        contract_id,
    }
}
