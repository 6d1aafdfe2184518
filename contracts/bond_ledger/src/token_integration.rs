//! Settlement token adapter for the bond ledger.
//! Centralizes the token lookup, balance checks, and every token movement.
//!
//! Any contract implementing the standard token interface can act as the
//! settlement token. Movements go through the fallible `try_*` client calls:
//! a rejected movement becomes `LedgerError::TransferFailed`, and returning
//! that error rolls back the whole ledger invocation.

use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

use crate::errors::LedgerError;
use crate::storage;

pub struct SettlementToken<'a> {
    e: &'a Env,
    client: TokenClient<'a>,
}

impl<'a> SettlementToken<'a> {
    /// @notice Binds to the token configured at initialization.
    pub fn load(e: &'a Env) -> Result<Self, LedgerError> {
        let token = storage::get_token(e)?;
        Ok(SettlementToken {
            e,
            client: TokenClient::new(e, &token),
        })
    }

    pub fn balance_of(&self, account: &Address) -> i128 {
        self.client.balance(account)
    }

    /// @notice Fails with `InsufficientFunds` unless `account` holds at least `amount`.
    pub fn require_balance(&self, account: &Address, amount: i128) -> Result<(), LedgerError> {
        if self.balance_of(account) < amount {
            return Err(LedgerError::InsufficientFunds);
        }
        Ok(())
    }

    /// @notice Pulls `amount` from `from` into ledger custody.
    /// @dev Requires a prior allowance from `from` to the ledger contract.
    pub fn pull_into_custody(&self, from: &Address, amount: i128) -> Result<(), LedgerError> {
        let ledger = self.e.current_contract_address();
        self.transfer_from(from, &ledger, amount)
    }

    /// @notice Moves `amount` from `from` to `to` using the ledger's allowance.
    pub fn transfer_from(
        &self,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        let spender = self.e.current_contract_address();
        match self.client.try_transfer_from(&spender, from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(LedgerError::TransferFailed),
        }
    }

    /// @notice Destroys `amount` of `from`'s tokens using the ledger's allowance.
    pub fn burn_from(&self, from: &Address, amount: i128) -> Result<(), LedgerError> {
        let spender = self.e.current_contract_address();
        match self.client.try_burn_from(&spender, from, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(LedgerError::TransferFailed),
        }
    }
}
