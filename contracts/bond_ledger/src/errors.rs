use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups ledger errors by concern for monitoring and off-chain display.
/// @dev    Switch on the category first, then on the specific `LedgerError` code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup errors (codes 1-99).
    Initialization,
    /// Caller permission errors (codes 100-199).
    Authorization,
    /// Bond lookup and lifecycle errors (codes 200-299).
    Bond,
    /// Amount and supply-cap errors (codes 300-399).
    Amount,
    /// Per-holder unit balance errors (codes 400-499).
    Holdings,
    /// Settlement token errors (codes 500-599).
    Settlement,
    /// Checked arithmetic errors (codes 600-699).
    Arithmetic,
}

/// @title  LedgerError
/// @notice Every failure a bond ledger operation can report.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment;
///         append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1   -  99 : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Bond
///   300 - 399 : Amount
///   400 - 499 : Holdings
///   500 - 599 : Settlement
///   600 - 699 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    // --- Initialization (1-99) ---
    /// Owner and settlement token have not been configured.
    NotInitialized = 1,

    /// `initialize` was called a second time.
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the ledger owner.
    NotOwner = 100,

    // --- Bond (200-299) ---
    /// No bond has been issued under the given id.
    BondNotFound = 200,

    /// Bond exists but is not accepting operations.
    BondNotActive = 201,

    // --- Amount (300-399) ---
    /// Amount is zero or negative.
    InvalidAmount = 300,

    /// Amount is above the per-call unit ceiling.
    AmountExceedsLimit = 301,

    /// Purchase would exceed the bond's supply cap.
    InsufficientSupply = 302,

    // --- Holdings (400-499) ---
    /// Caller holds fewer units than requested.
    InsufficientHoldings = 400,

    /// Bond has never had a holder.
    NoHolders = 401,

    // --- Settlement (500-599) ---
    /// Settlement token balance is below the requested amount.
    InsufficientFunds = 500,

    /// The settlement token rejected the movement.
    TransferFailed = 501,

    // --- Arithmetic (600-699) ---
    /// A checked addition overflowed.
    Overflow = 600,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every LedgerError variant.
pub trait ErrorExt {
    fn category(&self) -> ErrorCategory;

    /// Static description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for LedgerError {
    fn category(&self) -> ErrorCategory {
        match self {
            LedgerError::NotInitialized | LedgerError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }
            LedgerError::NotOwner => ErrorCategory::Authorization,
            LedgerError::BondNotFound | LedgerError::BondNotActive => ErrorCategory::Bond,
            LedgerError::InvalidAmount
            | LedgerError::AmountExceedsLimit
            | LedgerError::InsufficientSupply => ErrorCategory::Amount,
            LedgerError::InsufficientHoldings | LedgerError::NoHolders => {
                ErrorCategory::Holdings
            }
            LedgerError::InsufficientFunds | LedgerError::TransferFailed => {
                ErrorCategory::Settlement
            }
            LedgerError::Overflow => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            LedgerError::NotInitialized => "Ledger has not been initialized",
            LedgerError::AlreadyInitialized => "Ledger has already been initialized",
            LedgerError::NotOwner => "Caller is not the ledger owner",
            LedgerError::BondNotFound => "No bond issued under the given id",
            LedgerError::BondNotActive => "Bond is not in an active state",
            LedgerError::InvalidAmount => "Amount must be strictly positive (> 0)",
            LedgerError::AmountExceedsLimit => "Amount exceeds the per-call unit ceiling",
            LedgerError::InsufficientSupply => "Amount exceeds the bond supply cap",
            LedgerError::InsufficientHoldings => "Caller holds fewer units than requested",
            LedgerError::NoHolders => "Bond has no recorded holders",
            LedgerError::InsufficientFunds => "Settlement token balance is insufficient",
            LedgerError::TransferFailed => "Settlement token transfer was rejected",
            LedgerError::Overflow => "Integer overflow in checked arithmetic",
        }
    }
}
