use soroban_sdk::{contracttype, Address, Env, String};

// ─── Bond definition ───────────────────────────────────────────────────────

/// A bond series as recorded at issuance. Immutable afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BondInfo {
    pub name: String,
    pub issuer: String,
    /// Face value in the smallest settlement-token unit.
    pub face_value: i128,
    /// Maturity as a unix timestamp. Informational only.
    pub maturity_date: u64,
    /// Fixed-point rate (basis points by convention). Not interpreted here.
    pub interest_rate: u32,
    /// Issuance cap checked by purchases.
    pub total_supply: i128,
    /// Set at issuance. Every mutating operation is guarded by this flag.
    pub is_active: bool,
}

impl BondInfo {
    /// Zero-valued record returned for ids that were never issued.
    pub fn empty(e: &Env) -> Self {
        BondInfo {
            name: String::from_str(e, ""),
            issuer: String::from_str(e, ""),
            face_value: 0,
            maturity_date: 0,
            interest_rate: 0,
            total_supply: 0,
            is_active: false,
        }
    }
}

// ─── Storage keys ──────────────────────────────────────────────────────────

/// * `Owner`, `Token`, `StrictSupply`, `BondCounter` live in `instance()`.
/// * Everything keyed by bond id lives in `persistent()`.
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Authority allowed to issue bonds.
    Owner,
    /// Settlement token contract address.
    Token,
    /// When true, purchases draw down the remaining supply instead of the static cap.
    StrictSupply,
    /// Highest bond id assigned so far.
    BondCounter,
    /// Bond definition by id.
    Bond(u64),
    /// Units held by an address in a bond.
    Holding(u64, Address),
    /// Ordered holder roster of a bond.
    Roster(u64),
    /// Roster membership flag, mirrors `Roster` for constant-time lookups.
    RosterMember(u64, Address),
    /// Running total of units purchased from the ledger.
    UnitsSold(u64),
}
