use anchor_lang::prelude::*;

/// Per-mint release/revocation ledger PDA, created lazily on the first
/// `release` or `revoke` touching the mint.
///
/// Both fields live in one account so the pair always commits atomically.
#[account]
pub struct AssetLedger {
    /// Mint this ledger accounts for.
    pub mint: Pubkey,
    /// Cumulative amount already transferred to the beneficiary.
    /// Monotonically non-decreasing.
    pub released: u64,
    /// One-way revocation flag. Once true, vesting is frozen at the full
    /// remaining balance and the flag never resets.
    pub revoked: bool,
}

impl AssetLedger {
    pub const SIZE: usize =
        32 + // mint
        8 +  // released
        1;   // revoked
}
