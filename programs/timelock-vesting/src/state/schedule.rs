use anchor_lang::prelude::*;

/// Singleton vesting schedule PDA. Every field is fixed at initialization.
#[account]
pub struct Schedule {
    /// Authority that created the schedule; sole identity allowed to revoke
    /// and recipient of revocation refunds.
    pub owner: Pubkey,
    /// Recipient of released tokens. Never the default pubkey.
    pub beneficiary: Pubkey,
    /// Vesting start timestamp (Unix seconds, UTC).
    pub start_ts: i64,
    /// Timestamp before which nothing vests (`start_ts` + cliff offset).
    pub cliff_ts: i64,
    /// Total vesting length in seconds (> 0).
    pub duration: i64,
    /// Whether the owner may revoke vesting per asset.
    pub revocable: bool,
}

impl Schedule {
    pub const SIZE: usize =
        32 + // owner
        32 + // beneficiary
        8 +  // start_ts
        8 +  // cliff_ts
        8 +  // duration
        1;   // revocable
}
