use anchor_lang::prelude::*;

/// Custom error codes for the release accountant.
#[error_code]
pub enum AccountantError {
    #[msg("Beneficiary must not be the default pubkey")]
    InvalidBeneficiary,

    #[msg("Cliff offset must lie within the vesting duration")]
    InvalidCliff,

    #[msg("Duration must be positive")]
    InvalidDuration,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Unauthorized: owner signature required")]
    Unauthorized,

    #[msg("Schedule is not revocable")]
    NotRevocable,

    #[msg("Asset is already revoked")]
    AlreadyRevoked,

    #[msg("No tokens are due for release")]
    NothingToRelease,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Insufficient vault balance")]
    InsufficientVaultBalance,

    #[msg("Math overflow")]
    MathOverflow,
}
