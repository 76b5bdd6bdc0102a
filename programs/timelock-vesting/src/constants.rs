//! Program-wide constants.

/// Seed of the singleton schedule PDA.
pub const SCHEDULE_SEED: &[u8] = b"schedule";

/// Seed prefix of the per-mint escrow vault PDAs.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed prefix of the per-mint release/revocation ledger PDAs.
pub const ASSET_LEDGER_SEED: &[u8] = b"asset_ledger";
