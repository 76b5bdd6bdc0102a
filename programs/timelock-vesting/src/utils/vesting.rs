//! Linear vesting arithmetic.
//! - zero before the cliff
//! - full remaining balance at/after `start + duration`, or once revoked
//! - otherwise `total * elapsed / duration`, truncating toward zero so a
//!   release can under-pay by at most one unit but never over-pay
//!
//! Pure functions of the schedule, the per-asset ledger, the live vault
//! balance and a caller-supplied clock reading; nothing here polls the clock
//! or mutates state.

use crate::error::AccountantError;
use crate::state::{AssetLedger, Schedule};

/// Total ever escrowed for an asset: the live vault balance plus everything
/// that already left it through releases.
pub fn total_balance(
    current_balance: u64,
    released: u64,
) -> Result<u64, AccountantError> {
    current_balance
        .checked_add(released)
        .ok_or(AccountantError::MathOverflow)
}

/// Cumulative amount the beneficiary is entitled to as of `now_ts`,
/// irrespective of how much has already been paid out.
pub fn vested_amount(
    schedule: &Schedule,
    ledger: &AssetLedger,
    current_balance: u64,
    now_ts: i64,
) -> Result<u64, AccountantError> {
    let total = total_balance(current_balance, ledger.released)?;

    if now_ts < schedule.cliff_ts {
        return Ok(0);
    }

    let end_ts = schedule
        .start_ts
        .checked_add(schedule.duration)
        .ok_or(AccountantError::MathOverflow)?;
    if now_ts >= end_ts || ledger.revoked {
        return Ok(total);
    }

    // now_ts >= cliff_ts >= start_ts here, so elapsed is non-negative.
    let elapsed = now_ts
        .checked_sub(schedule.start_ts)
        .ok_or(AccountantError::MathOverflow)?;
    let v = (total as u128)
        .checked_mul(elapsed as u128)
        .ok_or(AccountantError::MathOverflow)?
        .checked_div(schedule.duration as u128)
        .ok_or(AccountantError::MathOverflow)?;
    u64::try_from(v).map_err(|_| AccountantError::MathOverflow)
}

/// Vested amount minus what has already been paid out: the quantity an
/// immediate release would transfer. Underflow here means the ledger and the
/// vault balance are inconsistent and is a hard failure.
pub fn releasable_amount(
    schedule: &Schedule,
    ledger: &AssetLedger,
    current_balance: u64,
    now_ts: i64,
) -> Result<u64, AccountantError> {
    let vested = vested_amount(schedule, ledger, current_balance, now_ts)?;
    vested
        .checked_sub(ledger.released)
        .ok_or(AccountantError::MathOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    // Fixture mirroring the canonical scenario: start 1000, cliff offset 100,
    // duration 1000, one asset funded with 1000 units.
    const START: i64 = 1000;
    const CLIFF: i64 = 1100;
    const DURATION: i64 = 1000;
    const END: i64 = START + DURATION;

    fn schedule(revocable: bool) -> Schedule {
        Schedule {
            owner: Pubkey::default(),
            beneficiary: Pubkey::default(),
            start_ts: START,
            cliff_ts: CLIFF,
            duration: DURATION,
            revocable,
        }
    }

    fn ledger(released: u64, revoked: bool) -> AssetLedger {
        AssetLedger {
            mint: Pubkey::default(),
            released,
            revoked,
        }
    }

    #[test]
    fn nothing_vests_before_cliff() {
        let s = schedule(true);
        let l = ledger(0, false);
        for t in [0, START, 1050, CLIFF - 1] {
            assert_eq!(vested_amount(&s, &l, 1000, t).unwrap(), 0);
        }
        // An immediate release would therefore have nothing to transfer.
        assert_eq!(releasable_amount(&s, &l, 1000, 1050).unwrap(), 0);
    }

    #[test]
    fn fully_vested_at_and_after_end() {
        let s = schedule(true);
        let l = ledger(0, false);
        assert_eq!(vested_amount(&s, &l, 1000, END).unwrap(), 1000);
        assert_eq!(vested_amount(&s, &l, 1000, 2500).unwrap(), 1000);

        // Revocation state does not matter once the schedule has run out.
        let l = ledger(0, true);
        assert_eq!(vested_amount(&s, &l, 1000, 2500).unwrap(), 1000);
    }

    #[test]
    fn linear_interpolation_truncates_toward_zero() {
        let s = schedule(true);
        let l = ledger(0, false);
        // Halfway through the schedule, half the total is vested.
        assert_eq!(vested_amount(&s, &l, 1000, 1500).unwrap(), 500);
        // 10 * 333 / 1000 = 3.33 truncates to 3.
        assert_eq!(vested_amount(&s, &l, 10, START + 333).unwrap(), 3);
    }

    #[test]
    fn vested_amount_is_monotonic_in_time() {
        let s = schedule(true);
        let l = ledger(0, false);
        let mut prev = 0;
        for t in (0..=3000).step_by(7) {
            let v = vested_amount(&s, &l, 1000, t).unwrap();
            assert!(v >= prev, "vested went down at t={t}: {v} < {prev}");
            prev = v;
        }
        assert_eq!(prev, 1000);
    }

    #[test]
    fn release_sequence_conserves_total() {
        let s = schedule(true);

        // t = 1500: 500 of 1000 vested, all of it releasable.
        let l = ledger(0, false);
        assert_eq!(releasable_amount(&s, &l, 1000, 1500).unwrap(), 500);

        // After paying 500 out the vault holds 500; the vested total is
        // unchanged, so an immediate second release has nothing left.
        let l = ledger(500, false);
        assert_eq!(vested_amount(&s, &l, 500, 1500).unwrap(), 500);
        assert_eq!(releasable_amount(&s, &l, 500, 1500).unwrap(), 0);

        // At the end of the schedule the remaining 500 becomes due.
        assert_eq!(releasable_amount(&s, &l, 500, END).unwrap(), 500);

        // And once everything is out, later calls find nothing.
        let l = ledger(1000, false);
        assert_eq!(releasable_amount(&s, &l, 0, 2500).unwrap(), 0);
    }

    #[test]
    fn revocation_freezes_vesting_at_remaining_total() {
        let s = schedule(true);

        // Revoke at t = 1500 with nothing released: 500 unreleased, so the
        // owner is refunded balance - unreleased = 500.
        let l = ledger(0, false);
        let unreleased = releasable_amount(&s, &l, 1000, 1500).unwrap();
        assert_eq!(unreleased, 500);
        let refund = 1000 - unreleased;
        assert_eq!(refund, 500);

        // After the refund leaves the vault, the revoked branch pins the
        // vested amount to the remaining total: the already-vested 500 stays
        // claimable through a later release.
        let l = ledger(0, true);
        assert_eq!(vested_amount(&s, &l, 500, 1600).unwrap(), 500);
        assert_eq!(releasable_amount(&s, &l, 500, 1600).unwrap(), 500);

        // Claiming it leaves nothing further, at any later time.
        let l = ledger(500, true);
        assert_eq!(releasable_amount(&s, &l, 0, 1700).unwrap(), 0);
        assert_eq!(releasable_amount(&s, &l, 0, 9999).unwrap(), 0);
    }

    #[test]
    fn revocation_before_cliff_vests_nothing() {
        let s = schedule(true);
        let l = ledger(0, true);
        // The cliff gate still applies to a revoked asset.
        assert_eq!(vested_amount(&s, &l, 1000, CLIFF - 1).unwrap(), 0);
        assert_eq!(vested_amount(&s, &l, 1000, CLIFF).unwrap(), 1000);
    }

    #[test]
    fn inconsistent_ledger_is_a_hard_failure() {
        let s = schedule(true);
        // released exceeds what could ever have vested; the subtraction must
        // fail loudly instead of wrapping.
        let l = ledger(600, false);
        assert!(matches!(
            releasable_amount(&s, &l, 0, 1050),
            Err(AccountantError::MathOverflow)
        ));
    }

    #[test]
    fn total_balance_overflow_is_detected() {
        let l = ledger(1, false);
        let s = schedule(true);
        assert!(matches!(
            vested_amount(&s, &l, u64::MAX, 1500),
            Err(AccountantError::MathOverflow)
        ));
    }
}
