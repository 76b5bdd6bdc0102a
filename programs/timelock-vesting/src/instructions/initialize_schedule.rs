use anchor_lang::prelude::*;

use crate::constants::SCHEDULE_SEED;
use crate::error::AccountantError;
use crate::state::Schedule;

pub fn initialize_schedule(
    ctx: Context<InitializeSchedule>,
    beneficiary: Pubkey,
    start_ts: i64,
    cliff_offset: i64,
    duration: i64,
    revocable: bool,
) -> Result<()> {
    require!(
        beneficiary != Pubkey::default(),
        AccountantError::InvalidBeneficiary
    );
    require!(start_ts > 0, AccountantError::InvalidTimestamp);
    require!(duration > 0, AccountantError::InvalidDuration);
    require!(cliff_offset >= 0, AccountantError::InvalidCliff);
    require!(cliff_offset <= duration, AccountantError::InvalidCliff);

    let st = &mut ctx.accounts.schedule;
    st.owner = ctx.accounts.owner.key();
    st.beneficiary = beneficiary;
    st.start_ts = start_ts;
    st.cliff_ts = start_ts
        .checked_add(cliff_offset)
        .ok_or(AccountantError::MathOverflow)?;
    st.duration = duration;
    st.revocable = revocable;

    emit!(ScheduleInitialized {
        owner: st.owner,
        beneficiary,
        start_ts,
        cliff_ts: st.cliff_ts,
        duration,
        revocable,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeSchedule<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + Schedule::SIZE,
        seeds = [SCHEDULE_SEED],
        bump
    )]
    pub schedule: Account<'info, Schedule>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct ScheduleInitialized {
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    pub start_ts: i64,
    pub cliff_ts: i64,
    pub duration: i64,
    pub revocable: bool,
}
