//! Pure precondition checks. Endpoints run these before touching storage,
//! so a rejected call never leaves a partial write behind.

use crate::errors::{GovernanceResult, StateError, ValidationError};

/// Percentage total every proposal must add up to.
pub const FRACTION_TOTAL: u64 = 100;

pub fn check_role_setup(
    beneficiary_count: usize,
    capacity: u64,
    any_address_missing: bool,
) -> GovernanceResult {
    if beneficiary_count == 0 {
        return Err(ValidationError::EmptyBeneficiaries.into());
    }
    if capacity == 0 {
        return Err(ValidationError::ZeroCapacity.into());
    }
    if any_address_missing {
        return Err(ValidationError::MissingAddress.into());
    }
    Ok(())
}

/// Accepts only `0 < level < capacity`.
pub fn check_water_level(level: u64, capacity: u64) -> GovernanceResult {
    if level == 0 || level >= capacity {
        return Err(ValidationError::OutOfRange.into());
    }
    Ok(())
}

/// Shape of a new proposal, checked in order: lengths, fraction sum, window.
/// Start and end are only compared to each other, never to the current time.
pub fn check_proposal_shape<I>(
    beneficiary_count: usize,
    fractions: I,
    voting_start_time: u64,
    voting_end_time: u64,
) -> GovernanceResult
where
    I: IntoIterator<Item = u32>,
{
    let mut fraction_count = 0usize;
    let mut fraction_sum = 0u64;
    for fraction in fractions {
        fraction_count += 1;
        fraction_sum += u64::from(fraction);
    }

    if beneficiary_count != fraction_count {
        return Err(ValidationError::LengthMismatch.into());
    }
    if fraction_sum != FRACTION_TOTAL {
        return Err(ValidationError::FractionSumInvalid.into());
    }
    if voting_end_time <= voting_start_time {
        return Err(ValidationError::InvalidVotingWindow.into());
    }
    Ok(())
}

/// Votes count only inside the closed interval `[start, end]`.
pub fn check_voting_window(now: u64, voting_start_time: u64, voting_end_time: u64) -> GovernanceResult {
    if now < voting_start_time || now > voting_end_time {
        return Err(StateError::OutsideVotingWindow.into());
    }
    Ok(())
}

pub fn check_concludable(now: u64, voting_end_time: u64, accepted: bool) -> GovernanceResult {
    if now < voting_end_time {
        return Err(StateError::VotingStillOpen.into());
    }
    if !accepted {
        return Err(StateError::ProposalRejected.into());
    }
    Ok(())
}

/// Version for the next proposal: one past the last concluded plan, or 0.
pub fn next_proposal_version(last_plan_version: Option<u64>) -> u64 {
    match last_plan_version {
        Some(version) => version + 1,
        None => 0,
    }
}
