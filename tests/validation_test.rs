use fractional_water_allocation::errors::{
    GovernanceError, GovernanceResult, StateError, ValidationError,
};
use fractional_water_allocation::types::{Action, Role};
use fractional_water_allocation::validation::{
    check_concludable, check_proposal_shape, check_role_setup, check_voting_window,
    check_water_level, next_proposal_version,
};

const CAPACITY: u64 = 125_500;

fn invalid(err: ValidationError) -> GovernanceResult {
    Err(GovernanceError::Validation(err))
}

fn rejected(err: StateError) -> GovernanceResult {
    Err(GovernanceError::State(err))
}

#[test]
fn role_setup_requires_beneficiaries_capacity_and_addresses() {
    assert_eq!(check_role_setup(3, CAPACITY, false), Ok(()));
    assert_eq!(
        check_role_setup(0, CAPACITY, false),
        invalid(ValidationError::EmptyBeneficiaries)
    );
    assert_eq!(
        check_role_setup(3, 0, false),
        invalid(ValidationError::ZeroCapacity)
    );
    assert_eq!(
        check_role_setup(3, CAPACITY, true),
        invalid(ValidationError::MissingAddress)
    );
}

#[test]
fn water_level_must_be_strictly_inside_capacity() {
    assert_eq!(check_water_level(99_050, CAPACITY), Ok(()));
    assert_eq!(check_water_level(1, CAPACITY), Ok(()));
    assert_eq!(check_water_level(CAPACITY - 1, CAPACITY), Ok(()));

    for level in [0, CAPACITY, 125_600, 125_750, u64::MAX] {
        assert_eq!(
            check_water_level(level, CAPACITY),
            Err(GovernanceError::Validation(ValidationError::OutOfRange)),
            "level {level} should be out of range"
        );
    }
}

#[test]
fn proposal_shape_checks_run_in_order() {
    assert_eq!(check_proposal_shape(3, [33, 33, 34], 100, 200), Ok(()));
    assert_eq!(check_proposal_shape(1, [100], 0, 1), Ok(()));

    assert_eq!(
        check_proposal_shape(3, [33, 33], 100, 200),
        invalid(ValidationError::LengthMismatch)
    );
    assert_eq!(
        check_proposal_shape(3, [33, 33, 40], 100, 200),
        invalid(ValidationError::FractionSumInvalid)
    );
    assert_eq!(
        check_proposal_shape(3, [33, 33, 34], 200, 100),
        invalid(ValidationError::InvalidVotingWindow)
    );
    assert_eq!(
        check_proposal_shape(3, [33, 33, 34], 200, 200),
        invalid(ValidationError::InvalidVotingWindow)
    );

    // Length is reported before the sum, and the sum before the window.
    assert_eq!(
        check_proposal_shape(2, [10, 10, 10], 200, 100),
        invalid(ValidationError::LengthMismatch)
    );
    assert_eq!(
        check_proposal_shape(3, [10, 10, 10], 200, 100),
        invalid(ValidationError::FractionSumInvalid)
    );
}

#[test]
fn empty_proposal_fails_the_sum_check() {
    assert_eq!(
        check_proposal_shape(0, [0u32; 0], 100, 200),
        invalid(ValidationError::FractionSumInvalid)
    );
}

#[test]
fn fraction_sum_does_not_wrap() {
    assert_eq!(
        check_proposal_shape(2, [u32::MAX, 101], 100, 200),
        invalid(ValidationError::FractionSumInvalid)
    );
}

#[test]
fn voting_window_is_closed_interval() {
    assert_eq!(check_voting_window(100, 100, 200), Ok(()));
    assert_eq!(check_voting_window(150, 100, 200), Ok(()));
    assert_eq!(check_voting_window(200, 100, 200), Ok(()));
    assert_eq!(
        check_voting_window(99, 100, 200),
        rejected(StateError::OutsideVotingWindow)
    );
    assert_eq!(
        check_voting_window(201, 100, 200),
        rejected(StateError::OutsideVotingWindow)
    );
}

#[test]
fn conclude_needs_closed_window_and_acceptance() {
    assert_eq!(check_concludable(200, 200, true), Ok(()));
    assert_eq!(check_concludable(500, 200, true), Ok(()));
    assert_eq!(
        check_concludable(199, 200, true),
        rejected(StateError::VotingStillOpen)
    );
    assert_eq!(
        check_concludable(199, 200, false),
        rejected(StateError::VotingStillOpen)
    );
    assert_eq!(
        check_concludable(200, 200, false),
        rejected(StateError::ProposalRejected)
    );
}

#[test]
fn proposal_version_follows_last_plan() {
    assert_eq!(next_proposal_version(None), 0);
    assert_eq!(next_proposal_version(Some(0)), 1);
    assert_eq!(next_proposal_version(Some(41)), 42);
}

#[test]
fn every_error_has_a_message() {
    let errors = [
        GovernanceError::Validation(ValidationError::LengthMismatch),
        GovernanceError::Validation(ValidationError::FractionSumInvalid),
        GovernanceError::Validation(ValidationError::InvalidVotingWindow),
        GovernanceError::Validation(ValidationError::OutOfRange),
        GovernanceError::State(StateError::ProposalInProgress),
        GovernanceError::State(StateError::NoProposal),
        GovernanceError::State(StateError::OutsideVotingWindow),
        GovernanceError::State(StateError::VotingStillOpen),
        GovernanceError::State(StateError::ProposalRejected),
        GovernanceError::State(StateError::NoPlan),
    ];
    for (i, err) in errors.iter().enumerate() {
        assert!(!err.message().is_empty());
        for other in &errors[i + 1..] {
            assert_ne!(err.message(), other.message());
        }
    }
}

#[test]
fn access_errors_name_the_denied_action() {
    let denied = |role, action| GovernanceError::AccessDenied { role, action }.message();

    assert_eq!(
        denied(Role::Observer, Action::UpdateWaterLevel),
        "Valid observer can only provide a request to update reservoir water level"
    );
    assert_eq!(
        denied(Role::Mediator, Action::Propose),
        "Valid mediator can only propose new water allocation scheme"
    );
    assert_eq!(
        denied(Role::AnyBeneficiary, Action::Vote),
        "Valid beneficiary can only vote for new water allocation scheme"
    );
    assert_eq!(
        denied(Role::Mediator, Action::Conclude),
        "Valid mediator can only conclude voting for new water allocation scheme"
    );
}

#[test]
fn revert_messages_keep_client_facing_wording() {
    assert_eq!(
        ValidationError::FractionSumInvalid.message(),
        "Allocation fractions not summing upto one"
    );
    assert_eq!(
        ValidationError::OutOfRange.message(),
        "Water level needs to be greater than 0 and less than total reservoir capacity"
    );
    assert_eq!(
        StateError::ProposalInProgress.message(),
        "There is another proposal currently in voting stage"
    );
    assert_eq!(
        StateError::VotingStillOpen.message(),
        "There is still some time left for voting to conclude. \
         You need to wait until the voting end time proposed in the allocation scheme."
    );
}
