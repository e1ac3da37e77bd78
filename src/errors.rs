use crate::types::{Action, Role};

// ============================================================
// Governance errors. Every rejected call maps to exactly one
// of these. The message is the revert reason seen by clients.
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GovernanceError {
    /// Caller does not hold the role `action` requires.
    AccessDenied { role: Role, action: Action },
    Validation(ValidationError),
    State(StateError),
}

/// Structurally invalid input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ValidationError {
    LengthMismatch,
    FractionSumInvalid,
    InvalidVotingWindow,
    OutOfRange,
    EmptyBeneficiaries,
    ZeroCapacity,
    MissingAddress,
}

/// Operation is not valid in the current lifecycle phase.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StateError {
    ProposalInProgress,
    NoProposal,
    OutsideVotingWindow,
    VotingStillOpen,
    ProposalRejected,
    NoPlan,
}

pub type GovernanceResult<T = ()> = Result<T, GovernanceError>;

impl GovernanceError {
    pub fn message(&self) -> &'static str {
        match self {
            GovernanceError::AccessDenied { action, .. } => match action {
                Action::UpdateWaterLevel => {
                    "Valid observer can only provide a request to update reservoir water level"
                }
                Action::Propose => "Valid mediator can only propose new water allocation scheme",
                Action::Vote => "Valid beneficiary can only vote for new water allocation scheme",
                Action::Conclude => {
                    "Valid mediator can only conclude voting for new water allocation scheme"
                }
            },
            GovernanceError::Validation(err) => err.message(),
            GovernanceError::State(err) => err.message(),
        }
    }
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::LengthMismatch => {
                "Number of beneficiaries and allocation fraction proposals do not match"
            }
            ValidationError::FractionSumInvalid => "Allocation fractions not summing upto one",
            ValidationError::InvalidVotingWindow => {
                "Voting end time needs to be greater than voting start time"
            }
            ValidationError::OutOfRange => {
                "Water level needs to be greater than 0 and less than total reservoir capacity"
            }
            ValidationError::EmptyBeneficiaries => "At least one beneficiary is required",
            ValidationError::ZeroCapacity => "Reservoir capacity must be positive",
            ValidationError::MissingAddress => "Role address must not be empty",
        }
    }
}

impl StateError {
    pub fn message(&self) -> &'static str {
        match self {
            StateError::ProposalInProgress => "There is another proposal currently in voting stage",
            StateError::NoProposal => "No allocation proposed so far. You need to wait until the mediator proposes an allocation scheme",
            StateError::OutsideVotingWindow => "Either voting has not begun yet or closed already.",
            StateError::VotingStillOpen => "There is still some time left for voting to conclude. You need to wait until the voting end time proposed in the allocation scheme.",
            StateError::ProposalRejected => "Proposal not accepted by all beneficiaries. Please retrieve the allocation proposal to check the list of disagreeing beneficiaries.",
            StateError::NoPlan => "No allocation plan concluded so far",
        }
    }
}

impl From<ValidationError> for GovernanceError {
    fn from(err: ValidationError) -> Self {
        GovernanceError::Validation(err)
    }
}

impl From<StateError> for GovernanceError {
    fn from(err: StateError) -> Self {
        GovernanceError::State(err)
    }
}
