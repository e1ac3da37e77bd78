multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Roles — fixed at deployment
// ============================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Role {
    Owner,
    Mediator,
    Observer,
    /// Any address listed in the current proposal's beneficiaries.
    AnyBeneficiary,
}

/// Role-gated operations, used to word access errors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    UpdateWaterLevel,
    Propose,
    Vote,
    Conclude,
}

// ============================================================
// Reservoir Reading — latest observed water level
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ReservoirReading<M: ManagedTypeApi> {
    /// Starts at 0 and grows by one per accepted update.
    pub version: u64,
    pub water_level: u64,
    pub observed_by: ManagedAddress<M>,
    pub observed_time: u64,
}

// ============================================================
// Allocation Proposal — the record under vote
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Submitted and not yet concluded. Blocks new proposals.
    Active,
    /// Turned into the current allocation plan.
    Concluded,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct AllocationProposal<M: ManagedTypeApi> {
    pub proposal_version: u64,
    pub beneficiaries: ManagedVec<M, ManagedAddress<M>>,
    /// Integer percentages, parallel to `beneficiaries`.
    pub fractions: ManagedVec<M, u32>,
    /// Parallel to `beneficiaries`; all false on submission.
    pub votes: ManagedVec<M, bool>,
    pub voting_start_time: u64,
    pub voting_end_time: u64,
    pub observed_by: ManagedAddress<M>,
    pub mediated_by: ManagedAddress<M>,
    pub accepted: bool,
    pub status: ProposalStatus,
}

impl<M: ManagedTypeApi> AllocationProposal<M> {
    pub fn is_active(&self) -> bool {
        self.status == ProposalStatus::Active
    }

    pub fn beneficiary_index(&self, address: &ManagedAddress<M>) -> Option<usize> {
        self.beneficiaries
            .iter()
            .position(|beneficiary| *beneficiary == *address)
    }
}

// ============================================================
// Allocation Plan — frozen outcome of a concluded proposal
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct AllocationPlan<M: ManagedTypeApi> {
    pub version: u64,
    pub beneficiaries: ManagedVec<M, ManagedAddress<M>>,
    pub fractions: ManagedVec<M, u32>,
    /// Voting start time of the proposal it came from.
    pub proposed_time: u64,
    pub allocation_time: u64,
    pub mediated_by: ManagedAddress<M>,
    pub observed_by: ManagedAddress<M>,
}
