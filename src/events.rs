multiversx_sc::imports!();

use crate::types::{AllocationPlan, AllocationProposal};

// Emitted only after the storage writes of a transition succeed.
#[multiversx_sc::module]
pub trait EventLogModule {
    #[event("reservoirLevelChanged")]
    fn reservoir_level_changed_event(
        &self,
        #[indexed] version: u64,
        #[indexed] water_level: u64,
        #[indexed] observed_by: &ManagedAddress,
        observed_time: u64,
    );

    #[event("newAllocationProposed")]
    fn new_allocation_proposed_event(
        &self,
        #[indexed] proposal_version: u64,
        #[indexed] mediated_by: &ManagedAddress,
        proposal: &AllocationProposal<Self::Api>,
    );

    #[event("voteRecorded")]
    fn vote_recorded_event(
        &self,
        #[indexed] proposal_version: u64,
        #[indexed] voter: &ManagedAddress,
        accepted: bool,
    );

    #[event("votingConcluded")]
    fn voting_concluded_event(
        &self,
        #[indexed] version: u64,
        #[indexed] mediated_by: &ManagedAddress,
        plan: &AllocationPlan<Self::Api>,
    );
}
