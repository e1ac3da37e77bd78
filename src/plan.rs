multiversx_sc::imports!();

use crate::errors::StateError;
use crate::storage;
use crate::types::{AllocationPlan, AllocationProposal};

#[multiversx_sc::module]
pub trait AllocationPlanModule: storage::StorageModule {
    /// Freezes a concluded proposal into the current plan. The previous plan
    /// is overwritten, not archived.
    fn store_plan(
        &self,
        proposal: &AllocationProposal<Self::Api>,
        allocation_time: u64,
        mediated_by: ManagedAddress,
    ) -> AllocationPlan<Self::Api> {
        let plan = AllocationPlan {
            version: proposal.proposal_version,
            beneficiaries: proposal.beneficiaries.clone(),
            fractions: proposal.fractions.clone(),
            proposed_time: proposal.voting_start_time,
            allocation_time,
            mediated_by,
            observed_by: proposal.observed_by.clone(),
        };
        self.allocation_plan().set(&plan);
        plan
    }

    fn last_plan_version(&self) -> Option<u64> {
        if self.allocation_plan().is_empty() {
            None
        } else {
            Some(self.allocation_plan().get().version)
        }
    }

    #[view(getAllocationPlan)]
    fn get_allocation_plan(&self) -> AllocationPlan<Self::Api> {
        if self.allocation_plan().is_empty() {
            sc_panic!(StateError::NoPlan.message());
        }
        self.allocation_plan().get()
    }
}
