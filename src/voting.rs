multiversx_sc::imports!();

use crate::errors::{GovernanceResult, StateError};
use crate::types::{Action, AllocationPlan, AllocationProposal, ProposalStatus, Role};
use crate::{events, plan, roles, storage, time_source, validation};

// ============================================================
// Voting Engine
//
// Empty ──propose──▶ Active ──conclude──▶ Empty (+ new plan)
//
// Only one proposal can be Active. A proposal that misses
// unanimous acceptance cannot be concluded and stays Active;
// there is no endpoint to abandon it.
// ============================================================

#[multiversx_sc::module]
pub trait VotingModule:
    storage::StorageModule
    + roles::RoleRegistryModule
    + time_source::TimeSourceModule
    + events::EventLogModule
    + plan::AllocationPlanModule
{
    // ========================================================
    // ENDPOINT: proposeAllocation
    // Mediator submits fractions for a beneficiary list and
    // opens a voting window.
    // ========================================================

    #[endpoint(proposeAllocation)]
    fn propose_allocation(
        &self,
        beneficiaries: ManagedVec<ManagedAddress>,
        fractions: ManagedVec<u32>,
        voting_start_time: u64,
        voting_end_time: u64,
        observed_by: ManagedAddress,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        self.ensure(self.require_role(&caller, Role::Mediator, Action::Propose));
        self.ensure(self.require_no_active_proposal());
        // The beneficiary list is taken as submitted; it is not matched
        // against the registry.
        self.ensure(validation::check_proposal_shape(
            beneficiaries.len(),
            fractions.iter(),
            voting_start_time,
            voting_end_time,
        ));

        let proposal_version = validation::next_proposal_version(self.last_plan_version());

        let mut votes = ManagedVec::new();
        for _ in 0..beneficiaries.len() {
            votes.push(false);
        }

        let proposal = AllocationProposal {
            proposal_version,
            beneficiaries,
            fractions,
            votes,
            voting_start_time,
            voting_end_time,
            observed_by,
            mediated_by: caller.clone(),
            accepted: false,
            status: ProposalStatus::Active,
        };
        self.allocation_proposal().set(&proposal);

        self.new_allocation_proposed_event(proposal_version, &caller, &proposal);

        proposal_version
    }

    // ========================================================
    // ENDPOINT: voteForAllocationProposal
    // A listed beneficiary accepts the active proposal.
    // Voting again is a no-op that still logs the vote.
    // ========================================================

    #[endpoint(voteForAllocationProposal)]
    fn vote_for_allocation_proposal(&self) -> bool {
        let caller = self.blockchain().get_caller();
        self.ensure(self.require_active_proposal());
        self.ensure(self.require_role(&caller, Role::AnyBeneficiary, Action::Vote));

        let mut proposal = self.allocation_proposal().get();
        self.ensure(validation::check_voting_window(
            self.now(),
            proposal.voting_start_time,
            proposal.voting_end_time,
        ));

        // Every slot held by the caller is marked, not only the first
        // index, so an address listed twice can still reach unanimity.
        let mut votes = ManagedVec::new();
        for (beneficiary, voted) in proposal.beneficiaries.iter().zip(proposal.votes.iter()) {
            votes.push(voted || *beneficiary == caller);
        }
        proposal.accepted = votes.iter().all(|voted| voted);
        proposal.votes = votes;
        self.allocation_proposal().set(&proposal);

        self.vote_recorded_event(proposal.proposal_version, &caller, proposal.accepted);

        proposal.accepted
    }

    // ========================================================
    // ENDPOINT: concludeVoting
    // After the window closes, the mediator turns a unanimously
    // accepted proposal into the current allocation plan.
    // ========================================================

    #[endpoint(concludeVoting)]
    fn conclude_voting(&self) -> AllocationPlan<Self::Api> {
        let caller = self.blockchain().get_caller();
        self.ensure(self.require_active_proposal());
        self.ensure(self.require_role(&caller, Role::Mediator, Action::Conclude));

        let mut proposal = self.allocation_proposal().get();
        let now = self.now();
        self.ensure(validation::check_concludable(
            now,
            proposal.voting_end_time,
            proposal.accepted,
        ));

        let plan = self.store_plan(&proposal, now, caller);
        proposal.status = ProposalStatus::Concluded;
        self.allocation_proposal().set(&proposal);

        self.voting_concluded_event(plan.version, &plan.mediated_by, &plan);

        plan
    }

    // ========================================================
    // INTERNAL: lifecycle guards
    // ========================================================

    fn require_active_proposal(&self) -> GovernanceResult {
        if self.has_active_proposal() {
            Ok(())
        } else {
            Err(StateError::NoProposal.into())
        }
    }

    fn require_no_active_proposal(&self) -> GovernanceResult {
        if self.has_active_proposal() {
            Err(StateError::ProposalInProgress.into())
        } else {
            Ok(())
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(hasActiveProposal)]
    fn has_active_proposal(&self) -> bool {
        !self.allocation_proposal().is_empty() && self.allocation_proposal().get().is_active()
    }

    /// Latest proposal, including a concluded one.
    #[view(getAllocationProposal)]
    fn get_allocation_proposal(&self) -> AllocationProposal<Self::Api> {
        if self.allocation_proposal().is_empty() {
            sc_panic!(StateError::NoProposal.message());
        }
        self.allocation_proposal().get()
    }
}
