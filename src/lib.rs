#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod plan;
pub mod reservoir;
pub mod roles;
pub mod storage;
pub mod time_source;
pub mod types;
pub mod validation;
pub mod voting;

// ============================================================
// Contract
//
// A mediator proposes how reservoir water is split between a
// fixed set of beneficiaries, the beneficiaries must all accept
// within a voting window, and only then does the proposal
// become the published allocation plan. An observer reports
// the reservoir level independently.
// ============================================================

#[multiversx_sc::contract]
pub trait FractionalWaterAllocation:
    storage::StorageModule
    + roles::RoleRegistryModule
    + time_source::TimeSourceModule
    + events::EventLogModule
    + reservoir::ReservoirModule
    + plan::AllocationPlanModule
    + voting::VotingModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        owner: ManagedAddress,
        beneficiaries: ManagedVec<ManagedAddress>,
        mediator: ManagedAddress,
        observer: ManagedAddress,
        capacity_unit: ManagedBuffer,
        capacity: u64,
    ) {
        self.init_roles(
            owner,
            beneficiaries,
            mediator,
            observer,
            capacity_unit,
            capacity,
        );
        self.init_reservoir();
    }

    #[upgrade]
    fn upgrade(&self) {}
}
