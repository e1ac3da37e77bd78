multiversx_sc::imports!();

use crate::types::{AllocationPlan, AllocationProposal, ReservoirReading};

/// The whole contract state. Only the guarded endpoints write to it.
#[multiversx_sc::module]
pub trait StorageModule {
    // ── Roles (written once in init) ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("beneficiaries")]
    fn beneficiaries(&self) -> SingleValueMapper<ManagedVec<ManagedAddress>>;

    #[storage_mapper("mediator")]
    fn mediator(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("observer")]
    fn observer(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("capacityUnit")]
    fn capacity_unit(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("capacity")]
    fn capacity(&self) -> SingleValueMapper<u64>;

    // ── Reservoir ──

    #[storage_mapper("reservoirReading")]
    fn reservoir_reading(&self) -> SingleValueMapper<ReservoirReading<Self::Api>>;

    // ── Allocation ──

    /// Latest submitted proposal, kept after it concludes.
    #[storage_mapper("allocationProposal")]
    fn allocation_proposal(&self) -> SingleValueMapper<AllocationProposal<Self::Api>>;

    #[storage_mapper("allocationPlan")]
    fn allocation_plan(&self) -> SingleValueMapper<AllocationPlan<Self::Api>>;
}
