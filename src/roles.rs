multiversx_sc::imports!();

use crate::errors::{GovernanceError, GovernanceResult};
use crate::storage;
use crate::types::{Action, Role};
use crate::validation;

// ============================================================
// Role Registry — owner, beneficiaries, mediator and observer
// are fixed at deployment and gate every mutating endpoint.
// ============================================================

#[multiversx_sc::module]
pub trait RoleRegistryModule: storage::StorageModule {
    fn init_roles(
        &self,
        owner: ManagedAddress,
        beneficiaries: ManagedVec<ManagedAddress>,
        mediator: ManagedAddress,
        observer: ManagedAddress,
        capacity_unit: ManagedBuffer,
        capacity: u64,
    ) {
        let any_address_missing = owner.is_zero()
            || mediator.is_zero()
            || observer.is_zero()
            || beneficiaries.iter().any(|beneficiary| beneficiary.is_zero());
        self.ensure(validation::check_role_setup(
            beneficiaries.len(),
            capacity,
            any_address_missing,
        ));

        // Duplicate addresses across roles are accepted as given.
        self.owner().set(&owner);
        self.beneficiaries().set(&beneficiaries);
        self.mediator().set(&mediator);
        self.observer().set(&observer);
        self.capacity_unit().set(&capacity_unit);
        self.capacity().set(capacity);
    }

    /// `AnyBeneficiary` is checked against the active proposal's list,
    /// not the registry list.
    fn require_role(
        &self,
        caller: &ManagedAddress,
        role: Role,
        action: Action,
    ) -> GovernanceResult {
        let granted = match role {
            Role::Owner => self.owner().get() == *caller,
            Role::Mediator => self.mediator().get() == *caller,
            Role::Observer => self.observer().get() == *caller,
            Role::AnyBeneficiary => {
                if self.allocation_proposal().is_empty() {
                    false
                } else {
                    let proposal = self.allocation_proposal().get();
                    proposal.is_active() && proposal.beneficiary_index(caller).is_some()
                }
            }
        };

        if granted {
            Ok(())
        } else {
            Err(GovernanceError::AccessDenied { role, action })
        }
    }

    /// Reverts the transaction with the error's message.
    fn ensure(&self, check: GovernanceResult) {
        if let Err(err) = check {
            sc_panic!(err.message());
        }
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }

    #[view(getBeneficiaries)]
    fn get_beneficiaries(&self) -> ManagedVec<ManagedAddress> {
        self.beneficiaries().get()
    }

    #[view(getMediator)]
    fn get_mediator(&self) -> ManagedAddress {
        self.mediator().get()
    }

    #[view(getObserver)]
    fn get_observer(&self) -> ManagedAddress {
        self.observer().get()
    }

    #[view(getReservoirCapacity)]
    fn get_reservoir_capacity(&self) -> MultiValue2<ManagedBuffer, u64> {
        (self.capacity_unit().get(), self.capacity().get()).into()
    }
}
