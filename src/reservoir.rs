multiversx_sc::imports!();

use crate::types::{Action, ReservoirReading, Role};
use crate::{events, roles, storage, time_source, validation};

#[multiversx_sc::module]
pub trait ReservoirModule:
    storage::StorageModule
    + roles::RoleRegistryModule
    + time_source::TimeSourceModule
    + events::EventLogModule
{
    /// Level 0 at version 0 is only reachable here; updates require a
    /// strictly positive level.
    fn init_reservoir(&self) {
        let reading = ReservoirReading {
            version: 0,
            water_level: 0,
            observed_by: self.observer().get(),
            observed_time: self.now(),
        };
        self.reservoir_reading().set(&reading);
    }

    // ========================================================
    // ENDPOINT: updateWaterLevel
    // Observer reports a new level in (0, capacity).
    // ========================================================

    #[endpoint(updateWaterLevel)]
    fn update_water_level(&self, water_level: u64) -> ReservoirReading<Self::Api> {
        let caller = self.blockchain().get_caller();
        self.ensure(self.require_role(&caller, Role::Observer, Action::UpdateWaterLevel));
        self.ensure(validation::check_water_level(
            water_level,
            self.capacity().get(),
        ));

        let now = self.now();
        let previous = self.reservoir_reading().get();
        let reading = ReservoirReading {
            version: previous.version + 1,
            water_level,
            observed_by: caller,
            observed_time: now,
        };
        self.reservoir_reading().set(&reading);

        self.reservoir_level_changed_event(
            reading.version,
            reading.water_level,
            &reading.observed_by,
            reading.observed_time,
        );

        reading
    }

    #[view(getReservoirReading)]
    fn get_reservoir_reading(&self) -> ReservoirReading<Self::Api> {
        self.reservoir_reading().get()
    }
}
