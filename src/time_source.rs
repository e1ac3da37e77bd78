multiversx_sc::imports!();

/// Every temporal check reads time through `now`, which is the block
/// timestamp of the executing transaction.
#[multiversx_sc::module]
pub trait TimeSourceModule {
    fn now(&self) -> u64 {
        self.blockchain().get_block_timestamp()
    }

    #[view(getCurrentTimestamp)]
    fn get_current_timestamp(&self) -> u64 {
        self.now()
    }
}
