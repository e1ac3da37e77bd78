fn main() {
    multiversx_sc_meta_lib::cli_main::<fractional_water_allocation::AbiProvider>();
}
