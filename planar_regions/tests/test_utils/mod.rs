#![allow(dead_code)]
mod region_modifiers;
mod region_test_properties;

pub use region_modifiers::*;
pub use region_test_properties::*;

/// Route `log` output through the test harness, set `RUST_LOG` to see it.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
