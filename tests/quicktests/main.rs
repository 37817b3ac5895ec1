#[macro_use]
extern crate quickcheck_macros;

mod tree;

use simplelog::{Config, LevelFilter, TestLogger};

/// Routes the tree's log output through the test harness so it shows up for failing tests.
pub(crate) fn init_logging() {
    // Every test calls this so only the first one succeeds.
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}
