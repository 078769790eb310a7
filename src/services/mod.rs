// Services module for business logic
pub mod clock;
pub mod environment_manager;
pub mod process_runner;
pub mod scaffold_engine;

pub use clock::{Clock, FixedClock, SystemClock};
pub use environment_manager::EnvironmentManager;
pub use process_runner::{OutputMode, ProcessOutput, ProcessRunner, SystemProcessRunner};
pub use scaffold_engine::ScaffoldEngine;
