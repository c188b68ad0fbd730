pub mod assignment;
pub mod catalog;
pub mod clock;
pub mod engine;
pub mod fatigue;
pub mod fuel;
pub mod history;
pub mod ontime;
pub mod policy;
pub mod report;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;
