pub mod backend;
pub mod setup;
pub mod snapshot_builders;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use backend::FakeBackend;
#[allow(unused_imports)]
pub use setup::{wait_for_view, TestSetup};
#[allow(unused_imports)]
pub use snapshot_builders::SnapshotBuilder;
