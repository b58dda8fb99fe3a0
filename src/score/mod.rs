pub use aggregator::aggregate;
pub use models::ScoreRecord;

mod aggregator;
mod models;
