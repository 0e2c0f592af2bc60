pub mod aggregator;
pub mod result;
pub mod vote;
