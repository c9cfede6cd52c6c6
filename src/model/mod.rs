pub mod dataset;
pub mod stats;
