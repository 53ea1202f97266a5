mod fixtures;
mod test_sim;

// Re-export
pub use fixtures::*;
pub use test_sim::*;
