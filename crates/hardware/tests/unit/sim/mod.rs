

/// End-to-end simulator runs.
pub mod simulator;
