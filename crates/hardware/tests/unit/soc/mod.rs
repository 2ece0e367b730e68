/// Output sinks.
pub mod devices;

/// RAM.
pub mod memory;
