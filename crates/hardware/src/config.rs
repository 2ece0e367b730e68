//! Configuration system for the LS-8 simulator.
//!
//! This module defines the configuration structures used to parameterize
//! the simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (RAM size, clock period, load address).
//! 2. **Structures:** Hierarchical config for general and system settings.
//! 3. **Loading:** JSON parsing and validation from strings or files.
//!
//! Every field is optional in JSON; missing fields take the values in [`defaults`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{Addr, DEFAULT_RAM_SIZE};
use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline machine when not explicitly
/// overridden in a JSON configuration file.
mod defaults {
    /// Size of attached RAM in bytes (256 bytes, the full 8-bit address space).
    pub const RAM_SIZE: usize = super::DEFAULT_RAM_SIZE;

    /// Largest RAM reachable through 8-bit jump targets and return addresses.
    pub const MAX_RAM_SIZE: usize = 1 << u8::BITS;

    /// Clock period in microseconds (1 ms == 1 kHz clock).
    pub const CLOCK_PERIOD_US: u64 = 1000;

    /// Address programs are loaded at and execution starts from.
    pub const LOAD_ADDRESS: u16 = 0;
}

/// Root configuration for the simulator.
///
/// # Examples
///
/// ```
/// use ls8_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_cycles": 500 },
///     "system": { "clock_period_us": 0 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, Some(500));
/// assert_eq!(config.system.clock_period_us, 0);
/// assert_eq!(config.system.ram_size, 256);
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine layout and clock parameters
    #[serde(default)]
    pub system: SystemConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Checks that every field holds a value the simulator can use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    /// RAM is capped at 256 bytes, the range of one-byte jump targets and
    /// return addresses, and the load address must lie inside it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ram_size = self.system.ram_size;
        if ram_size == 0 || ram_size > defaults::MAX_RAM_SIZE {
            return Err(ConfigError::Invalid {
                field: "system.ram_size",
                reason: format!(
                    "{ram_size} is outside 1..={} bytes",
                    defaults::MAX_RAM_SIZE
                ),
            });
        }
        if usize::from(self.system.load_address) >= ram_size {
            return Err(ConfigError::Invalid {
                field: "system.load_address",
                reason: format!(
                    "{:#06x} is beyond the end of {ram_size} bytes of RAM",
                    self.system.load_address
                ),
            });
        }
        if self.general.max_cycles == Some(0) {
            return Err(ConfigError::Invalid {
                field: "general.max_cycles",
                reason: "must be at least 1 when set".to_string(),
            });
        }
        Ok(())
    }
}

/// General simulation settings and options.
///
/// Contains run-control settings such as tracing and the cycle budget.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Emit a trace event (PC, raw bytes, disassembly) for every executed instruction
    #[serde(default)]
    pub trace_instructions: bool,

    /// Stop the run loop after this many ticks; `None` runs until halt
    #[serde(default)]
    pub max_cycles: Option<u64>,
}

/// Machine layout and clock configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SystemConfig {
    /// RAM size in bytes
    #[serde(default = "SystemConfig::default_ram_size")]
    pub ram_size: usize,

    /// Period between clock ticks in microseconds; 0 runs unthrottled
    #[serde(default = "SystemConfig::default_clock_period_us")]
    pub clock_period_us: u64,

    /// Load address for program images (also the reset PC)
    #[serde(default = "SystemConfig::default_load_address")]
    pub load_address: Addr,
}

impl SystemConfig {
    /// Returns the default RAM size in bytes.
    const fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }

    /// Returns the default clock period in microseconds.
    const fn default_clock_period_us() -> u64 {
        defaults::CLOCK_PERIOD_US
    }

    /// Returns the default program load address.
    const fn default_load_address() -> Addr {
        defaults::LOAD_ADDRESS
    }
}

impl Default for SystemConfig {
    /// Creates the stock LS-8: 256 bytes of RAM, 1 kHz clock, programs at 0.
    fn default() -> Self {
        Self {
            ram_size: defaults::RAM_SIZE,
            clock_period_us: defaults::CLOCK_PERIOD_US,
            load_address: defaults::LOAD_ADDRESS,
        }
    }
}
