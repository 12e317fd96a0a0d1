//! Configuration for agrimarket
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a storage instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Startup Configuration
    // -------------------------------------------------------------------------
    /// Insert the demonstration users and listings when the store opens
    pub seed_sample_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Enable or disable sample data seeding
    pub fn seed_sample_data(mut self, enabled: bool) -> Self {
        self.config.seed_sample_data = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
