//! Dataset-level configuration.

/// Coordinate system used when an operation does not name one.
pub const DEFAULT_COORDINATE_SYSTEM: &str = "global";

/// Label for the dataset in path descriptions.
pub const DEFAULT_DESCRIBE_PREFIX: &str = "<dataset>";

/// Mapping configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingConfig {
    /// Coordinate system targeted when none is given.
    pub default_coordinate_system: String,
    /// Prefix used when rendering element nodes in path descriptions.
    pub describe_prefix: String,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            default_coordinate_system: DEFAULT_COORDINATE_SYSTEM.to_string(),
            describe_prefix: DEFAULT_DESCRIBE_PREFIX.to_string(),
        }
    }
}

impl MappingConfig {
    /// Create a new mapping config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default coordinate system.
    pub fn with_default_coordinate_system(mut self, name: impl Into<String>) -> Self {
        self.default_coordinate_system = name.into();
        self
    }

    /// Set the dataset label used in path descriptions.
    pub fn with_describe_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.describe_prefix = prefix.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MappingConfig::new();
        assert_eq!(config.default_coordinate_system, "global");
        assert_eq!(config.describe_prefix, "<dataset>");
    }

    #[test]
    fn test_builder() {
        let config = MappingConfig::new()
            .with_default_coordinate_system("world")
            .with_describe_prefix("<sdata>");
        assert_eq!(config.default_coordinate_system, "world");
        assert_eq!(config.describe_prefix, "<sdata>");
    }
}
