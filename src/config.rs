//! Configuration of the function registry

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{Result, SparqlExprError};

/// Selects which function families a registry installs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// SPARQL string built-ins under their keyword names (`CONCAT`, `SUBSTR`, ...)
    pub sparql_builtins: bool,
    /// XPath `fn:` IRIs for the same built-ins
    pub xpath_aliases: bool,
    /// Unary numeric extension functions
    pub math_extensions: bool,
    /// Resolve keyword functors regardless of case (`ucase` finds `UCASE`)
    pub case_insensitive_functors: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            sparql_builtins: true,
            xpath_aliases: true,
            math_extensions: true,
            case_insensitive_functors: true,
        }
    }
}

impl RegistryConfig {
    /// Create a builder starting from the defaults
    pub fn builder() -> RegistryConfigBuilder {
        RegistryConfigBuilder::new()
    }

    /// Load from a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| SparqlExprError::configuration(err.to_string()))?;
        debug!("Loaded registry configuration: {config:?}");
        Ok(config)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| SparqlExprError::configuration(err.to_string()))
    }
}

/// Builder for registry configuration with fluent API
#[derive(Debug, Clone, Default)]
pub struct RegistryConfigBuilder {
    config: RegistryConfig,
}

impl RegistryConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sparql_builtins(mut self, enabled: bool) -> Self {
        self.config.sparql_builtins = enabled;
        self
    }

    pub fn with_xpath_aliases(mut self, enabled: bool) -> Self {
        self.config.xpath_aliases = enabled;
        self
    }

    pub fn with_math_extensions(mut self, enabled: bool) -> Self {
        self.config.math_extensions = enabled;
        self
    }

    pub fn with_case_insensitive_functors(mut self, enabled: bool) -> Self {
        self.config.case_insensitive_functors = enabled;
        self
    }

    pub fn build(self) -> RegistryConfig {
        self.config
    }
}
