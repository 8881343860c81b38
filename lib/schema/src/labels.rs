//! Output label taxonomy.

use serde::{Deserialize, Serialize};

/// Prefix for output vector labels.
pub const OUTPUT_LABEL_PREFIX: &str = "output_archetype_";

/// The configured archetype taxonomy, in configuration order.
///
/// Defines the output vector's width and position-to-name mapping; constant
/// for a pipeline run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabelSchema {
    archetypes: Vec<String>,
}

impl LabelSchema {
    #[must_use]
    pub fn new(archetypes: Vec<String>) -> Self {
        Self { archetypes }
    }

    /// Parse the comma-separated `fixed_data.archetypes` configuration value.
    /// Entries are trimmed; empty entries are dropped. Order is preserved.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let archetypes = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        Self { archetypes }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn archetypes(&self) -> &[String] {
        &self.archetypes
    }

    /// Output vector labels in schema order.
    pub fn output_labels(&self) -> impl Iterator<Item = String> + '_ {
        self.archetypes
            .iter()
            .map(|name| format!("{OUTPUT_LABEL_PREFIX}{name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_order() {
        let schema = LabelSchema::parse("Aggro,Control,Midrange");
        assert_eq!(schema.archetypes(), ["Aggro", "Control", "Midrange"]);
        assert_eq!(schema.len(), 3);
    }

    #[test]
    fn test_parse_trims_and_drops_empties() {
        let schema = LabelSchema::parse(" Aggro , ,Control,");
        assert_eq!(schema.archetypes(), ["Aggro", "Control"]);
    }

    #[test]
    fn test_empty_config_gives_empty_schema() {
        assert!(LabelSchema::parse("").is_empty());
        assert!(LabelSchema::parse(" , ").is_empty());
    }

    #[test]
    fn test_output_labels_prefixed() {
        let schema = LabelSchema::parse("Aggro,Control");
        let labels: Vec<String> = schema.output_labels().collect();
        assert_eq!(labels, ["output_archetype_Aggro", "output_archetype_Control"]);
    }
}
