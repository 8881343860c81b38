//! Pipeline configuration surface.
//!
//! Consumed, not owned: the config document also drives collaborators this
//! crate never sees. Only `host_parameters.number_of_cpu_cores` and
//! `fixed_data.archetypes` matter here, and both degrade gracefully - a bad
//! worker count falls back to serial, a missing taxonomy to a zero-width
//! output vector. Only an unreadable config file is fatal.

use cardvec_core::{Error, Result};
use cardvec_schema::LabelSchema;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Worker pool size. Always at least 1.
    pub worker_count: usize,
    /// The configured archetype taxonomy.
    pub labels: LabelSchema,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(1, LabelSchema::default())
    }
}

impl PipelineConfig {
    #[must_use]
    pub fn new(worker_count: usize, labels: LabelSchema) -> Self {
        Self {
            worker_count: worker_count.max(1),
            labels,
        }
    }

    /// Load from a JSON config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|err| {
            Error::InvalidConfig(format!("cannot read config {}: {err}", path.display()))
        })?;
        let doc: Value = serde_json::from_str(&raw).map_err(|err| {
            Error::InvalidConfig(format!("config {} is not valid JSON: {err}", path.display()))
        })?;
        Ok(Self::from_value(&doc))
    }

    /// Resolve the config from an already-parsed document. Never fails;
    /// invalid values degrade with a warning.
    #[must_use]
    pub fn from_value(doc: &Value) -> Self {
        let worker_count = resolve_worker_count(doc);
        let labels = resolve_labels(doc);
        Self::new(worker_count, labels)
    }
}

fn resolve_worker_count(doc: &Value) -> usize {
    let Some(host) = doc.get("host_parameters") else {
        warn!("no host_parameters in the config, running with 1 worker");
        return 1;
    };
    let Some(cores) = host.get("number_of_cpu_cores") else {
        warn!("no number_of_cpu_cores in host_parameters, running with 1 worker");
        return 1;
    };

    let parsed = match cores {
        Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<usize>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n >= 1 => {
            debug!(workers = n, "using configured worker count");
            n
        }
        _ => {
            warn!(value = %cores, "number_of_cpu_cores is not a positive integer, running with 1 worker");
            1
        }
    }
}

fn resolve_labels(doc: &Value) -> LabelSchema {
    match doc
        .get("fixed_data")
        .and_then(|fixed| fixed.get("archetypes"))
        .and_then(Value::as_str)
    {
        Some(raw) => {
            let schema = LabelSchema::parse(raw);
            if schema.is_empty() {
                warn!("fixed_data.archetypes is empty, output vectors will have zero width");
            }
            schema
        }
        None => {
            warn!("no fixed_data.archetypes in the config, output vectors will have zero width");
            LabelSchema::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_full_config() {
        let config = PipelineConfig::from_value(&json!({
            "host_parameters": {"number_of_cpu_cores": 8},
            "fixed_data": {"archetypes": "Aggro,Control,Midrange"}
        }));
        assert_eq!(config.worker_count, 8);
        assert_eq!(config.labels.archetypes(), ["Aggro", "Control", "Midrange"]);
    }

    #[test]
    fn test_worker_count_accepts_numeric_string() {
        let config = PipelineConfig::from_value(&json!({
            "host_parameters": {"number_of_cpu_cores": "4"},
            "fixed_data": {"archetypes": "Aggro"}
        }));
        assert_eq!(config.worker_count, 4);
    }

    #[test]
    fn test_worker_count_falls_back_to_serial() {
        for cores in [json!("twelve"), json!(0), json!(-3), json!(null), json!([4])] {
            let config = PipelineConfig::from_value(&json!({
                "host_parameters": {"number_of_cpu_cores": cores}
            }));
            assert_eq!(config.worker_count, 1);
        }
    }

    #[test]
    fn test_missing_sections_degrade() {
        let config = PipelineConfig::from_value(&json!({}));
        assert_eq!(config.worker_count, 1);
        assert!(config.labels.is_empty());
    }

    #[test]
    fn test_unreadable_file_is_fatal() {
        let err = PipelineConfig::from_file(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_non_json_file_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[host_parameters]\nnumber_of_cpu_cores = 4\n")
            .unwrap();
        let err = PipelineConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
