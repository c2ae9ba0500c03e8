//! Cassette data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded call on a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the cassette, assigned by the recorder.
    pub seq: u64,
    /// Port name (see [`super::ports`]).
    pub port: String,
    /// Method invoked on the port.
    pub method: String,
    /// Arguments passed to the method.
    pub input: serde_json::Value,
    /// Value returned by the method.
    pub output: serde_json::Value,
}

/// An ordered recording of interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name.
    pub name: String,
    /// When recording finished.
    pub recorded_at: DateTime<Utc>,
    /// Interactions in call order.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads and parses a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid cassette.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn loads_yaml_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("llm.cassette.yaml");
        std::fs::write(
            &path,
            r####"name: hand-written
recorded_at: 2025-03-15T14:30:00Z
interactions:
  - seq: 0
    port: llm
    method: complete
    input: { model: gemini-1.5-flash }
    output:
      ok: { text: "### Notes", prompt_tokens: 10, completion_tokens: 3 }
"####,
        )
        .unwrap();

        let cassette = Cassette::load(&path).unwrap();
        assert_eq!(cassette.name, "hand-written");
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].output["ok"]["text"], json!("### Notes"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Cassette::load(std::path::Path::new("/nonexistent/x.cassette.yaml")).unwrap_err();
        assert!(err.contains("/nonexistent/x.cassette.yaml"));
    }
}
