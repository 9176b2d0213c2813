use ahash::AHashMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Status value of a processor that is currently scheduled.
pub const STATUS_RUNNING: &str = "running";
/// Status value of a processor that is not scheduled.
pub const STATUS_STOPPED: &str = "stopped";

/// The complete pipeline document: identifying metadata plus every processor and connection.
///
/// Missing or `null` fields deserialize to empty values and unknown fields are ignored, so
/// any well-formed JSON object yields a `Flow`. Use [`crate::validation::validate_flow`]
/// to enforce the required identifier and name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Flow {
    #[serde(deserialize_with = "null_as_default")]
    pub flow_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub flow_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub processors: Vec<Processor>,
    #[serde(deserialize_with = "null_as_default")]
    pub connections: Vec<Connection>,
}

/// A named unit of work in the pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Processor {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub processor_type: String,
    /// Configuration values. Iteration order is unspecified.
    #[serde(deserialize_with = "null_as_default")]
    pub properties: AHashMap<String, String>,
    /// Conventionally `"running"` or `"stopped"`, but any value is accepted.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
}

/// A directed edge between two processors, labelled with the relationship it carries.
///
/// `source` and `destination` are not checked against the flow's processor ids.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Connection {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub destination: String,
    #[serde(deserialize_with = "null_as_default")]
    pub relationship: String,
}

impl Flow {
    /// Deserializes a flow from an in-memory JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Deserializes a flow from raw bytes. Input that is not UTF-8 is a JSON error.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Serializes the flow back into the pretty-printed document format.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Processor {
    /// True only for the exact, case-sensitive status `"running"`.
    pub fn is_running(&self) -> bool {
        self.status == STATUS_RUNNING
    }

    /// True only for the exact, case-sensitive status `"stopped"`.
    pub fn is_stopped(&self) -> bool {
        self.status == STATUS_STOPPED
    }
}

/// Decodes an explicit `null` as the field's empty value, the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
