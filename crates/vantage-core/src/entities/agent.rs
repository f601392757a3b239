use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A backend-described agent persona. Only used as a label for the
/// question-answering endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AgentProfile {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
}

/// Answer returned by an agent's ask endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AgentAnswer {
    pub answer: String,
}
