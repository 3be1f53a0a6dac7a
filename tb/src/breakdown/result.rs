//! Subtasks and the list payload rendered by the host

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::llm::LlmError;

/// Fixed payload type understood by the host
pub const RESULT_TYPE: &str = "list";

/// Fixed heading of the rendered list
pub const RESULT_TITLE: &str = "Suggested subtasks";

/// Title shown for a subtask the model left untitled
pub const DEFAULT_SUBTASK_TITLE: &str = "Subtask";

/// One decomposition unit as returned by the model
///
/// Either field may be missing; a field that is present must be a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubtaskItem {
    #[serde(default, deserialize_with = "present_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "present_string")]
    pub guidance: Option<String>,
}

impl SubtaskItem {
    /// Render as a host list entry, substituting defaults
    pub fn to_list_item(&self) -> ListItem {
        ListItem {
            title: self.title.clone().unwrap_or_else(|| DEFAULT_SUBTASK_TITLE.to_string()),
            body: self.guidance.clone().unwrap_or_default(),
        }
    }
}

// Only reached for keys that exist, so `null` is rejected rather than defaulted
fn present_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    String::deserialize(deserializer).map(Some)
}

/// Top-level object the model returns
#[derive(Debug, Deserialize)]
struct BreakdownPayload {
    #[serde(default)]
    subtasks: Vec<Value>,
}

/// A `{title, body}` entry of the rendered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub title: String,
    pub body: String,
}

/// The render payload returned to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownResult {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub items: Vec<ListItem>,
    /// Subtasks exactly as the model returned them
    pub raw: Vec<Value>,
}

impl BreakdownResult {
    /// Parse the model's JSON text into the list payload
    ///
    /// A missing or empty `subtasks` array yields an empty list; the schema's
    /// `minItems` is left to the provider.
    pub fn from_payload(text: &str) -> Result<Self, LlmError> {
        debug!(text_len = text.len(), "BreakdownResult::from_payload: called");
        let payload: BreakdownPayload = serde_json::from_str(text)?;
        if payload.subtasks.is_empty() {
            debug!("BreakdownResult::from_payload: no subtasks");
        }

        let items = payload
            .subtasks
            .iter()
            .map(|entry| Ok(SubtaskItem::deserialize(entry)?.to_list_item()))
            .collect::<Result<Vec<_>, serde_json::Error>>()?;

        debug!(item_count = items.len(), "BreakdownResult::from_payload: shaped items");
        Ok(Self {
            kind: RESULT_TYPE.to_string(),
            title: RESULT_TITLE.to_string(),
            items,
            raw: payload.subtasks,
        })
    }
}
