//! The `task_breakdown` output schema

use serde_json::{Value, json};

use crate::llm::{JsonSchemaFormat, ResponseFormat};

/// Name the user prompt and the response format refer to
pub const SCHEMA_NAME: &str = "task_breakdown";

/// JSON schema the provider must validate its output against
///
/// An object with a non-empty `subtasks` array of `{title, guidance}` strings.
/// Both levels reject additional properties.
pub fn task_breakdown_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "subtasks": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": {"type": "string"},
                        "guidance": {"type": "string"},
                    },
                    "required": ["title", "guidance"],
                    "additionalProperties": false,
                },
                "minItems": 1,
            }
        },
        "required": ["subtasks"],
        "additionalProperties": false,
    })
}

/// Response format requesting schema-validated output
pub fn response_format() -> ResponseFormat {
    ResponseFormat::JsonSchema {
        json_schema: JsonSchemaFormat {
            name: SCHEMA_NAME.to_string(),
            schema: task_breakdown_schema(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_outer_object() {
        let schema = task_breakdown_schema();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["subtasks"]));
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn test_schema_subtask_items() {
        let schema = task_breakdown_schema();
        let subtasks = &schema["properties"]["subtasks"];
        assert_eq!(subtasks["type"], "array");
        assert_eq!(subtasks["minItems"], 1);

        let items = &subtasks["items"];
        assert_eq!(items["type"], "object");
        assert_eq!(items["required"], json!(["title", "guidance"]));
        assert_eq!(items["additionalProperties"], false);
        assert_eq!(items["properties"]["title"]["type"], "string");
        assert_eq!(items["properties"]["guidance"]["type"], "string");
    }

    #[test]
    fn test_response_format_wire_shape() {
        let value = serde_json::to_value(response_format()).unwrap();
        assert_eq!(value["type"], "json_schema");
        assert_eq!(value["json_schema"]["name"], "task_breakdown");
        assert_eq!(value["json_schema"]["schema"], task_breakdown_schema());
    }
}
