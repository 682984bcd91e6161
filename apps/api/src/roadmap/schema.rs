//! Output schema declared to Gemini so the model can only emit a `Roadmap`.
//!
//! Uses the OpenAPI subset the API understands (upper-case type names).
//! Keep in sync with `roadmap::models`.

use serde_json::{json, Value};

pub fn roadmap_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "heroOrigin": {
                "type": "STRING",
                "description": "A punchy summary of where the user is starting from."
            },
            "missionObjective": {
                "type": "STRING",
                "description": "A description of what it takes to be the Target Role."
            },
            "theVillain": {
                "type": "STRING",
                "description": "The main gaps, weaknesses, or obstacles to overcome."
            },
            "localContextTip": {
                "type": "STRING",
                "description": "Specific advice based on their city/region."
            },
            "superWeaponProject": {
                "type": "OBJECT",
                "properties": {
                    "title": { "type": "STRING" },
                    "description": { "type": "STRING" },
                    "techStack": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "impact": { "type": "STRING", "description": "Why this project matters." }
                },
                "required": ["title", "description", "techStack", "impact"]
            },
            "phases": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {
                            "type": "STRING",
                            "description": "Comic book style phase title (e.g. 'The Awakening')"
                        },
                        "duration": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "actionItems": { "type": "ARRAY", "items": { "type": "STRING" } },
                        "skillFocus": { "type": "ARRAY", "items": { "type": "STRING" } }
                    },
                    "required": ["title", "duration", "description", "actionItems", "skillFocus"]
                }
            }
        },
        "required": [
            "heroOrigin",
            "missionObjective",
            "theVillain",
            "localContextTip",
            "superWeaponProject",
            "phases"
        ]
    })
}
