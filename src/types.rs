//! Resource types for the LiveChat agents/greetings surface.
//!
//! The shapes of these resources are owned by the remote service, not by
//! this client. Each struct types the documented minimum and carries every
//! other field through untouched via a flattened map, so payloads survive a
//! fetch/modify/send cycle even when the platform adds fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A support agent on the LiveChat account.
///
/// Agents are entirely service-defined, so the type is a transparent JSON
/// object with typed accessors for the fields callers commonly read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Agent(pub Map<String, Value>);

impl Agent {
    /// The agent's display name, when present.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// The agent's login (email address), when present.
    pub fn login(&self) -> Option<&str> {
        self.0.get("login").and_then(Value::as_str)
    }

    /// Any other field of the agent object, as raw JSON.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

/// A configurable automated message with trigger rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    /// Service-assigned numeric id.
    pub id: i64,
    /// Display name of the greeting.
    pub name: String,
    /// Ordered trigger rules; evaluation order is service-defined.
    #[serde(default)]
    pub rules: Vec<GreetingRule>,
    /// Every other field the service sent, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single trigger rule attached to a greeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingRule {
    /// Rule kind, e.g. `custom_variable` or `url`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Variable name, for `custom_variable` rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_name: Option<String>,
    /// Variable value to match against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_value: Option<String>,
    /// Match operator, e.g. `contains` or `equals`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    /// Rule fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GreetingRule {
    /// Creates a `custom_variable` rule.
    ///
    /// ## Examples
    ///
    /// ```
    /// use livechat_client::GreetingRule;
    ///
    /// let rule = GreetingRule::custom_variable("test_var", "300", "contains");
    /// assert_eq!(rule.kind, "custom_variable");
    /// assert_eq!(rule.operator.as_deref(), Some("contains"));
    /// ```
    pub fn custom_variable(
        name: impl Into<String>,
        value: impl Into<String>,
        operator: impl Into<String>,
    ) -> Self {
        Self {
            kind: "custom_variable".into(),
            variable_name: Some(name.into()),
            variable_value: Some(value.into()),
            operator: Some(operator.into()),
            extra: Map::new(),
        }
    }
}

/// Payload for creating a greeting.
///
/// Creation payloads have no id; the service assigns one and returns the
/// full [`Greeting`]. Any `Serialize` value is accepted by
/// [`create_greeting`](crate::LivechatClient::create_greeting); this type is
/// the typed convenience for the common case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGreeting {
    /// Display name of the greeting.
    pub name: String,
    /// Trigger rules to install with it.
    pub rules: Vec<GreetingRule>,
}

impl NewGreeting {
    /// Creates a new greeting payload.
    pub fn new(name: impl Into<String>, rules: Vec<GreetingRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }
}

/// Acknowledgement body returned by destructive operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Whether the service acknowledged the operation.
    pub ok: bool,
    /// Every other field the service sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_agent_is_transparent() {
        let agent: Agent = serde_json::from_value(json!({
            "name": "Agent Smith",
            "login": "smith@example.com",
            "permission": "owner"
        }))
        .expect("deserialize");
        assert_eq!(agent.name(), Some("Agent Smith"));
        assert_eq!(agent.login(), Some("smith@example.com"));
        assert_eq!(agent.get("permission"), Some(&json!("owner")));
        assert_eq!(agent.get("missing"), None);
    }

    #[test]
    fn test_greeting_preserves_unknown_fields() {
        let payload = json!({
            "id": 42,
            "name": "Test greeting",
            "rules": [
                {"type": "custom_variable", "variable_name": "test_var",
                 "variable_value": "300", "operator": "contains"}
            ],
            "active": true,
            "group": 0
        });
        let greeting: Greeting = serde_json::from_value(payload.clone()).expect("deserialize");
        assert_eq!(greeting.id, 42);
        assert_eq!(greeting.name, "Test greeting");
        assert_eq!(greeting.rules.len(), 1);
        assert_eq!(greeting.extra.get("active"), Some(&json!(true)));

        // Round back out without losing anything.
        assert_eq!(serde_json::to_value(&greeting).expect("serialize"), payload);
    }

    #[test]
    fn test_greeting_rules_default_when_absent() {
        let greeting: Greeting =
            serde_json::from_value(json!({"id": 1, "name": "bare"})).expect("deserialize");
        assert!(greeting.rules.is_empty());
    }

    #[test]
    fn test_rule_type_rename() {
        let rule = GreetingRule::custom_variable("test_var", "300", "contains");
        let value = serde_json::to_value(&rule).expect("serialize");
        assert_eq!(value.get("type"), Some(&json!("custom_variable")));
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_rule_skips_absent_fields() {
        let rule: GreetingRule =
            serde_json::from_value(json!({"type": "url"})).expect("deserialize");
        let value = serde_json::to_value(&rule).expect("serialize");
        assert_eq!(value, json!({"type": "url"}));
    }

    #[test]
    fn test_status_response_extra_fields() {
        let status: StatusResponse =
            serde_json::from_value(json!({"ok": true, "deleted_id": 42})).expect("deserialize");
        assert!(status.ok);
        assert_eq!(status.extra.get("deleted_id"), Some(&json!(42)));
    }
}
