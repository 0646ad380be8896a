use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login reply; the username is what gets persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub username: String,
}

/// Body of `POST /api/orders`. Optional fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub username: String,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostRequest {
    pub username: String,
    pub content: String,
    /// Data URL of the attached image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Error reply of the API. Validation failures carry a list in `detail`,
/// which is not a user-facing message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_omits_empty_optionals() {
        let order = OrderRequest {
            username: "alice".into(),
            title: "Fix sink".into(),
            category: "plumbing".into(),
            description: "Leaks".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&order).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(!obj.contains_key("budget"));
        assert!(!obj.contains_key("deadline"));
        assert!(!obj.contains_key("address"));
    }

    #[test]
    fn test_order_includes_budget_as_number() {
        let order = OrderRequest {
            budget: Some(1500.5),
            deadline: Some("2025-06-01".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["budget"], serde_json::json!(1500.5));
        assert_eq!(json["deadline"], "2025-06-01");
    }

    #[test]
    fn test_error_body_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"User already exists"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("User already exists"));

        let body: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#)
                .unwrap();
        assert!(body.message().is_none());

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message().is_none());
    }
}
