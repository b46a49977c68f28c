use serde::Serialize;
use serde_json::{json, Value};

/// Uniform response wrapper. Every gateway endpoint returns one of these;
/// `data` is `[]` or `{}` on failure depending on the resource shape.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub error: bool,
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
}

impl Envelope {
    pub fn ok(data: Value) -> Self {
        Self {
            error: false,
            data,
            message: None,
            pagination: None,
        }
    }

    pub fn paginated(data: Value, pagination: Pagination) -> Self {
        Self {
            error: false,
            data,
            message: None,
            pagination: Some(pagination),
        }
    }

    pub fn fail(message: &str, data: Value) -> Self {
        Self {
            error: true,
            data,
            message: Some(message.to_string()),
            pagination: None,
        }
    }

    pub fn message(message: &str) -> Self {
        Self {
            error: false,
            data: json!({}),
            message: Some(message.to_string()),
            pagination: None,
        }
    }
}
