use serde::Serialize;

// Response genérica de creación
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensagem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            mensagem: message.to_string(),
            id: None,
        }
    }

    pub fn with_id(message: &str, id: i64) -> Self {
        Self {
            mensagem: message.to_string(),
            id: Some(id),
        }
    }
}

// Response del health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend: &'static str,
    pub timestamp: String,
}
