use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A plain user-visible message, also the body of every [Error][super::super::Error]
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
