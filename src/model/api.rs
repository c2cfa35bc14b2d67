use serde::{Deserialize, Serialize};

/// The response body the API sends when a request fails
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}
