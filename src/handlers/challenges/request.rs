//! Challenge request DTOs

use serde::Deserialize;
use validator::Validate;

/// Flag submission request
#[derive(Debug, Deserialize, Validate)]
pub struct AttemptRequest {
    #[validate(length(min = 1, max = 1024))]
    pub submission: String,
}
