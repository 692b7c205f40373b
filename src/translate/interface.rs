//! Request and response bodies for `POST /translate`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub language: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translation: String,
}

impl TranslationRequest {
    /// Checks that serde can't express: a usable target language and the optional size cap.
    pub fn validate(&self, max_text_chars: Option<usize>) -> Result<(), String> {
        if self.language.trim().is_empty() {
            return Err("language must not be empty".to_string());
        }

        if let Some(limit) = max_text_chars {
            let len = self.text.chars().count();
            if len > limit {
                return Err(format!(
                    "text is {} characters long, the limit is {}",
                    len, limit
                ));
            }
        }

        Ok(())
    }
}
