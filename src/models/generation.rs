use serde::{Deserialize, Serialize};

fn default_emotion() -> String {
    "neutral".to_string()
}

fn default_style() -> String {
    "minimal".to_string()
}

/// Inbound mood descriptor. Both fields are optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(default = "default_emotion")]
    pub emotion: String,
    #[serde(default = "default_style")]
    pub style: String,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        GenerationRequest {
            emotion: default_emotion(),
            style: default_style(),
        }
    }
}

impl GenerationRequest {
    pub fn new(emotion: impl Into<String>, style: impl Into<String>) -> Self {
        GenerationRequest {
            emotion: emotion.into(),
            style: style.into(),
        }
    }

    /// Derive the upstream text prompt from the mood descriptor.
    pub fn prompt(&self) -> String {
        format!(
            "A {} themed {} digital artwork, cinematic lighting, high detail",
            self.emotion, self.style
        )
    }
}

/// Success envelope returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub image_url: String,
}

/// Payload sent to the fal.ai synchronous endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct FalPrompt {
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_from_fields() {
        let request = GenerationRequest::new("hope", "surreal");
        assert_eq!(
            request.prompt(),
            "A hope themed surreal digital artwork, cinematic lighting, high detail"
        );
    }

    #[test]
    fn test_defaults_when_fields_missing() {
        let request: GenerationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.emotion, "neutral");
        assert_eq!(request.style, "minimal");
        assert_eq!(
            request.prompt(),
            "A neutral themed minimal digital artwork, cinematic lighting, high detail"
        );
    }

    #[test]
    fn test_partial_body_keeps_other_default() {
        let request: GenerationRequest = serde_json::from_str(r#"{"emotion":"joy"}"#).unwrap();
        assert_eq!(request.emotion, "joy");
        assert_eq!(request.style, "minimal");
    }

    #[test]
    fn test_result_serializes_single_field() {
        let result = GenerationResult {
            image_url: "http://x/1.png".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"image_url":"http://x/1.png"}"#
        );
    }
}
