use thiserror::Error;

/// Failure of a single completion request
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,

    #[error("OpenAI request timed out after {secs} seconds")]
    Timeout { secs: u64 },

    #[error("OpenAI request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("OpenAI returned HTTP {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Could not parse OpenAI response: {0}")]
    Malformed(String),

    #[error("OpenAI response contained no text")]
    EmptyOutput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_detail() {
        let err = CompletionError::Provider {
            status: 429,
            message: "Rate limit reached".to_string(),
        };
        assert_eq!(err.to_string(), "OpenAI returned HTTP 429: Rate limit reached");

        let err = CompletionError::Timeout { secs: 45 };
        assert!(err.to_string().contains("45 seconds"));
    }
}
