//! External coach service.
//!
//! Sends a transcript to an OpenAI-compatible chat completion API and returns
//! the coach's freeform reply. The feedback engine never depends on this
//! module; callers show its output next to, or instead of, the heuristic
//! report.

use crate::config::CoachConfig;
use crate::error::CoachError;

use async_openai::Client;
use async_openai::config::OpenAIConfig;
use async_openai::error::OpenAIError;
use async_openai::types::chat::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestUserMessage, CreateChatCompletionRequest,
    CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

const MAX_RETRIES: u32 = 3;
/// First retry waits twice this long, the second four times.
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Anything that turns a transcript into coaching text.
#[async_trait]
pub trait CoachService: Send + Sync {
    async fn request_feedback(&self, transcript: &str) -> Result<String, CoachError>;
}

/// Where the coach service lives and how to authenticate.
#[derive(Clone)]
pub struct CoachEndpoint {
    /// OpenAI-compatible API base URL.
    pub api_base: String,
    /// API key for authentication.
    pub api_key: String,
}

impl CoachEndpoint {
    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: api_key.into(),
        }
    }
}

impl fmt::Debug for CoachEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoachEndpoint")
            .field("api_base", &self.api_base)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Coach backed by an OpenAI-compatible chat completion endpoint.
pub struct OpenAICoach {
    settings: CoachConfig,
    client: Client<OpenAIConfig>,
    retry_delay: Duration,
}

impl OpenAICoach {
    pub fn new(endpoint: &CoachEndpoint, settings: CoachConfig) -> Result<Self, CoachError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                CoachError::RemoteService(format!("Failed to create HTTP client: {}", e))
            })?;

        let config = OpenAIConfig::new()
            .with_api_key(&endpoint.api_key)
            .with_api_base(&endpoint.api_base);

        let client = Client::with_config(config).with_http_client(http_client);

        Ok(Self {
            settings,
            client,
            retry_delay: DEFAULT_RETRY_DELAY,
        })
    }

    /// Set the base delay for exponential backoff between retries.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn build_request(&self, transcript: &str) -> Result<CreateChatCompletionRequest, CoachError> {
        let messages = vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
                content: self.settings.system_prompt.clone().into(),
                name: None,
            }),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
                content: transcript.to_string().into(),
                name: None,
            }),
        ];

        Ok(CreateChatCompletionRequestArgs::default()
            .model(&self.settings.model)
            .max_completion_tokens(self.settings.max_tokens)
            .messages(messages)
            .build()?)
    }
}

#[async_trait]
impl CoachService for OpenAICoach {
    /// Request feedback, retrying transport failures with exponential backoff.
    ///
    /// Errors reported by the API itself (bad key, bad request) are returned
    /// without retrying.
    async fn request_feedback(&self, transcript: &str) -> Result<String, CoachError> {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return Err(CoachError::InsufficientInput);
        }

        let request = self.build_request(transcript)?;
        log::info!(
            "Requesting coach feedback from {} ({} chars)",
            self.settings.model,
            transcript.len()
        );

        let mut last_error = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                let delay = self.retry_delay * (1 << attempt);
                log::warn!(
                    "Coach request failed, retrying in {:?} ({}/{})",
                    delay,
                    attempt,
                    MAX_RETRIES - 1
                );
                tokio::time::sleep(delay).await;
            }

            match self.client.chat().create(request.clone()).await {
                Ok(response) => {
                    let content = response
                        .choices
                        .first()
                        .and_then(|c| c.message.content.clone())
                        .unwrap_or_default();
                    return coach_reply(&content);
                }
                Err(e) if is_transient(&e) => last_error = Some(e),
                Err(e) => return Err(e.into()),
            }
        }

        Err(last_error.map(CoachError::from).unwrap_or_else(|| {
            CoachError::RemoteService("Unknown API error after retries".to_string())
        }))
    }
}

/// Transport-level failures are worth another attempt; API errors are not.
fn is_transient(err: &OpenAIError) -> bool {
    matches!(err, OpenAIError::Reqwest(_))
}

/// Turn raw reply content into coaching text, rejecting replies that are
/// empty once reasoning blocks are gone.
fn coach_reply(content: &str) -> Result<String, CoachError> {
    let reply = strip_reasoning(content);
    if reply.is_empty() {
        return Err(CoachError::RemoteService(
            "Coach service returned an empty response".to_string(),
        ));
    }
    Ok(reply)
}

/// Strip reasoning blocks such as `<think>...</think>` from a model reply.
///
/// The rest of the reply is kept verbatim apart from surrounding whitespace.
fn strip_reasoning(response: &str) -> String {
    let tags_to_strip = [
        "thinking",
        "think",
        "reflection",
        "reasoning",
        "thought",
        "scratchpad",
    ];

    let mut result = response.to_string();

    for tag in &tags_to_strip {
        let pattern = format!(r"(?is)<{tag}[^>]*>.*?</{tag}>", tag = tag);
        if let Ok(re) = regex::Regex::new(&pattern) {
            result = re.replace_all(&result, "").to_string();
        }
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coach() -> OpenAICoach {
        let endpoint = CoachEndpoint::new("http://127.0.0.1:9/v1", "test-key");
        OpenAICoach::new(&endpoint, CoachConfig::default()).unwrap()
    }

    #[test]
    fn test_strip_reasoning_think_tags() {
        let input = "<think>Is the warrant weak?</think>Your warrant needs support.";
        assert_eq!(strip_reasoning(input), "Your warrant needs support.");
    }

    #[test]
    fn test_strip_reasoning_multiline() {
        let input = "<thinking>\nline one\nline two\n</thinking>\n\nStrong opening.";
        assert_eq!(strip_reasoning(input), "Strong opening.");
    }

    #[test]
    fn test_strip_reasoning_keeps_formatting() {
        let input = "**Strengths**\n- Clear value\n\n**Improve**\n- Weigh impacts";
        assert_eq!(strip_reasoning(input), input);
    }

    #[test]
    fn test_strip_reasoning_multiple_tags() {
        let input = "<reasoning>a</reasoning>Good clash. <reflection>b</reflection>Keep it up.";
        assert_eq!(strip_reasoning(input), "Good clash. Keep it up.");
    }

    #[test]
    fn test_endpoint_debug_hides_key() {
        let endpoint = CoachEndpoint::new("https://api.example.com/v1", "sk-secret");
        let shown = format!("{:?}", endpoint);
        assert!(shown.contains("api.example.com"));
        assert!(!shown.contains("sk-secret"));
    }

    #[test]
    fn test_build_request() {
        let coach = coach();
        let request = coach.build_request("We affirm the resolution.").unwrap();
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.messages.len(), 2);
        assert!(matches!(
            request.messages[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(
            request.messages[1],
            ChatCompletionRequestMessage::User(_)
        ));
    }

    #[test]
    fn test_coach_reply_rejects_empty_content() {
        for content in ["", "   \n", "<think>x</think>  "] {
            let err = coach_reply(content).unwrap_err();
            assert!(matches!(err, CoachError::RemoteService(_)), "content {:?}", content);
        }
    }

    #[test]
    fn test_coach_reply_keeps_feedback() {
        let reply = coach_reply("<think>hmm</think>\nWeigh your impacts.\n").unwrap();
        assert_eq!(reply, "Weigh your impacts.");
    }

    #[test]
    fn test_api_errors_are_not_transient() {
        let err = OpenAIError::InvalidArgument("bad request".to_string());
        assert!(!is_transient(&err));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_remote_service_error() {
        let coach = coach().with_retry_delay(Duration::ZERO);
        let err = coach.request_feedback("We affirm.").await.unwrap_err();
        assert!(matches!(err, CoachError::RemoteService(_)));
    }

    #[tokio::test]
    async fn test_blank_transcript_is_rejected_before_request() {
        let err = coach().request_feedback("   ").await.unwrap_err();
        assert!(matches!(err, CoachError::InsufficientInput));
    }

    struct CannedCoach(&'static str);

    #[async_trait]
    impl CoachService for CannedCoach {
        async fn request_feedback(&self, _transcript: &str) -> Result<String, CoachError> {
            Ok(self.0.to_string())
        }
    }

    #[tokio::test]
    async fn test_coach_service_as_trait_object() {
        let service: Box<dyn CoachService> = Box::new(CannedCoach("Slow down."));
        assert_eq!(service.request_feedback("hi").await.unwrap(), "Slow down.");
    }
}
