//! # LLM Path Proposal
//!
//! Asks an OpenAI-compatible chat-completions endpoint to map paths in an
//! inferred schema to the latitude/longitude/style roles. Every answer is
//! checked with the core path validator; a rejected answer is fed back to
//! the model as a correction message and the request retried, up to a
//! bounded attempt budget. The model may also abstain explicitly, which
//! is a non-fatal outcome.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use geoplot_core::{validate_path, Path, PathError, SchemaNode, DEFAULT_ALLOWED_KINDS};
use geoplot_schema::schema_to_value;

use crate::error::AgentError;
use crate::retry::send_with_backoff;

const OPENAI_API_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4.1";
const DEFAULT_MAX_RETRIES: u32 = 5;

/// Instructions given to the path-proposing model.
const SYSTEM_PROMPT: &str = "\
Your task is to look at a JSON schema and map paths in the schema to the \
variables the user is interested in: latitude, longitude, and optionally a \
scalar value to style points by.

A path is a list of property names that points to a scalar property, passing \
through any arrays without indexing them. For example,

latitude: [\"records\", \"data\", \"geo\", \"latitude\"]

Answer with a single JSON object in one of these two forms:

{\"paths\": {\"latitude\": [...], \"longitude\": [...], \"style_by\": [...]}}
{\"abstain\": {\"reason\": \"...\"}}

Omit \"style_by\" or set it to null when nothing is worth styling by. If the \
schema contains no usable geographic coordinates, abstain and explain why.";

/// Configuration for the path proposer.
#[derive(Debug, Clone)]
pub struct ProposerConfig {
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Bearer token.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Total proposal rounds before giving up.
    pub max_retries: u32,
}

impl ProposerConfig {
    /// Configuration with stock defaults for the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: OPENAI_API_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 30,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Property paths labeled by semantic role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPaths {
    /// Path to the latitude value.
    pub latitude: Path,
    /// Path to the longitude value.
    pub longitude: Path,
    /// Optional path to a value to style points by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_by: Option<Path>,
}

/// Outcome of a proposal round.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Proposal {
    /// The model mapped the requested roles to schema paths.
    Paths(PropertyPaths),
    /// The model explicitly declined, e.g. no geographic data present.
    Abstain {
        /// Human-readable reason for declining.
        reason: String,
    },
}

#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

impl ChatMessage {
    fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system",
            content: content.into(),
        }
    }

    fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }

    fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant",
            content: content.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Client for the path-proposal conversation.
#[derive(Debug)]
pub struct PathProposer {
    config: ProposerConfig,
    client: reqwest::Client,
}

impl PathProposer {
    /// Build a proposer from configuration.
    pub fn new(config: ProposerConfig) -> Result<Self, AgentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    reqwest::header::HeaderValue::from_str(&format!(
                        "Bearer {}",
                        config.api_key
                    ))
                    .map_err(|_| {
                        AgentError::Config(
                            "API key contains invalid header characters".to_string(),
                        )
                    })?,
                );
                headers
            })
            .build()
            .map_err(|e| AgentError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, client })
    }

    /// Propose property paths for `schema`.
    ///
    /// Runs up to `max_retries` proposal rounds. Unparseable answers and
    /// paths that fail validation are fed back as correction messages;
    /// transport and API failures end the conversation immediately.
    pub async fn propose(&self, schema: &SchemaNode) -> Result<Proposal, AgentError> {
        let rendered = schema_to_value(schema).to_string();
        let mut messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(format!("Here is the schema of my data:\n\n{rendered}")),
        ];

        let attempts = self.config.max_retries.max(1);
        let mut last_error = String::new();
        for attempt in 1..=attempts {
            let answer = self.request_completion(&messages).await?;

            let rejection = match serde_json::from_str::<Proposal>(&answer) {
                Ok(Proposal::Abstain { reason }) => {
                    return Ok(Proposal::Abstain { reason });
                }
                Ok(Proposal::Paths(paths)) => match validate_proposed(schema, &paths) {
                    Ok(()) => return Ok(Proposal::Paths(paths)),
                    Err(e) => format!("The proposed paths were rejected: {e}"),
                },
                Err(e) => format!("The answer could not be parsed: {e}"),
            };

            tracing::warn!(attempt, rejection = %rejection, "proposal round rejected");
            messages.push(ChatMessage::assistant(answer));
            messages.push(ChatMessage::user(format!(
                "{rejection}. Correct the problem and answer again in the same JSON format."
            )));
            last_error = rejection;
        }

        Err(AgentError::RetriesExhausted {
            attempts,
            last_error,
        })
    }

    async fn request_completion(&self, messages: &[ChatMessage]) -> Result<String, AgentError> {
        let endpoint = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );
        let body = json!({
            "model": self.config.model,
            "temperature": 0,
            "response_format": {"type": "json_object"},
            "messages": messages,
        });

        let response = send_with_backoff(|| self.client.post(&endpoint).json(&body).send())
            .await
            .map_err(|e| AgentError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::Api {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletion =
            response
                .json()
                .await
                .map_err(|e| AgentError::Deserialization {
                    endpoint: endpoint.clone(),
                    reason: e.to_string(),
                })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| AgentError::Deserialization {
                endpoint,
                reason: "completion contained no choices".to_string(),
            })
    }
}

fn validate_proposed(schema: &SchemaNode, paths: &PropertyPaths) -> Result<(), PathError> {
    validate_path(schema, &paths.latitude, DEFAULT_ALLOWED_KINDS)?;
    validate_path(schema, &paths.longitude, DEFAULT_ALLOWED_KINDS)?;
    if let Some(style_by) = &paths.style_by {
        validate_path(schema, style_by, DEFAULT_ALLOWED_KINDS)?;
    }
    Ok(())
}
