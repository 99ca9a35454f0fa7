use std::time::Duration;

use async_trait::async_trait;

use crate::LLM;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub struct Gemini<'a> {
    client: reqwest::Client,
    api_key: &'a str,
    model: &'a str,
    base_url: &'a str,
    generation_config: GenerationConfig,
}

#[derive(Default)]
pub struct GenerationConfig {
    thinking_config: ThinkingConfig,
    temperature: Option<f32>,
}

pub struct ThinkingConfig {
    thinking_budget: i32,
}

impl Default for ThinkingConfig {
    fn default() -> Self {
        Self {
            thinking_budget: -1,
        }
    }
}

impl<'a> Gemini<'a> {
    pub fn new(api_key: &'a str, model: &'a str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model,
            base_url: DEFAULT_BASE_URL,
            generation_config: GenerationConfig::default(),
        }
    }

    /// Point the client at another endpoint root, e.g. a proxy.
    pub fn with_base_url(mut self, base_url: &'a str) -> Self {
        self.base_url = base_url.trim_end_matches('/');
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, GeminiError> {
        self.client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    pub fn set_thinking(&mut self, state: bool) {
        if state {
            self.generation_config.thinking_config.thinking_budget = -1;
        } else {
            self.generation_config.thinking_config.thinking_budget = 0;
        }
    }

    pub fn set_temperature(&mut self, temperature: Option<f32>) {
        self.generation_config.temperature = temperature;
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Missing Gemini API key")]
    MissingApiKey,
    #[error("API key rejected ({status}): {body}")]
    Unauthorized {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Gemini API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("No response generated from the model")]
    EmptyResponse,
}

impl From<GeminiError> for crate::Error {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::MissingApiKey | GeminiError::Unauthorized { .. } => {
                crate::Error::auth(err)
            }
            _ => crate::Error::request(err),
        }
    }
}

fn is_auth_failure(status: reqwest::StatusCode, body: &str) -> bool {
    use reqwest::StatusCode;

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => true,
        // invalid keys come back as 400 INVALID_ARGUMENT
        StatusCode::BAD_REQUEST => body.contains("API_KEY_INVALID"),
        _ => false,
    }
}

#[async_trait]
impl LLM for Gemini<'_> {
    type Error = GeminiError;

    async fn generate(&mut self, prompt: &str) -> Result<String, Self::Error> {
        use json_model::*;

        if self.api_key.trim().is_empty() {
            return Err(GeminiError::MissingApiKey);
        }

        let mut gen_cfg = GenerationConfigPayload {
            temperature: self.generation_config.temperature,
            thinking_config: None,
        };
        if self.generation_config.thinking_config.thinking_budget >= 0 {
            gen_cfg.thinking_config = Some(ThinkingConfigPayload {
                thinking_budget: self.generation_config.thinking_config.thinking_budget,
            });
        }

        let req_body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(gen_cfg),
        };

        log::debug!("POST {} ({} prompt bytes)", self.endpoint(), prompt.len());
        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key)
            .json(&req_body)
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            if is_auth_failure(status, &body) {
                return Err(GeminiError::Unauthorized { status, body });
            }
            return Err(GeminiError::Api { status, body });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        parsed
            .candidates
            .and_then(|cands| cands.into_iter().next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts)
            .map(|parts| {
                parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            // parts without text (e.g. a bare thought signature) count as no answer
            .filter(|text| !text.is_empty())
            .ok_or(GeminiError::EmptyResponse)
    }
}

mod json_model {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    pub struct Part<'a> {
        pub text: &'a str,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    pub struct Content<'a> {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub role: Option<&'a str>,
        pub parts: Vec<Part<'a>>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    pub struct ThinkingConfigPayload {
        pub thinking_budget: i32,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    pub struct GenerationConfigPayload {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub temperature: Option<f32>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub thinking_config: Option<ThinkingConfigPayload>,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    pub struct GenerateContentRequest<'a> {
        pub contents: Vec<Content<'a>>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub generation_config: Option<GenerationConfigPayload>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub struct GenerateContentResponse {
        pub candidates: Option<Vec<Candidate>>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub struct Candidate {
        pub content: Option<ContentResp>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub struct ContentResp {
        pub parts: Option<Vec<PartResp>>,
    }

    #[derive(Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub struct PartResp {
        pub text: Option<String>,
    }
}
