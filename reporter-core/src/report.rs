use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{config::AzureOpenAiConfig, error::ReportError, model::WeatherSnapshot};

/// Deployment name expected on the Azure resource.
const DEPLOYMENT: &str = "gpt-4";

/// Fixes the output language and register for every report.
const SYSTEM_INSTRUCTION: &str = "Anda adalah reporter cuaca yang memberikan informasi cuaca \
     dalam Bahasa Indonesia yang jelas dan ringkas. Gunakan bahasa yang natural dan mudah \
     dipahami.";

/// Anything that can narrate a snapshot as a report for a location.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate(
        &self,
        snapshot: &WeatherSnapshot,
        location: &str,
    ) -> Result<String, ReportError>;
}

/// The user message sent to the model: all four snapshot fields with their
/// units, plus the location.
pub fn build_prompt(snapshot: &WeatherSnapshot, location: &str) -> String {
    format!(
        "Berdasarkan data cuaca berikut untuk {location}, berikan laporan cuaca yang informatif:\n\
         Suhu: {}°C\n\
         Kelembaban: {}%\n\
         Kecepatan Angin: {} km/jam\n\
         Kondisi: {}\n\
         \n\
         Harap sertakan:\n\
         1. Rangkuman kondisi cuaca saat ini\n\
         2. Bagaimana rasanya di luar\n\
         3. Rekomendasi yang relevan untuk hari ini",
        snapshot.temperature_c, snapshot.humidity_pct, snapshot.wind_kph, snapshot.condition,
    )
}

/// Chat-completion client for one Azure OpenAI deployment.
#[derive(Debug, Clone)]
pub struct AzureChatClient {
    config: AzureOpenAiConfig,
    http: Client,
}

impl AzureChatClient {
    pub fn new(config: AzureOpenAiConfig) -> Self {
        Self { config, http: Client::new() }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{DEPLOYMENT}/chat/completions",
            self.config.endpoint.trim_end_matches('/'),
        )
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, ReportError> {
        let request = ChatRequest {
            messages: vec![
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
        };

        debug!(deployment = DEPLOYMENT, "requesting chat completion");

        let res = self
            .http
            .post(self.completions_url())
            .query(&[("api-version", self.config.api_version.as_str())])
            .header("api-key", self.config.api_key.as_str())
            .json(&request)
            .send()
            .await
            .map_err(ReportError::generation)?;

        let status = res.status();
        let body = res.text().await.map_err(ReportError::generation)?;

        if !status.is_success() {
            warn!(status = status.as_u16(), %body, "chat completion rejected");
            return Err(ReportError::Generation {
                message: format!(
                    "chat completion failed with status {}: {}",
                    status.as_u16(),
                    truncate_body(&body),
                ),
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(ReportError::generation)?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ReportError::Generation {
                message: "chat completion returned no choices".to_string(),
            })
    }
}

#[async_trait]
impl ReportGenerator for AzureChatClient {
    async fn generate(
        &self,
        snapshot: &WeatherSnapshot,
        location: &str,
    ) -> Result<String, ReportError> {
        let prompt = build_prompt(snapshot, location);
        self.complete(SYSTEM_INSTRUCTION, &prompt).await
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
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

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
