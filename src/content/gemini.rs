//! Gemini `generateContent` client for challenge generation.
//!
//! One schema-constrained request per session: the response is forced to
//! `application/json` matching the [`ChallengeItem`] wire shape, so parsing is
//! a plain serde decode of the first candidate's text part. Any failure here
//! is absorbed by `content::resolve`; the API key is never logged or shown.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::content::{ChallengeItem, ContentError, ContentSource};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const PROMPT: &str = "Create {n} source-criticism challenges for teenagers (13-19). \
Topics: social media, AI trends, or current affairs. Mix fabricated \
influencer news, AI-generated opinion pieces, and true-but-surprising \
science news. Include 'clues' a careful reader could discover by checking \
around the source.";

pub struct GeminiSource {
    client: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
    model: String,
    item_count: usize,
}

impl GeminiSource {
    /// Construct the source if GEMINI_API_KEY is set; otherwise return None
    /// and let the caller fall back to embedded content.
    pub fn from_env(config: &Config) -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").ok()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .ok()?;
        Some(Self {
            client,
            api_key,
            base_url: config.api_base_url.clone(),
            model: config.api_model.clone(),
            item_count: config.request_items,
        })
    }

    fn request_body(&self) -> serde_json::Value {
        let item_schema = json!({
            "type": "OBJECT",
            "properties": {
                "headline": { "type": "STRING" },
                "body": { "type": "STRING" },
                "source": { "type": "STRING" },
                "isTrue": { "type": "BOOLEAN" },
                "explanation": { "type": "STRING" },
                "clues": { "type": "ARRAY", "items": { "type": "STRING" } }
            },
            "required": ["headline", "body", "source", "isTrue", "explanation", "clues"]
        });
        json!({
            "contents": [{
                "parts": [{ "text": PROMPT.replace("{n}", &self.item_count.to_string()) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": { "type": "ARRAY", "items": item_schema }
            }
        })
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: String,
}

impl ContentSource for GeminiSource {
    fn fetch(&self) -> Result<Vec<ChallengeItem>, ContentError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&self.request_body())
            .send()
            .map_err(|e| ContentError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ContentError::Request(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .map_err(|e| ContentError::Request(e.to_string()))?;

        let text = body
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| ContentError::Request("response has no text candidate".to_string()))?;

        Ok(serde_json::from_str(text)?)
    }
}
