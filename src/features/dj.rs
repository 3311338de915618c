//! AI DJ track intros
//!
//! Asks a Gemini model for a one or two sentence radio-host intro. Every
//! failure path yields a canned line so the caller always has text to show.

use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::features::settings::DjSettings;
use crate::model::Track;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub struct DjService {
    client: Client,
    settings: DjSettings,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl DjService {
    pub fn new(settings: DjSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, settings })
    }

    /// Intro line for `track`; never fails
    pub async fn intro(&self, track: &Track) -> String {
        let Some(api_key) = self.settings.resolved_api_key() else {
            return missing_key_intro(track);
        };

        match self.request_intro(&api_key, track).await {
            Ok(Some(text)) => text,
            Ok(None) => empty_reply_intro(track),
            Err(e) => {
                tracing::error!("DJ request failed: {:#}", e);
                error_intro(track)
            }
        }
    }

    async fn request_intro(&self, api_key: &str, track: &Track) -> Result<Option<String>> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.model
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(intro_prompt(track)),
                }],
            }],
        };

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            bail!("HTTP {}", status);
        }

        let text = response.text().await?;
        parse_intro_response(&text)
    }
}

fn intro_prompt(track: &Track) -> String {
    format!(
        "You are a cool, late-night radio DJ named \"Midnight Jack\". \
         Write a very short, engaging intro (max 2 sentences) for the song \
         \"{}\" by \"{}\" from the album \"{}\". \
         Mention a fun fact about the genre or the vibe. \
         Do not use hashtags. Speak directly to the listener.",
        track.title, track.artist, track.album
    )
}

/// Text of the first candidate, whitespace-collapsed; `None` if there is none
pub fn parse_intro_response(body: &str) -> Result<Option<String>> {
    let response: GenerateResponse =
        serde_json::from_str(body).context("Malformed generateContent response")?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    let text = WHITESPACE_RE.replace_all(text.trim(), " ");
    Ok((!text.is_empty()).then(|| text.into_owned()))
}

fn missing_key_intro(track: &Track) -> String {
    format!(
        "Now playing {} by {}. (API Key missing for AI DJ)",
        track.title, track.artist
    )
}

fn error_intro(track: &Track) -> String {
    format!("Up next on the turntable, we have {}.", track.title)
}

fn empty_reply_intro(track: &Track) -> String {
    format!("Spinning {} for you right now.", track.title)
}
