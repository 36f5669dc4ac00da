//! HTTP collaborator for the word-progress API.
//!
//! The collaborator wraps every response in a `{status, message, data}`
//! envelope. All calls are independent and unordered; a rejected call is
//! surfaced to the caller and nothing is retried.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use wordtrail_core::{DayProgress, QuizQuestion, Vocabulary};

use crate::config::Config;
use crate::error::{ClientError, Result};

/// JSON envelope on every collaborator response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

#[derive(Debug, Serialize)]
struct MasterRequest {
    id: i64,
}

#[derive(Debug, Serialize)]
struct DayRequest {
    day: u32,
}

/// Port to the remote word store.
///
/// Controllers are generic over this trait so tests can substitute an
/// in-memory implementation.
#[async_trait]
pub trait VocabApi: Send + Sync {
    async fn get_words(&self, day: u32, random: bool, include_all: bool)
        -> Result<Vec<Vocabulary>>;
    async fn mark_mastered(&self, id: i64) -> Result<()>;
    async fn days_progress(&self) -> Result<Vec<DayProgress>>;
    async fn reset_day(&self, day: u32) -> Result<()>;
    async fn quiz(&self, day: u32) -> Result<Vec<QuizQuestion>>;
    async fn complete_day(&self, day: u32) -> Result<()>;
    async fn explain(&self, word: &str) -> Result<String>;
}

/// reqwest-backed implementation of [`VocabApi`].
pub struct HttpVocabApi {
    client: Client,
    base_url: String,
    ai_base_url: String,
}

impl HttpVocabApi {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
            ai_base_url: config.ai_base_url(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::decode(resp).await
    }

    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<()> {
        let resp = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Backend { status, message });
        }
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Backend { status, message });
        }
        let envelope: ApiEnvelope<T> = resp
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl VocabApi for HttpVocabApi {
    async fn get_words(
        &self,
        day: u32,
        random: bool,
        include_all: bool,
    ) -> Result<Vec<Vocabulary>> {
        self.get_json(
            &self.base_url,
            &[
                ("day", day.to_string()),
                ("random", random.to_string()),
                ("includeAll", include_all.to_string()),
            ],
        )
        .await
    }

    async fn mark_mastered(&self, id: i64) -> Result<()> {
        let url = format!("{}/master", self.base_url);
        self.post_json(&url, &MasterRequest { id }).await
    }

    async fn days_progress(&self) -> Result<Vec<DayProgress>> {
        let url = format!("{}/days", self.base_url);
        self.get_json(&url, &[]).await
    }

    async fn reset_day(&self, day: u32) -> Result<()> {
        let url = format!("{}/reset", self.base_url);
        self.post_json(&url, &DayRequest { day }).await
    }

    async fn quiz(&self, day: u32) -> Result<Vec<QuizQuestion>> {
        let url = format!("{}/quiz", self.base_url);
        self.get_json(&url, &[("day", day.to_string())]).await
    }

    async fn complete_day(&self, day: u32) -> Result<()> {
        let url = format!("{}/complete-day", self.base_url);
        self.post_json(&url, &DayRequest { day }).await
    }

    async fn explain(&self, word: &str) -> Result<String> {
        let url = format!("{}/ai/explain", self.ai_base_url);
        self.get_json(&url, &[("word", word.to_string())]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn envelope_decodes_camel_case_payloads() {
        let json = r#"{
            "status": "success",
            "message": "ok",
            "data": [
                {"day": 1, "totalWords": 10, "masteredWords": 3, "isUnlocked": true}
            ]
        }"#;
        let envelope: ApiEnvelope<Vec<DayProgress>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.status, "success");
        assert_eq!(envelope.data[0].total_words, 10);
        assert!(envelope.data[0].is_unlocked);
    }

    #[test]
    fn vocabulary_tolerates_missing_part_of_speech() {
        let json = r#"{
            "status": "success",
            "message": "",
            "data": {
                "id": 4,
                "word": "resilient",
                "meaning": "kien cuong",
                "pronunciation": "/rɪˈzɪliənt/",
                "example": "She is resilient."
            }
        }"#;
        let envelope: ApiEnvelope<Vocabulary> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data.part_of_speech, None);
        assert_eq!(envelope.data.word, "resilient");
    }
}
