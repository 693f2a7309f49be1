//! HTTP collaborators: the material catalog service and the Gemini
//! question generator.
//!
//! Both sit behind the core's store/generator traits; the host decides
//! how failures degrade (built-in samples, empty quizzes).

use log::debug;
use serde::Deserialize;
use serde_json::json;
use swiftread_core::{
    content::{Material, MaterialDraft, MaterialStore},
    quiz::{QuizGenerator, QuizQuestion},
};

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const QUESTION_COUNT: usize = 3;
const OPTION_COUNT: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error("payload decoding: {0}")]
    Json(#[from] serde_json::Error),
}

/// REST client for the material catalog (`GET/POST /texts`,
/// `PUT/DELETE /texts/{id}`).
pub struct HttpMaterialStore {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpMaterialStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

impl MaterialStore for HttpMaterialStore {
    type Error = NetError;

    fn fetch_all(&mut self) -> Result<Vec<Material>, Self::Error> {
        Ok(self
            .client
            .get(self.url("texts"))
            .send()?
            .error_for_status()?
            .json()?)
    }

    fn create(&mut self, draft: &MaterialDraft) -> Result<Material, Self::Error> {
        Ok(self
            .client
            .post(self.url("texts"))
            .json(draft)
            .send()?
            .error_for_status()?
            .json()?)
    }

    fn update(&mut self, material: &Material) -> Result<(), Self::Error> {
        self.client
            .put(self.url(&format!("texts/{}", material.id)))
            .json(material)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), Self::Error> {
        self.client
            .delete(self.url(&format!("texts/{id}")))
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

/// Comprehension-question generator backed by the Gemini
/// `generateContent` endpoint, constrained to a JSON schema so the
/// reply parses straight into [`QuizQuestion`]s.
pub struct GeminiQuizClient {
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl GeminiQuizClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[derive(Deserialize)]
struct GenerateResponse {
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
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// A reply with no text part is a degenerate-but-valid result: no
/// questions, not an error.
fn decode_questions(response: GenerateResponse) -> Result<Vec<QuizQuestion>, NetError> {
    let Some(raw) = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .and_then(|part| part.text)
    else {
        debug!("model reply carried no quiz payload");
        return Ok(Vec::new());
    };

    Ok(serde_json::from_str(raw.trim())?)
}

impl QuizGenerator for GeminiQuizClient {
    type Error = NetError;

    fn generate(&mut self, text: &str) -> Result<Vec<QuizQuestion>, Self::Error> {
        let prompt = format!(
            "Based on the following passage, write {QUESTION_COUNT} multiple-choice \
             comprehension questions, each with {OPTION_COUNT} options.\nPassage: \"{text}\""
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "question": { "type": "STRING" },
                            "options": {
                                "type": "ARRAY",
                                "items": { "type": "STRING" }
                            },
                            "correctAnswer": { "type": "INTEGER" }
                        },
                        "required": ["question", "options", "correctAnswer"]
                    }
                }
            }
        });

        let url = format!(
            "{GEMINI_ENDPOINT}/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let response: GenerateResponse = self
            .client
            .post(url)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        decode_questions(response)
    }
}
