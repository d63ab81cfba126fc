use super::{
    prompts,
    types::{GenerateResult, GradeBand, GradeResult},
};
use crate::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, warn};

const GENERATE_TEMPERATURE: f32 = 0.7;
const GRADE_TEMPERATURE: f32 = 0.3;
const MAX_SCORE: i64 = 8;

/// Turns validated exam actions into provider calls. Holds no per-request state.
#[derive(Clone)]
pub struct Examiner {
    llm: Arc<dyn LlmClient>,
}

impl Examiner {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn generate(&self, subject: &str, topic: &str) -> Result<GenerateResult> {
        info!("Generating question for {} / {}", subject, topic);

        let content = self
            .complete(ChatCompletionRequest {
                messages: vec![
                    ChatMessage::system(prompts::generate_system(subject, topic)),
                    ChatMessage::user(prompts::generate_user(subject, topic)),
                ],
                temperature: GENERATE_TEMPERATURE,
                json_mode: true,
            })
            .await?;

        parse_question(&content)
    }

    pub async fn grade(
        &self,
        subject: &str,
        topic: &str,
        question: &str,
        answer: &str,
    ) -> Result<GradeResult> {
        info!(
            "Grading answer for {} / {} ({} chars)",
            subject,
            topic,
            answer.chars().count()
        );

        let content = self
            .complete(ChatCompletionRequest {
                messages: vec![
                    ChatMessage::system(prompts::grade_system(subject, topic)),
                    ChatMessage::user(prompts::grade_user(subject, topic, question, answer)),
                ],
                temperature: GRADE_TEMPERATURE,
                json_mode: true,
            })
            .await?;

        let result = parse_grading(&content)?;
        info!("Graded {} ({}/8)", result.grade_band, result.score);
        Ok(result)
    }

    async fn complete(&self, request: ChatCompletionRequest) -> Result<String> {
        let response = self.llm.create_chat_completion(request).await?;
        let content = response
            .first_content()
            .ok_or_else(|| Error::upstream("Empty response from model"))?;
        debug!("Model replied with {} bytes", content.len());
        Ok(content.to_string())
    }
}

/// Reads a generated question. Non-JSON replies are taken verbatim as the question.
pub fn parse_question(content: &str) -> Result<GenerateResult> {
    let question = match serde_json::from_str::<Value>(content) {
        Ok(value) => value
            .get("question")
            .and_then(Value::as_str)
            .map(|q| q.trim().to_string()),
        Err(_) => {
            debug!("Question reply was not JSON, using raw text");
            Some(content.trim().to_string())
        }
    };

    match question {
        Some(question) if !question.is_empty() => Ok(GenerateResult { question }),
        _ => {
            warn!("Model reply had no question");
            Err(Error::upstream("Model did not return a question"))
        }
    }
}

/// Reads a grading reply. Unlike questions there is no free-text fallback.
pub fn parse_grading(content: &str) -> Result<GradeResult> {
    let value: Value = serde_json::from_str(content)
        .map_err(|_| Error::upstream("Failed to parse grading JSON"))?;

    let band = value.get("grade_band").filter(|v| !v.is_null());
    let score = value.get("score").filter(|v| !v.is_null());
    let (Some(band), Some(score)) = (band, score) else {
        return Err(Error::upstream("Incomplete grading response"));
    };

    let grade_band = band
        .as_str()
        .and_then(GradeBand::parse)
        .ok_or_else(|| Error::upstream(format!("Invalid grade band: {}", band)))?;
    let score = parse_score(score).ok_or_else(|| Error::upstream("Incomplete grading response"))?;

    Ok(GradeResult {
        grade_band,
        score,
        feedback: text_field(&value, "feedback"),
        improved_answer: text_field(&value, "improved_answer"),
    })
}

fn parse_score(value: &Value) -> Option<u8> {
    let raw = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))?,
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        _ => return None,
    };
    Some(raw.clamp(0, MAX_SCORE) as u8)
}

fn text_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
