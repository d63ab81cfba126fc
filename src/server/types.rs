use crate::{Error, Result, exam::ExamAction, exam::catalog};
use serde::Deserialize;

/// Body of `POST /api/science-eq`. Every field is optional on the wire so
/// that missing fields surface as 400s with a readable message.
#[derive(Debug, Default, Deserialize)]
pub struct ScienceRequest {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl ScienceRequest {
    pub fn from_body(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|_| Error::bad_request("Invalid JSON body"))
    }

    pub fn into_action(self) -> Result<ExamAction> {
        let (Some(action), Some(subject), Some(topic)) = (
            non_empty(self.action),
            non_empty(self.subject),
            non_empty(self.topic),
        ) else {
            return Err(Error::bad_request("Missing action, subject or topic"));
        };

        if !catalog::is_allowed(&subject, &topic) {
            return Err(Error::bad_request("Invalid subject/topic selection"));
        }

        match action.as_str() {
            "generate" => Ok(ExamAction::Generate { subject, topic }),
            "grade" => {
                let (Some(question), Some(answer)) =
                    (non_empty(self.question), non_empty(self.answer))
                else {
                    return Err(Error::bad_request("Missing question or answer"));
                };
                Ok(ExamAction::Grade {
                    subject,
                    topic,
                    question,
                    answer,
                })
            }
            _ => Err(Error::bad_request("Unknown action")),
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}
