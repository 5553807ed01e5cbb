use serde::{Deserialize, Deserializer, Serialize};

/// The four answer choices of a question, A to D in order.
pub type Options = [String; 4];

/// A question produced by the import normalizer, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub options: Options,
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct QuestionSummary {
    pub id: i64,
    pub question: String,
    pub options: Options,
}

#[derive(Debug, Deserialize)]
pub struct CheckAnswerBody {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckAnswerResponse {
    pub correct: bool,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            count: None,
        }
    }
}

/// Accept an id sent either as a JSON number or as a string holding one.
/// Form-encoding clients send every value as a string.
fn deserialize_optional_id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(i64),
        Text(String),
    }

    match Option::<Id>::deserialize(d)? {
        None => Ok(None),
        Some(Id::Number(n)) => Ok(Some(n)),
        Some(Id::Text(s)) => s.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}
