// Database model structs

use sqlx::types::Json;

use crate::models::{Options, QuestionSummary};

#[derive(sqlx::FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub question: String,
    pub options: Json<Options>,
}

impl From<QuestionRow> for QuestionSummary {
    fn from(row: QuestionRow) -> Self {
        QuestionSummary {
            id: row.id,
            question: row.question,
            options: row.options.0,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
pub struct AnswerModel {
    pub correct_answer: String,
    pub explanation: String,
}
