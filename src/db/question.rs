use color_eyre::Result;
use sqlx::{types::Json, Connection};

use super::models::{AnswerModel, QuestionRow};
use super::Db;
use crate::models::{NewQuestion, QuestionSummary};

impl Db {
    /// Insert a batch of questions in one transaction and return their ids.
    /// Either every question is stored or none is.
    pub async fn insert_questions(&self, questions: &[NewQuestion]) -> Result<Vec<i64>> {
        let mut conn = self.connect().await?;
        let mut tx = conn.begin().await?;

        let mut ids = Vec::with_capacity(questions.len());
        for q in questions {
            let id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO questions (question, options, correct_answer, explanation)
                VALUES (?, ?, ?, ?)
                RETURNING id
                "#,
            )
            .bind(&q.question)
            .bind(Json(&q.options))
            .bind(&q.correct_answer)
            .bind(&q.explanation)
            .fetch_one(&mut *tx)
            .await?;
            ids.push(id);
        }

        tx.commit().await?;
        conn.close().await?;

        tracing::info!("inserted {} questions", ids.len());
        Ok(ids)
    }

    /// Every question without its answer or explanation, in id order.
    pub async fn list_questions(&self) -> Result<Vec<QuestionSummary>> {
        let mut conn = self.connect().await?;

        let rows = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, question, options FROM questions ORDER BY id",
        )
        .fetch_all(&mut conn)
        .await?;

        conn.close().await?;
        Ok(rows.into_iter().map(QuestionSummary::from).collect())
    }

    pub async fn get_answer(&self, question_id: i64) -> Result<Option<AnswerModel>> {
        let mut conn = self.connect().await?;

        let answer = sqlx::query_as::<_, AnswerModel>(
            "SELECT correct_answer, explanation FROM questions WHERE id = ?",
        )
        .bind(question_id)
        .fetch_optional(&mut conn)
        .await?;

        conn.close().await?;
        Ok(answer)
    }

    pub async fn questions_count(&self) -> Result<i64> {
        let mut conn = self.connect().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&mut conn)
            .await?;

        conn.close().await?;
        Ok(count)
    }

    /// Delete every question. The id sequence is left untouched.
    pub async fn clear_questions(&self) -> Result<u64> {
        let mut conn = self.connect().await?;

        let deleted = sqlx::query("DELETE FROM questions")
            .execute(&mut conn)
            .await?
            .rows_affected();

        conn.close().await?;

        tracing::info!("deleted {deleted} questions");
        Ok(deleted)
    }
}
