use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
        Multipart, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::{
    import,
    models::{CheckAnswerBody, CheckAnswerResponse, MessageResponse, QuestionSummary},
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::GET_QUESTIONS_URL, get(get_questions))
        .route(names::UPLOAD_QUESTIONS_URL, post(upload_questions))
        .route(names::CHECK_ANSWER_URL, post(check_answer))
        .route(names::CLEAR_QUESTIONS_URL, post(clear_questions))
}

async fn get_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionSummary>>, AppError> {
    let questions = state
        .db
        .list_questions()
        .await
        .reject("failed to list questions")?;

    Ok(Json(questions))
}

async fn upload_questions(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| {
        tracing::debug!("upload is not a multipart request: {e}");
        AppError::input("No file uploaded")
    })?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(names::UPLOAD_FILE_FIELD) {
            continue;
        }

        let file_name = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(AppError::input("No file uploaded")),
        };
        // Validate the name before touching the body.
        import::FileFormat::from_file_name(&file_name).reject_input("rejected upload")?;

        let bytes = field.bytes().await.map_err(multipart_error)?;

        let questions = import::parse_questions(&file_name, &bytes, state.answer_policy)
            .reject_input("failed to import questions")?;

        let ids = state
            .db
            .insert_questions(&questions)
            .await
            .reject("failed to store questions")?;

        let total = state
            .db
            .questions_count()
            .await
            .reject("failed to count questions")?;
        tracing::info!(%file_name, count = ids.len(), total, "questions imported");

        return Ok(Json(MessageResponse {
            message: "Questions uploaded successfully".to_string(),
            count: Some(ids.len()),
        }));
    }

    Err(AppError::input("No file uploaded"))
}

fn multipart_error(e: MultipartError) -> AppError {
    tracing::debug!("failed to read multipart body: {e}");
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::input(e.body_text())
    }
}

async fn check_answer(
    State(state): State<AppState>,
    body: Result<Json<CheckAnswerBody>, JsonRejection>,
) -> Result<Json<CheckAnswerResponse>, AppError> {
    let Json(body) = body.map_err(|e| {
        tracing::debug!("malformed check_answer body: {e}");
        AppError::input(e.body_text())
    })?;

    let (Some(id), Some(answer)) = (body.id, body.answer.filter(|a| !a.is_empty())) else {
        return Err(AppError::input("Missing data"));
    };

    let stored = state
        .db
        .get_answer(id)
        .await
        .reject("failed to look up question")?
        .ok_or(AppError::NotFound("Question not found"))?;

    Ok(Json(CheckAnswerResponse {
        correct: stored.correct_answer == answer,
        explanation: stored.explanation,
    }))
}

async fn clear_questions(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .db
        .clear_questions()
        .await
        .reject("failed to clear questions")?;

    Ok(Json(MessageResponse::new("All questions have been deleted")))
}
