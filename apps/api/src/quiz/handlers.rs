use axum::Json;

use crate::quiz::{question_bank, Question};

/// GET /api/questions
pub async fn handle_list_questions() -> Json<Vec<Question>> {
    Json(question_bank())
}
