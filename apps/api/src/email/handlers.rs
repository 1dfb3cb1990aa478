use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::email::models::{EmailRequest, EmailResponse};
use crate::email::parser::parse_email;
use crate::email::prompts::build_email_prompt;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /generate-email
///
/// Drafts one email for the given sender/recipient pair and template type.
pub async fn handle_generate_email(
    State(state): State<AppState>,
    payload: Result<Json<EmailRequest>, JsonRejection>,
) -> Result<Json<EmailResponse>, AppError> {
    let Json(request) = payload?;

    let prompt = build_email_prompt(&request);
    let text = state.llm.complete(&prompt).await?;
    let response = parse_email(&text)?;

    info!(
        "Composed '{}' email from {} to {} ({} previous emails)",
        request.template_type,
        request.sender_id,
        request.recipient_id,
        request.previous_emails.len()
    );

    Ok(Json(response))
}
