use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::call_summary::models::{CallSummaryRequest, CallSummaryResponse};
use crate::call_summary::parser::parse_call_summary;
use crate::call_summary::prompts::build_call_summary_prompt;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /generate-call-summary
///
/// Summarizes one call transcript into a paragraph and a list of action items.
pub async fn handle_generate_call_summary(
    State(state): State<AppState>,
    payload: Result<Json<CallSummaryRequest>, JsonRejection>,
) -> Result<Json<CallSummaryResponse>, AppError> {
    let Json(request) = payload?;

    let prompt = build_call_summary_prompt(&request);
    let text = state.llm.complete(&prompt).await?;
    let response = parse_call_summary(&text)?;

    info!(
        "Summarized call {} ({} transcript entries, {} action items)",
        request.call_id,
        request.transcript.len(),
        response.action_items.len()
    );

    Ok(Json(response))
}
