use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::Utc;
use tracing::info;

use crate::errors::AppError;
use crate::sales_insights::models::{
    Case, CaseInsightsResponse, Opportunity, OpportunityInsightsResponse,
};
use crate::sales_insights::parser::{parse_case_insight, parse_opportunity_insight};
use crate::sales_insights::prompts::{build_case_prompt, build_opportunity_prompt};
use crate::state::AppState;

/// POST /generate-opportunity-responses
///
/// One completion per opportunity, in input order. The first failed call
/// fails the whole batch; no partial results are returned.
pub async fn handle_generate_opportunity_responses(
    State(state): State<AppState>,
    payload: Result<Json<Vec<Opportunity>>, JsonRejection>,
) -> Result<Json<OpportunityInsightsResponse>, AppError> {
    let Json(opportunities) = payload?;

    let mut insights = Vec::with_capacity(opportunities.len());
    for opp in &opportunities {
        let text = state.llm.complete(&build_opportunity_prompt(opp)).await?;
        insights.push(parse_opportunity_insight(&text, opp));
    }

    info!("Generated insights for {} opportunities", insights.len());

    Ok(Json(OpportunityInsightsResponse {
        opportunities: insights,
    }))
}

/// POST /generate-case-responses
///
/// Same batch semantics as opportunities.
pub async fn handle_generate_case_responses(
    State(state): State<AppState>,
    payload: Result<Json<Vec<Case>>, JsonRejection>,
) -> Result<Json<CaseInsightsResponse>, AppError> {
    let Json(cases) = payload?;

    let mut insights = Vec::with_capacity(cases.len());
    for case in &cases {
        let text = state.llm.complete(&build_case_prompt(case)).await?;
        insights.push(parse_case_insight(&text, case, Utc::now()));
    }

    info!("Generated insights for {} cases", insights.len());

    Ok(Json(CaseInsightsResponse { cases: insights }))
}
