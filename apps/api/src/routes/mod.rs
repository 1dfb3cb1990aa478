pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::call_summary::handlers::handle_generate_call_summary;
use crate::config::Service;
use crate::email::handlers::handle_generate_email;
use crate::sales_insights::handlers::{
    handle_generate_case_responses, handle_generate_opportunity_responses,
};
use crate::state::AppState;

/// Builds the router for the service selected in `state.config`.
pub fn build_router(state: AppState) -> Router {
    let router = Router::new().route("/healthz", get(health::health_handler));

    let router = match state.config.service {
        Service::CallSummaries => {
            router.route("/generate-call-summary", post(handle_generate_call_summary))
        }
        Service::EmailComposer => router.route("/generate-email", post(handle_generate_email)),
        Service::SalesInsights => router
            .route(
                "/generate-opportunity-responses",
                post(handle_generate_opportunity_responses),
            )
            .route(
                "/generate-case-responses",
                post(handle_generate_case_responses),
            ),
    };

    router.with_state(state)
}
