pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::insights::handlers as insight_handlers;
use crate::interview::handlers as interview_handlers;
use crate::onboarding::handlers as onboarding_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Onboarding API
        .route(
            "/api/v1/onboarding",
            post(onboarding_handlers::handle_submit_onboarding),
        )
        .route(
            "/api/v1/onboarding/status",
            get(onboarding_handlers::handle_onboarding_status),
        )
        // Insights API
        .route(
            "/api/v1/insights",
            get(insight_handlers::handle_get_insights),
        )
        // Resume API
        .route(
            "/api/v1/resume",
            put(resume_handlers::handle_save_resume).get(resume_handlers::handle_get_resume),
        )
        .route(
            "/api/v1/resume/improve",
            post(resume_handlers::handle_improve_entry),
        )
        // Interview API
        .route(
            "/api/v1/interview/quiz",
            post(interview_handlers::handle_generate_quiz),
        )
        .route(
            "/api/v1/interview/results",
            post(interview_handlers::handle_save_result),
        )
        .route(
            "/api/v1/interview/assessments",
            get(interview_handlers::handle_list_assessments),
        )
        .with_state(state)
}
