use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::charts::{example_charts, ChartSet};
use super::dto::{ExportRequest, PlanRequest, PlanResponse, UserProfile};
use super::services::{generate_plan, generate_plan_text};
use crate::error::AppError;
use crate::export::{render_pdf, EXPORT_FILENAME};
use crate::state::AppState;

const PDF_TITLE: &str = "Personalized Fitness Plan";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/fitness/plan", post(create_plan))
        .route("/fitness/plan/pdf", post(create_plan_pdf))
        .route("/fitness/export", post(export_plan))
        .route("/fitness/charts", get(charts))
}

fn profile_from(payload: Result<Json<PlanRequest>, JsonRejection>) -> Result<UserProfile, AppError> {
    let Json(req) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    UserProfile::try_from(req)
}

fn pdf_download(bytes: Vec<u8>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        bytes,
    )
}

#[instrument(skip(state, payload))]
pub async fn create_plan(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<Json<PlanResponse>, AppError> {
    let profile = profile_from(payload)?;
    let plan = generate_plan(&state, &profile).await?;
    info!(plan_id = %plan.id, "plan served");
    Ok(Json(plan))
}

#[instrument(skip(state, payload))]
pub async fn create_plan_pdf(
    State(state): State<AppState>,
    payload: Result<Json<PlanRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let profile = profile_from(payload)?;
    let text = generate_plan_text(&state, &profile).await?;
    let bytes = render_pdf(PDF_TITLE, &text)?;
    Ok(pdf_download(bytes))
}

#[instrument(skip(payload))]
pub async fn export_plan(
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let bytes = render_pdf(PDF_TITLE, &req.text)?;
    Ok(pdf_download(bytes))
}

pub async fn charts() -> Json<ChartSet> {
    Json(example_charts())
}
