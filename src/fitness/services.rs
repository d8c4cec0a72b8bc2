use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use super::dto::{PlanResponse, UserProfile};
use crate::error::AppError;
use crate::model::ModelPrompt;
use crate::prompt::{fitness_plan_prompt, PLAN_SECTION_TITLES, SECTION_DELIMITER};
use crate::sections::section;
use crate::state::AppState;

pub async fn generate_plan_text(st: &AppState, profile: &UserProfile) -> Result<String, AppError> {
    let prompt = ModelPrompt::text(fitness_plan_prompt(profile));
    let text = st.model.generate(&prompt).await?;
    info!(goal = %profile.goal, len = text.len(), "plan generated");
    Ok(text)
}

pub async fn generate_plan(st: &AppState, profile: &UserProfile) -> Result<PlanResponse, AppError> {
    let raw = generate_plan_text(st, profile).await?;
    let rendered = section(&raw, SECTION_DELIMITER, &PLAN_SECTION_TITLES);
    Ok(PlanResponse {
        id: Uuid::new_v4(),
        generated_at: OffsetDateTime::now_utc(),
        model: st.config.gemini.model.clone(),
        raw,
        rendered,
    })
}
