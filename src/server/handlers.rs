use super::types::{ErrorResponse, ImageRequest, ImageResponse, PlanRequest};
use crate::{Error, gemini::GenerativeClient, image, plan};
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

const GENERIC_PLAN_ERROR: &str = "Failed to generate plan. Please try again.";
const SAFETY_PLAN_ERROR: &str = "Plan request was blocked by the content safety filter";

#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<dyn GenerativeClient>,
}

/// `POST /api/generate-plan`. Relays the request to the model and passes
/// the extracted JSON through untouched; the plan schema is asserted by
/// the prompt, not enforced here.
pub async fn generate_plan(
    State(state): State<AppState>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        "Generating plan for: {} (goal: {})",
        request.name, request.goal
    );

    let prompt = plan::build_prompt(&request);

    let text = match state.gemini.generate_content(&prompt).await {
        Ok(text) => text,
        Err(Error::SafetyBlocked { reason }) => {
            error!("Plan request blocked by safety filter: {}", reason);
            return Err(plan_error(SAFETY_PLAN_ERROR));
        }
        Err(e) => {
            error!("Gemini call failed: {}", e);
            return Err(plan_error(GENERIC_PLAN_ERROR));
        }
    };

    match plan::extract_json(&text) {
        Some(value) => Ok(Json(value)),
        None => {
            error!("Could not parse JSON from model response");
            Err(plan_error(GENERIC_PLAN_ERROR))
        }
    }
}

/// `POST /api/generate-image`. Builds the provider URL; the client fetches
/// the image itself, so no outbound call happens here.
pub async fn generate_image(
    Json(request): Json<ImageRequest>,
) -> Result<Json<ImageResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.prompt.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Prompt is required".to_string(),
            }),
        ));
    }

    Ok(Json(ImageResponse {
        image_url: image::build_image_url(&request.prompt),
    }))
}

fn plan_error(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
