//! Wizard step listing.

use axum::Json;

use crate::web::dto::StepResponse;
use crate::wizard::WizardStep;

/// List the wizard steps in order
#[utoipa::path(
    get,
    path = "/api/v1/steps",
    tag = "Wizard",
    responses(
        (status = 200, description = "Wizard steps in sequence order", body = Vec<StepResponse>)
    )
)]
pub async fn list() -> Json<Vec<StepResponse>> {
    Json(WizardStep::ALL.into_iter().map(StepResponse::from).collect())
}
