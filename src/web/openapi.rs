//! OpenAPI specification builder using utoipa.

use utoipa::OpenApi;

use crate::breadcrumb::BreadcrumbItem;
use crate::web::dto::{
    BreadcrumbsResponse, DraftRequest, HealthResponse, SectionResponse, StepResponse,
};
use crate::web::error::ErrorResponse;
use crate::wizard::WizardStep;

/// OpenAPI documentation for the modeller JSON API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Compute Modeller API",
        description = "Wizard steps, breadcrumb trails and proposal sections of the AI Compute Modeller.",
        license(name = "MIT")
    ),
    paths(
        crate::web::routes::health::health,
        crate::web::routes::steps::list,
        crate::web::routes::breadcrumbs::get_trail,
        crate::web::routes::sections::list,
        crate::web::routes::sections::get_one,
        crate::web::routes::sections::toggle_expand,
        crate::web::routes::sections::toggle_edit,
        crate::web::routes::sections::update_draft,
        crate::web::routes::sections::save,
    ),
    components(
        schemas(
            HealthResponse,
            StepResponse,
            WizardStep,
            BreadcrumbItem,
            BreadcrumbsResponse,
            SectionResponse,
            DraftRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Wizard", description = "Wizard steps and breadcrumb trails"),
        (name = "Sections", description = "Proposal document sections")
    )
)]
pub struct ApiDoc;
