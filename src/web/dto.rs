//! Data Transfer Objects for the JSON API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::accordion::{AccordionSection, SectionState};
use crate::breadcrumb::BreadcrumbItem;
use crate::wizard::WizardStep;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// One wizard step
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StepResponse {
    pub key: WizardStep,
    pub ordinal: usize,
    pub label: String,
    pub route: String,
    pub description: String,
}

impl From<WizardStep> for StepResponse {
    fn from(step: WizardStep) -> Self {
        Self {
            key: step,
            ordinal: step.ordinal(),
            label: step.label().to_string(),
            route: step.route().to_string(),
            description: step.description().to_string(),
        }
    }
}

/// Breadcrumb trail for a route
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BreadcrumbsResponse {
    pub path: String,
    pub items: Vec<BreadcrumbItem>,
    /// Plain-text rendering, e.g. `Home / [Summary]`
    pub text: String,
}

/// One proposal section
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SectionResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    /// collapsed, expanded, collapsed_editing or expanded_editing
    pub state: String,
    pub expanded: bool,
    pub editing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,
}

impl From<&AccordionSection> for SectionResponse {
    fn from(section: &AccordionSection) -> Self {
        let state = match section.state {
            SectionState::Collapsed => "collapsed",
            SectionState::Expanded => "expanded",
            SectionState::CollapsedEditing { .. } => "collapsed_editing",
            SectionState::ExpandedEditing { .. } => "expanded_editing",
        };
        Self {
            id: section.id.clone(),
            title: section.title.clone(),
            content: section.content.clone(),
            state: state.to_string(),
            expanded: section.is_expanded(),
            editing: section.is_editing(),
            draft: section.state.draft().map(str::to_string),
        }
    }
}

/// Latest value typed into a section editor
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DraftRequest {
    pub content: String,
}
