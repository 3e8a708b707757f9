//! Wizard step sequencing.
//!
//! The modeller walks a user through a fixed linear sequence of steps. Steps
//! are not gated: any step can be visited directly, whether or not the ones
//! before it were completed.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::breadcrumb::BreadcrumbItem;
use crate::routes;

/// One step of the guided workflow, in sequence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Explore,
    BuildPipeline,
    Simulate,
    SkuRecommendations,
    CostQuestions,
    Summary,
    CalculateRoi,
}

impl WizardStep {
    /// All steps in the order the user walks through them
    pub const ALL: [WizardStep; 7] = [
        WizardStep::Explore,
        WizardStep::BuildPipeline,
        WizardStep::Simulate,
        WizardStep::SkuRecommendations,
        WizardStep::CostQuestions,
        WizardStep::Summary,
        WizardStep::CalculateRoi,
    ];

    pub fn route(&self) -> &'static str {
        match self {
            WizardStep::Explore => "/",
            WizardStep::BuildPipeline => "/build-pipeline",
            WizardStep::Simulate => "/simulate",
            WizardStep::SkuRecommendations => "/sku-recommendations",
            WizardStep::CostQuestions => "/cost-questions",
            WizardStep::Summary => "/summary",
            WizardStep::CalculateRoi => "/calculate-roi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Explore => "Explore",
            WizardStep::BuildPipeline => "Build Pipeline",
            WizardStep::Simulate => "Simulate",
            WizardStep::SkuRecommendations => "SKU Recommendations",
            WizardStep::CostQuestions => "Cost Questions",
            WizardStep::Summary => "Summary",
            WizardStep::CalculateRoi => "Calculate ROI",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Explore => "Describe the customer's AI use case and workload.",
            WizardStep::BuildPipeline => "Review the generated analysis and shape the inference pipeline.",
            WizardStep::Simulate => "Simulate the pipeline under the expected load profile.",
            WizardStep::SkuRecommendations => "Pick hardware SKUs from the recommended configurations.",
            WizardStep::CostQuestions => "Answer cost questions to estimate capital and operating spend.",
            WizardStep::Summary => "Assemble the proposal document from its sections.",
            WizardStep::CalculateRoi => "Compute the return on investment for the proposal.",
        }
    }

    /// 1-based position in the sequence
    pub fn ordinal(&self) -> usize {
        self.index() + 1
    }

    fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .unwrap_or_default()
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }

    /// Step at a 1-based position
    pub fn from_ordinal(ordinal: usize) -> Option<WizardStep> {
        ordinal
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn from_route(path: &str) -> Option<WizardStep> {
        let path = routes::normalize(path);
        Self::ALL.iter().copied().find(|s| s.route() == path)
    }

    /// Breadcrumb trail shown on this step's page
    pub fn breadcrumbs(&self) -> Vec<BreadcrumbItem> {
        routes::breadcrumbs_for(self.route()).unwrap_or_default()
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Tracks which step the user is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardNavigator {
    current: WizardStep,
}

impl Default for WizardNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardNavigator {
    pub fn new() -> Self {
        Self {
            current: WizardStep::Explore,
        }
    }

    pub fn current(&self) -> WizardStep {
        self.current
    }

    /// Advance one step; stays on the last step
    pub fn next(&mut self) -> WizardStep {
        if let Some(step) = self.current.next() {
            self.go_to(step);
        }
        self.current
    }

    /// Go back one step; stays on the first step
    pub fn previous(&mut self) -> WizardStep {
        if let Some(step) = self.current.previous() {
            self.go_to(step);
        }
        self.current
    }

    /// Jump straight to any step
    pub fn go_to(&mut self, step: WizardStep) {
        tracing::debug!(from = %self.current, to = %step, "Wizard step change");
        self.current = step;
    }

    pub fn is_first(&self) -> bool {
        self.current.previous().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.current.next().is_none()
    }

    /// (current ordinal, total steps)
    pub fn progress(&self) -> (usize, usize) {
        (self.current.ordinal(), WizardStep::ALL.len())
    }

    pub fn breadcrumbs(&self) -> Vec<BreadcrumbItem> {
        self.current.breadcrumbs()
    }
}
