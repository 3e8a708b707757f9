//! Route table: the one place that knows every page and its breadcrumb trail.
//!
//! Each row names the page's path, its breadcrumb label, its page title and
//! the ancestors shown before it in the trail. The trail for a route is the
//! ancestors as links followed by the route itself as the active entry.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

use crate::breadcrumb::BreadcrumbItem;
use crate::wizard::WizardStep;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
}

/// What kind of page a route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Step(WizardStep),
    KnowledgeBase,
    KnowledgeGraphs,
    Admin,
}

#[derive(Debug)]
pub struct RouteEntry {
    pub path: &'static str,
    /// Label used for this page in breadcrumb trails
    pub label: &'static str,
    /// Heading shown on the page itself
    pub title: &'static str,
    pub parents: &'static [(&'static str, &'static str)],
    pub kind: PageKind,
}

impl RouteEntry {
    pub fn breadcrumbs(&self) -> Vec<BreadcrumbItem> {
        self.parents
            .iter()
            .map(|(label, href)| BreadcrumbItem::link(*label, *href))
            .chain(std::iter::once(BreadcrumbItem::current(self.label, self.path)))
            .collect()
    }

    pub fn step(&self) -> Option<WizardStep> {
        match self.kind {
            PageKind::Step(step) => Some(step),
            _ => None,
        }
    }
}

const HOME: (&str, &str) = ("Home", "/");
const BUILD: (&str, &str) = ("Build Pipeline", "/build-pipeline");
const SIMULATE: (&str, &str) = ("Simulate", "/simulate");
const SKUS: (&str, &str) = ("SKU Recommendations", "/sku-recommendations");
const COSTS: (&str, &str) = ("Cost Questions", "/cost-questions");
const SUMMARY: (&str, &str) = ("Summary", "/summary");
const ADMIN: (&str, &str) = ("Admin", "/admin");

pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        label: "Home",
        title: "Explore",
        parents: &[],
        kind: PageKind::Step(WizardStep::Explore),
    },
    RouteEntry {
        path: "/build-pipeline",
        label: "Build Pipeline",
        title: "Build Pipeline",
        parents: &[HOME],
        kind: PageKind::Step(WizardStep::BuildPipeline),
    },
    RouteEntry {
        path: "/simulate",
        label: "Simulate",
        title: "Simulate",
        parents: &[HOME, BUILD],
        kind: PageKind::Step(WizardStep::Simulate),
    },
    RouteEntry {
        path: "/sku-recommendations",
        label: "SKU Recommendations",
        title: "SKU Recommendations",
        parents: &[HOME, BUILD, SIMULATE],
        kind: PageKind::Step(WizardStep::SkuRecommendations),
    },
    RouteEntry {
        path: "/cost-questions",
        label: "Cost Questions",
        title: "Cost Questions",
        parents: &[HOME, BUILD, SIMULATE, SKUS],
        kind: PageKind::Step(WizardStep::CostQuestions),
    },
    RouteEntry {
        path: "/summary",
        label: "Summary",
        title: "Summary",
        parents: &[HOME, BUILD, SIMULATE, SKUS, COSTS],
        kind: PageKind::Step(WizardStep::Summary),
    },
    RouteEntry {
        path: "/calculate-roi",
        label: "Calculate ROI",
        title: "Calculate ROI",
        parents: &[HOME, BUILD, SIMULATE, SKUS, COSTS, SUMMARY],
        kind: PageKind::Step(WizardStep::CalculateRoi),
    },
    RouteEntry {
        path: "/knowledge-base",
        label: "Knowledge Base",
        title: "Knowledge Base",
        parents: &[HOME],
        kind: PageKind::KnowledgeBase,
    },
    RouteEntry {
        path: "/knowledge-graphs",
        label: "Knowledge Graphs",
        title: "Knowledge Graphs",
        parents: &[HOME],
        kind: PageKind::KnowledgeGraphs,
    },
    RouteEntry {
        path: "/admin",
        label: "Admin",
        title: "Admin",
        parents: &[HOME],
        kind: PageKind::Admin,
    },
    RouteEntry {
        path: "/admin/users",
        label: "Users",
        title: "Users",
        parents: &[HOME, ADMIN],
        kind: PageKind::Admin,
    },
    RouteEntry {
        path: "/admin/skus",
        label: "SKU Catalog",
        title: "SKU Catalog",
        parents: &[HOME, ADMIN],
        kind: PageKind::Admin,
    },
    RouteEntry {
        path: "/admin/settings",
        label: "Settings",
        title: "Settings",
        parents: &[HOME, ADMIN],
        kind: PageKind::Admin,
    },
];

/// Path → route index over [`ROUTES`]
static ROUTE_INDEX: Lazy<HashMap<&'static str, &'static RouteEntry>> =
    Lazy::new(|| ROUTES.iter().map(|r| (r.path, r)).collect());

/// Strip query/fragment and any trailing slash (except for the root)
pub fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

pub fn lookup(path: &str) -> Result<&'static RouteEntry, RouteError> {
    ROUTE_INDEX
        .get(normalize(path))
        .copied()
        .ok_or_else(|| RouteError::UnknownRoute(path.to_string()))
}

pub fn breadcrumbs_for(path: &str) -> Result<Vec<BreadcrumbItem>, RouteError> {
    lookup(path).map(RouteEntry::breadcrumbs)
}

/// Admin sub-pages, in display order
pub fn admin_pages() -> impl Iterator<Item = &'static RouteEntry> {
    ROUTES
        .iter()
        .filter(|r| r.kind == PageKind::Admin && r.path != "/admin")
}
