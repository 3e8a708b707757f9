//! Compute Modeller: a guided workflow for sizing AI compute deployments.
//!
//! The library holds the wizard step sequence, breadcrumb trails driven by a
//! single route table, and the proposal accordion. Both front ends (the web
//! server and the terminal UI) sit on top of the same core.

pub mod accordion;
pub mod app;
pub mod breadcrumb;
pub mod config;
pub mod logging;
pub mod routes;
pub mod ui;
pub mod web;
pub mod wizard;

pub use accordion::{Accordion, AccordionSection, SectionSpec, SectionState};
pub use breadcrumb::{BreadcrumbItem, Segment};
pub use config::Config;
pub use routes::RouteError;
pub use wizard::{WizardNavigator, WizardStep};
