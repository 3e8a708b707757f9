//! Route handlers for the web server.

pub mod breadcrumbs;
pub mod health;
pub mod sections;
pub mod site;
pub mod steps;
