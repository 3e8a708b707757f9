//! Shared state for the web server.

use std::sync::Arc;

use anyhow::Result;
use tokio::sync::RwLock;

use crate::accordion::Accordion;
use crate::config::Config;
use crate::web::pages::PageRenderer;

/// State shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// Proposal sections; one instance for the lifetime of the process
    pub accordion: Arc<RwLock<Accordion>>,
    pub pages: Arc<PageRenderer>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let accordion = Accordion::new(config.proposal.sections.clone());
        tracing::debug!(sections = accordion.len(), "Proposal sections loaded");

        Ok(Self {
            accordion: Arc::new(RwLock::new(accordion)),
            pages: Arc::new(PageRenderer::new()?),
            config: Arc::new(config),
        })
    }
}
