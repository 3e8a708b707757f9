//! HTML page rendering.
//!
//! Every page is the layout shell (navigation sidebar + breadcrumb) around a
//! page body. Breadcrumbs come from the route table; the Summary step also
//! renders the proposal accordion.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde_json::{json, Value};

use crate::accordion::{Accordion, AccordionSection};
use crate::breadcrumb::{self, BreadcrumbItem};
use crate::routes::{self, PageKind, RouteEntry};
use crate::wizard::WizardStep;

const LAYOUT: &str = include_str!("templates/layout.hbs");
const STEP: &str = include_str!("templates/step.hbs");
const PAGE: &str = include_str!("templates/page.hbs");
const NOT_FOUND: &str = include_str!("templates/not_found.hbs");

pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        for (name, source) in [
            ("layout", LAYOUT),
            ("step", STEP),
            ("page", PAGE),
            ("not_found", NOT_FOUND),
        ] {
            handlebars
                .register_template_string(name, source)
                .with_context(|| format!("Failed to register template '{name}'"))?;
        }
        Ok(Self { handlebars })
    }

    /// Render the page for a route in the route table
    pub fn render_route(&self, entry: &RouteEntry, accordion: &Accordion) -> Result<String> {
        let body = match entry.kind {
            PageKind::Step(step) => self.render_step(entry, step, accordion)?,
            kind => self.render_info(entry, kind)?,
        };
        self.render_layout(entry.title, &entry.breadcrumbs(), entry.step(), &body)
    }

    pub fn render_not_found(&self, path: &str) -> Result<String> {
        let body = self
            .handlebars
            .render("not_found", &json!({ "path": path }))
            .context("Failed to render not found page")?;
        self.render_layout(
            "Not Found",
            &[BreadcrumbItem::link("Home", "/")],
            None,
            &body,
        )
    }

    fn render_step(
        &self,
        entry: &RouteEntry,
        step: WizardStep,
        accordion: &Accordion,
    ) -> Result<String> {
        let sections: Vec<Value> = if step == WizardStep::Summary {
            accordion.sections().iter().map(section_context).collect()
        } else {
            Vec::new()
        };

        let context = json!({
            "title": entry.title,
            "description": step.description(),
            "ordinal": step.ordinal(),
            "total": WizardStep::ALL.len(),
            "sections": sections,
            "previous": step.previous().map(step_link),
            "next": step.next().map(step_link),
        });

        self.handlebars
            .render("step", &context)
            .context("Failed to render step page")
    }

    fn render_info(&self, entry: &RouteEntry, kind: PageKind) -> Result<String> {
        let children: Vec<Value> = if entry.path == "/admin" {
            routes::admin_pages()
                .map(|r| json!({ "path": r.path, "title": r.title }))
                .collect()
        } else {
            Vec::new()
        };

        let context = json!({
            "title": entry.title,
            "description": info_description(entry, kind),
            "children": children,
        });

        self.handlebars
            .render("page", &context)
            .context("Failed to render page")
    }

    fn render_layout(
        &self,
        title: &str,
        trail: &[BreadcrumbItem],
        current: Option<WizardStep>,
        body: &str,
    ) -> Result<String> {
        let steps: Vec<Value> = WizardStep::ALL
            .iter()
            .map(|s| {
                json!({
                    "ordinal": s.ordinal(),
                    "label": s.label(),
                    "route": s.route(),
                    "current": Some(*s) == current,
                })
            })
            .collect();

        let context = json!({
            "title": title,
            "steps": steps,
            "breadcrumb": breadcrumb::render_html(trail),
            "body": body,
        });

        self.handlebars
            .render("layout", &context)
            .context("Failed to render layout")
    }
}

fn step_link(step: WizardStep) -> Value {
    json!({ "label": step.label(), "route": step.route() })
}

fn section_context(section: &AccordionSection) -> Value {
    json!({
        "id": section.id,
        "title": section.title,
        "content": section.content,
        "expanded": section.is_expanded(),
        "editing": section.is_editing(),
        "draft": section.state.draft(),
    })
}

fn info_description(entry: &RouteEntry, kind: PageKind) -> &'static str {
    match kind {
        PageKind::KnowledgeBase => "Reference material on workloads, hardware and sizing.",
        PageKind::KnowledgeGraphs => "Relationships between models, accelerators and SKUs.",
        PageKind::Admin => match entry.path {
            "/admin/users" => "Manage who can access the modeller.",
            "/admin/skus" => "Hardware SKUs offered in recommendations.",
            "/admin/settings" => "Application settings.",
            _ => "Administration.",
        },
        PageKind::Step(step) => step.description(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> PageRenderer {
        PageRenderer::new().unwrap()
    }

    #[test]
    fn test_step_page_has_breadcrumb_and_progress() {
        let entry = routes::lookup("/simulate").unwrap();
        let html = renderer()
            .render_route(entry, &Accordion::default())
            .unwrap();

        assert!(html.contains(r#"<a href="/build-pipeline">Build Pipeline</a>"#));
        assert!(html.contains(r#"<span aria-current="page">Simulate</span>"#));
        assert!(html.contains("Step 3 of 7"));
        assert!(html.contains(r#"href="/sku-recommendations""#));
        assert!(!html.contains("accordion-section\""));
    }

    #[test]
    fn test_summary_page_renders_sections() {
        let entry = routes::lookup("/summary").unwrap();
        let accordion = Accordion::default();
        let html = renderer().render_route(entry, &accordion).unwrap();

        for section in accordion.sections() {
            assert!(html.contains(&format!(r#"id="section-{}""#, section.id)));
        }
        // Only the first section is expanded initially
        assert_eq!(html.matches(r#"<div class="content">"#).count(), 1);
    }

    #[test]
    fn test_summary_page_shows_editor_when_editing() {
        let entry = routes::lookup("/summary").unwrap();
        let mut accordion = Accordion::default();
        let id = accordion.sections()[0].id.clone();
        accordion.toggle_edit(&id);
        accordion.edit_content(&id, "<b>draft</b>");

        let html = renderer().render_route(entry, &accordion).unwrap();
        assert!(html.contains("<textarea name=\"content\">&lt;b&gt;draft&lt;/b&gt;</textarea>"));
    }

    #[test]
    fn test_collapsed_section_being_edited_is_marked() {
        let entry = routes::lookup("/summary").unwrap();
        let mut accordion = Accordion::default();
        let id = accordion.sections()[1].id.clone();
        accordion.toggle_edit(&id);

        let html = renderer().render_route(entry, &accordion).unwrap();
        assert_eq!(html.matches(r#"<span class="editing">"#).count(), 1);
        // Still collapsed, so no editor yet
        assert!(!html.contains("<textarea"));
    }

    #[test]
    fn test_admin_page_lists_children() {
        let entry = routes::lookup("/admin").unwrap();
        let html = renderer()
            .render_route(entry, &Accordion::default())
            .unwrap();
        assert!(html.contains(r#"<a href="/admin/users">Users</a>"#));
        assert!(html.contains(r#"<a href="/admin/settings">Settings</a>"#));
    }

    #[test]
    fn test_not_found_page() {
        let html = renderer().render_not_found("/missing").unwrap();
        assert!(html.contains("/missing"));
        assert!(html.contains(r#"<a href="/">Home</a>"#));
    }
}
