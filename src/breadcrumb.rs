//! Breadcrumb trail rendering.
//!
//! A trail is an ordered list of [`BreadcrumbItem`]s. Every item renders as a
//! link except the one flagged `active`, which renders as plain text for the
//! current page. Consecutive items are separated by a visual separator.
//!
//! Rendering never fails: an empty list renders nothing, and trails with zero
//! or several active items still render (each active item becomes text).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Separator used by the HTML and plain-text renderers
pub const SEPARATOR: &str = "/";

/// One entry of a breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BreadcrumbItem {
    pub label: String,
    pub href: String,
    #[serde(default)]
    pub active: bool,
}

impl BreadcrumbItem {
    /// A clickable entry
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: false,
        }
    }

    /// The entry for the page being displayed
    pub fn current(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: true,
        }
    }
}

/// A rendered piece of a trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Link { label: String, href: String },
    Current { label: String },
    Separator,
}

/// Turn a trail into its rendered segments, preserving input order.
pub fn segments(items: &[BreadcrumbItem]) -> Vec<Segment> {
    let mut out = Vec::with_capacity(items.len().saturating_mul(2));

    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(Segment::Separator);
        }
        if item.active {
            out.push(Segment::Current {
                label: item.label.clone(),
            });
        } else {
            out.push(Segment::Link {
                label: item.label.clone(),
                href: item.href.clone(),
            });
        }
    }

    out
}

/// Render a trail as an HTML `<nav>` element.
///
/// Labels and hrefs are escaped. An empty trail renders as an empty string.
pub fn render_html(items: &[BreadcrumbItem]) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<nav class="breadcrumb" aria-label="Breadcrumb"><ol>"#);
    for segment in segments(items) {
        match segment {
            Segment::Link { label, href } => {
                html.push_str(&format!(
                    r#"<li><a href="{}">{}</a></li>"#,
                    handlebars::html_escape(&href),
                    handlebars::html_escape(&label)
                ));
            }
            Segment::Current { label } => {
                html.push_str(&format!(
                    r#"<li><span aria-current="page">{}</span></li>"#,
                    handlebars::html_escape(&label)
                ));
            }
            Segment::Separator => {
                html.push_str(&format!(
                    r#"<li class="separator" aria-hidden="true">{SEPARATOR}</li>"#
                ));
            }
        }
    }
    html.push_str("</ol></nav>");
    html
}

/// Render a trail as a single line of plain text.
///
/// The current item is wrapped in brackets, e.g. `Home / [Summary]`.
pub fn render_text(items: &[BreadcrumbItem]) -> String {
    segments(items)
        .into_iter()
        .map(|segment| match segment {
            Segment::Link { label, .. } => label,
            Segment::Current { label } => format!("[{label}]"),
            Segment::Separator => SEPARATOR.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
