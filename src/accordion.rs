//! Proposal document sections with expand/collapse and edit/view toggles.
//!
//! Each section is in exactly one of four states:
//!
//! | state              | expanded | editing |
//! |--------------------|----------|---------|
//! | `Collapsed`        | no       | no      |
//! | `Expanded`         | yes      | no      |
//! | `CollapsedEditing` | no       | yes     |
//! | `ExpandedEditing`  | yes      | yes     |
//!
//! Expansion and editing toggle independently. Editing carries a draft that
//! only replaces the section content on [`Accordion::save_content`].

use serde::{Deserialize, Serialize};

/// State of a single accordion section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SectionState {
    Collapsed,
    Expanded,
    CollapsedEditing { draft: String },
    ExpandedEditing { draft: String },
}

impl SectionState {
    pub fn is_expanded(&self) -> bool {
        matches!(
            self,
            SectionState::Expanded | SectionState::ExpandedEditing { .. }
        )
    }

    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            SectionState::CollapsedEditing { .. } | SectionState::ExpandedEditing { .. }
        )
    }

    /// Pending edit, if the section is being edited
    pub fn draft(&self) -> Option<&str> {
        match self {
            SectionState::CollapsedEditing { draft } | SectionState::ExpandedEditing { draft } => {
                Some(draft)
            }
            SectionState::Collapsed | SectionState::Expanded => None,
        }
    }

    /// Collapsed <-> Expanded, editing state (and draft) untouched
    fn toggled_expand(self) -> Self {
        match self {
            SectionState::Collapsed => SectionState::Expanded,
            SectionState::Expanded => SectionState::Collapsed,
            SectionState::CollapsedEditing { draft } => SectionState::ExpandedEditing { draft },
            SectionState::ExpandedEditing { draft } => SectionState::CollapsedEditing { draft },
        }
    }

    /// Viewing -> Editing seeded with `content`; Editing -> Viewing dropping the draft
    fn toggled_edit(self, content: &str) -> Self {
        match self {
            SectionState::Collapsed => SectionState::CollapsedEditing {
                draft: content.to_string(),
            },
            SectionState::Expanded => SectionState::ExpandedEditing {
                draft: content.to_string(),
            },
            SectionState::CollapsedEditing { .. } => SectionState::Collapsed,
            SectionState::ExpandedEditing { .. } => SectionState::Expanded,
        }
    }

    /// Leave editing, returning the draft
    fn finish_edit(self) -> (Self, Option<String>) {
        match self {
            SectionState::CollapsedEditing { draft } => (SectionState::Collapsed, Some(draft)),
            SectionState::ExpandedEditing { draft } => (SectionState::Expanded, Some(draft)),
            viewing => (viewing, None),
        }
    }
}

/// A named, collapsible block of proposal content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionSection {
    pub id: String,
    pub title: String,
    pub content: String,
    pub state: SectionState,
}

impl AccordionSection {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            state: SectionState::Collapsed,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    fn replace_state(&mut self, f: impl FnOnce(SectionState) -> SectionState) {
        let state = std::mem::replace(&mut self.state, SectionState::Collapsed);
        self.state = f(state);
    }
}

/// Literal definition of a section, as found in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Built-in proposal document outline
pub fn default_sections() -> Vec<SectionSpec> {
    [
        (
            "executive-summary",
            "Executive Summary",
            "Summary of the proposed AI compute deployment and its expected business impact.",
        ),
        (
            "use-case",
            "Use Case",
            "The workload described during Explore and the pipeline shape chosen in Build Pipeline.",
        ),
        (
            "hardware",
            "Recommended Hardware",
            "SKUs selected on the SKU Recommendations step.",
        ),
        (
            "costs",
            "Cost Estimate",
            "Capital and operating costs gathered on the Cost Questions step.",
        ),
        (
            "roi",
            "ROI Projection",
            "Payback period and return projected on the Calculate ROI step.",
        ),
        (
            "next-steps",
            "Next Steps",
            "Proof of concept scope, owners and timeline.",
        ),
    ]
    .into_iter()
    .map(|(id, title, content)| SectionSpec {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    })
    .collect()
}

/// Ordered collection of sections, keyed by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accordion {
    sections: Vec<AccordionSection>,
}

impl Default for Accordion {
    fn default() -> Self {
        Self::new(default_sections())
    }
}

impl Accordion {
    /// Build the accordion: first section expanded, the rest collapsed.
    ///
    /// Later duplicates of an id are dropped.
    pub fn new(specs: Vec<SectionSpec>) -> Self {
        let mut sections: Vec<AccordionSection> = Vec::with_capacity(specs.len());

        for spec in specs {
            if sections.iter().any(|s| s.id == spec.id) {
                tracing::warn!(section = %spec.id, "Duplicate accordion section id, skipping");
                continue;
            }
            sections.push(AccordionSection::new(spec.id, spec.title, spec.content));
        }

        if let Some(first) = sections.first_mut() {
            first.state = SectionState::Expanded;
        }

        Self { sections }
    }

    pub fn sections(&self) -> &[AccordionSection] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&AccordionSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut AccordionSection> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    /// Collapsed <-> Expanded for one section
    pub fn toggle_expand(&mut self, id: &str) -> Option<&AccordionSection> {
        let section = self.get_mut(id)?;
        section.replace_state(SectionState::toggled_expand);
        tracing::debug!(section = %id, expanded = section.is_expanded(), "Toggled expand");
        Some(&*section)
    }

    /// Viewing <-> Editing for one section.
    ///
    /// Entering editing seeds the draft with the current content; leaving it
    /// this way discards the draft.
    pub fn toggle_edit(&mut self, id: &str) -> Option<&AccordionSection> {
        let section = self.get_mut(id)?;
        let content = section.content.clone();
        section.replace_state(|state| state.toggled_edit(&content));
        tracing::debug!(section = %id, editing = section.is_editing(), "Toggled edit");
        Some(&*section)
    }

    /// Record the latest edit value. No-op unless the section is being edited.
    pub fn edit_content(&mut self, id: &str, value: impl Into<String>) -> Option<&AccordionSection> {
        let section = self.get_mut(id)?;
        match &mut section.state {
            SectionState::CollapsedEditing { draft } | SectionState::ExpandedEditing { draft } => {
                *draft = value.into();
            }
            SectionState::Collapsed | SectionState::Expanded => {}
        }
        Some(&*section)
    }

    /// Commit the draft as the section content and return to viewing.
    /// No-op unless the section is being edited.
    pub fn save_content(&mut self, id: &str) -> Option<&AccordionSection> {
        let section = self.get_mut(id)?;
        let state = std::mem::replace(&mut section.state, SectionState::Collapsed);
        let (state, draft) = state.finish_edit();
        section.state = state;
        if let Some(draft) = draft {
            section.content = draft;
            tracing::debug!(section = %id, "Saved section content");
        }
        Some(&*section)
    }
}
