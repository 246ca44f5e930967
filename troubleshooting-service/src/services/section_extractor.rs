use crate::models::{find_section, Document, SectionDescriptor};

/// Section name reported when the whole guide is returned.
pub const COMPLETE_SECTION: &str = "complete";

/// Result of resolving a section id against the guide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extract<'a> {
    /// No id, or an id outside the section table: the whole guide.
    Complete(&'a str),
    Section {
        descriptor: &'static SectionDescriptor,
        text: &'a str,
    },
    /// The id is known but its heading is absent from the guide.
    Missing(String),
}

impl Extract<'_> {
    pub fn content(&self) -> &str {
        match self {
            Extract::Complete(text) | Extract::Section { text, .. } => *text,
            Extract::Missing(message) => message.as_str(),
        }
    }

    pub fn descriptor(&self) -> Option<&'static SectionDescriptor> {
        match self {
            Extract::Section { descriptor, .. } => Some(*descriptor),
            _ => None,
        }
    }

    /// Short outcome label, used for metrics and logs.
    pub fn outcome(&self) -> &'static str {
        match self {
            Extract::Complete(_) => "complete",
            Extract::Section { .. } => "section",
            Extract::Missing(_) => "missing",
        }
    }
}

pub fn extract<'a>(document: &'a Document, section_id: Option<&str>) -> Extract<'a> {
    let Some(id) = section_id.filter(|id| !id.is_empty()) else {
        return Extract::Complete(document.content());
    };

    let Some(descriptor) = find_section(id) else {
        tracing::debug!(section = id, "Unknown section id, returning complete document");
        return Extract::Complete(document.content());
    };

    match document.section(descriptor.heading) {
        Some(text) => Extract::Section { descriptor, text },
        None => Extract::Missing(format!("Section \"{}\" not found", id)),
    }
}
