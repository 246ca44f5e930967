pub mod document;
pub mod section;

pub use document::{Document, LoadState};
pub use section::{find_section, SectionDescriptor, SECTIONS};
