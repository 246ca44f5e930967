pub mod document_store;
pub mod format_converter;
pub mod metrics;
pub mod section_extractor;

pub use document_store::{load_document, DOCUMENT_UNAVAILABLE};
pub use format_converter::to_html;
pub use self::metrics::{get_metrics, init_metrics};
pub use section_extractor::{extract, Extract, COMPLETE_SECTION};
