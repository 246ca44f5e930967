use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Outcome of reading the backing file at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loaded,
    /// The file could not be read; content is a placeholder.
    Fallback { reason: String },
}

/// Byte range of one `## ` section, heading line included.
#[derive(Debug, Clone)]
struct SectionSpan {
    key: String,
    start: usize,
    end: usize,
}

/// The troubleshooting guide as held in memory for the lifetime of the
/// process. Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Document {
    content: String,
    source: PathBuf,
    loaded_at: DateTime<Utc>,
    state: LoadState,
    sections: Vec<SectionSpan>,
}

impl Document {
    pub fn from_text(source: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let content = content.into();
        let sections = index_sections(&content);
        Self {
            content,
            source: source.into(),
            loaded_at: Utc::now(),
            state: LoadState::Loaded,
            sections,
        }
    }

    pub fn fallback(
        source: impl Into<PathBuf>,
        placeholder: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        let content = placeholder.into();
        let sections = index_sections(&content);
        Self {
            content,
            source: source.into(),
            loaded_at: Utc::now(),
            state: LoadState::Fallback {
                reason: reason.into(),
            },
            sections,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    /// Text of the first `## <heading>` section, compared case-insensitively,
    /// running up to the next `## ` line or the end of the document.
    pub fn section(&self, heading: &str) -> Option<&str> {
        let key = heading_key(heading);
        self.sections
            .iter()
            .find(|s| s.key == key)
            .map(|s| &self.content[s.start..s.end])
    }

    /// Labels of every `## ` heading, in document order.
    pub fn headings(&self) -> impl Iterator<Item = &str> + '_ {
        self.sections.iter().map(|s| {
            let line = self.content[s.start..s.end]
                .lines()
                .next()
                .unwrap_or_default();
            line.strip_prefix("## ").unwrap_or(line).trim()
        })
    }
}

fn heading_key(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Finds every line that opens with exactly two hashes and a space. Deeper
/// headings (`### `) stay inside the section that contains them.
fn index_sections(content: &str) -> Vec<SectionSpan> {
    let mut starts = Vec::new();
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if let Some(label) = line.strip_prefix("## ") {
            starts.push((offset, heading_key(label)));
        }
        offset += line.len();
    }

    let ends = starts
        .iter()
        .skip(1)
        .map(|(start, _)| *start)
        .chain(std::iter::once(content.len()));

    starts
        .iter()
        .zip(ends)
        .map(|((start, key), end)| SectionSpan {
            key: key.clone(),
            start: *start,
            end,
        })
        .collect()
}
