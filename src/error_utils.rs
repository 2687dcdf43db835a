//! Shared error utilities

use miette::{NamedSource, SourceSpan};
use std::path::Path;

/// Create a NamedSource labelled with the file it was read from
pub fn create_named_source(path: &Path, content: String) -> NamedSource<String> {
    NamedSource::new(path.display().to_string(), content).with_language("yaml")
}

/// Span of a single byte at `offset`, clamped to the end of `content`
pub fn point_span(content: &str, offset: usize) -> SourceSpan {
    let offset = offset.min(content.len());
    let length = usize::from(offset < content.len());
    (offset, length).into()
}
