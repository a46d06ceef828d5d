// ABOUTME: Document query capability used by the export pipeline.
// ABOUTME: Defines the Dom trait and re-exports the scraper-backed HtmlDom implementation.

//! DOM capability for table extraction.
//!
//! The pipeline never touches a concrete HTML tree. It only needs to find one
//! element, find all elements, read trimmed text, and describe an element for
//! disambiguation prompts. Anything implementing [`Dom`] can be exported from,
//! which keeps the extraction logic testable against an in-memory fake.

pub mod html;

pub use html::HtmlDom;

use crate::error::Result;

/// Minimal read-only query interface over a document tree.
///
/// `scope = None` queries the whole document; `Some(node)` restricts matches
/// to descendants of `node`. Matches are returned in document order.
pub trait Dom {
    /// Cheap handle to an element of the tree.
    type Node: Copy + std::fmt::Debug;

    /// First element matching `selector`, if any.
    fn find_one(&self, scope: Option<Self::Node>, selector: &str) -> Result<Option<Self::Node>> {
        Ok(self.find_all(scope, selector)?.into_iter().next())
    }

    /// Every element matching `selector`.
    fn find_all(&self, scope: Option<Self::Node>, selector: &str) -> Result<Vec<Self::Node>>;

    /// Text content of `node` and its descendants, trimmed of surrounding whitespace.
    fn text(&self, node: Self::Node) -> String;

    /// Short human-readable label: tag name plus the nearest identifying ancestor.
    fn describe(&self, node: Self::Node) -> String;
}
