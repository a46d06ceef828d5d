// ABOUTME: scraper-backed implementation of the Dom capability.
// ABOUTME: Parses an HTML document once and answers selector queries with ego-tree node ids.

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};

use crate::dom::Dom;
use crate::error::{ExportError, Result};

/// A parsed HTML document.
pub struct HtmlDom {
    html: Html,
}

impl HtmlDom {
    /// Parse a full HTML document.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id).and_then(ElementRef::wrap)
    }
}

impl std::fmt::Debug for HtmlDom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HtmlDom").finish_non_exhaustive()
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| {
        ExportError::selector("select", selector).with_source(anyhow::anyhow!("{}", e))
    })
}

impl Dom for HtmlDom {
    type Node = NodeId;

    fn find_all(&self, scope: Option<NodeId>, selector: &str) -> Result<Vec<NodeId>> {
        let compiled = compile(selector)?;
        let found = match scope {
            None => self.html.select(&compiled).map(|el| el.id()).collect(),
            Some(id) => match self.element(id) {
                Some(el) => el.select(&compiled).map(|el| el.id()).collect(),
                None => Vec::new(),
            },
        };
        Ok(found)
    }

    fn text(&self, node: NodeId) -> String {
        self.element(node)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default()
    }

    fn describe(&self, node: NodeId) -> String {
        let Some(el) = self.element(node) else {
            return String::new();
        };
        let tag = format!("<{}>", el.value().name().to_ascii_uppercase());

        let mut ancestors = el.ancestors().filter_map(ElementRef::wrap).peekable();
        let parent_tag = ancestors
            .peek()
            .map(|p| p.value().name().to_ascii_uppercase());

        let identified = ancestors.find_map(|a| {
            let value = a.value();
            if let Some(id) = value.id().filter(|id| !id.is_empty()) {
                return Some(format!("#{}", id));
            }
            let classes: Vec<&str> = value.classes().collect();
            if classes.is_empty() {
                None
            } else {
                Some(format!(".{}", classes.join(".")))
            }
        });

        match identified.or(parent_tag) {
            Some(context) => format!("{} (parent: {})", tag, context),
            None => tag,
        }
    }
}
