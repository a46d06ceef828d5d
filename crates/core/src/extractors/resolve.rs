// ABOUTME: Resolves the table element and the row container from user-supplied selectors.
// ABOUTME: Containers are searched document-wide; several matches trigger an index prompt.

use tracing::info;

use crate::dom::Dom;
use crate::error::{ExportError, Result};
use crate::prompt::{Prompt, PromptKey, Prompter};

/// First element matching `selector`.
pub fn resolve_table<D: Dom>(dom: &D, selector: &str) -> Result<D::Node> {
    dom.find_one(None, selector)?.ok_or_else(|| {
        ExportError::not_found(
            "resolve table",
            format!("no table matches selector \"{}\"", selector),
        )
    })
}

/// Every element matching `selector` anywhere in the document.
///
/// Not scoped to the table: virtualized grids often render their rows into a
/// sibling container outside the `<table>` markup.
pub fn find_containers<D: Dom>(dom: &D, selector: &str) -> Result<Vec<D::Node>> {
    let found = dom.find_all(None, selector)?;
    if found.is_empty() {
        return Err(ExportError::not_found(
            "resolve container",
            format!("no row container matches selector \"{}\" in the document", selector),
        ));
    }
    Ok(found)
}

/// Parses a zero-based container choice bounded to `[0, count)`.
pub fn parse_choice(input: &str, count: usize) -> Option<usize> {
    input.trim().parse::<usize>().ok().filter(|&i| i < count)
}

/// Finds the row container, asking the user to pick one when several match.
pub fn resolve_container<D: Dom, P: Prompter>(
    dom: &D,
    selector: &str,
    prompter: &mut P,
) -> Result<D::Node> {
    let candidates = find_containers(dom, selector)?;
    if candidates.len() == 1 {
        info!("selected the only container matching {}", selector);
        return Ok(candidates[0]);
    }

    info!(
        "found {} containers matching {}, choose one by index",
        candidates.len(),
        selector
    );
    for (i, node) in candidates.iter().enumerate() {
        info!("[{}]: {}", i, dom.describe(*node));
    }

    let prompt = Prompt::new(
        PromptKey::ContainerChoice,
        format!("Container index (0 to {})", candidates.len() - 1),
    );
    let answer = prompter
        .ask(&prompt)
        .ok_or_else(|| ExportError::cancelled("choose container"))?;

    let choice = parse_choice(&answer, candidates.len()).ok_or_else(|| {
        ExportError::invalid_choice(
            "choose container",
            format!(
                "\"{}\" is not an index between 0 and {}",
                answer.trim(),
                candidates.len() - 1
            ),
        )
    })?;
    info!("selected container {}", choice);
    Ok(candidates[choice])
}
