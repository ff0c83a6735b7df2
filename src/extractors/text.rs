// src/extractors/text.rs

// --- Imports ---
use scraper::ElementRef;

use crate::extractors::navigate::Located;
use crate::utils::error::RenderError;

/// Renders located content to normalized text. A single node whose direct
/// children include explicit `<br>` markers keeps the author's line
/// structure (one stripped fragment per line); a plain node becomes one
/// flattened line; a node list renders one member per line. Literal `*`
/// footnote markers are stripped throughout.
pub fn render(located: &Located) -> Result<String, RenderError> {
    let text = match located {
        Located::Absent => return Err(RenderError::AbsentContent),
        Located::Node(el) => render_node(*el),
        Located::Nodes(els) => els
            .iter()
            .map(|el| flat_text(*el))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    let text = text.replace('*', "");
    if text.trim().is_empty() {
        return Err(RenderError::NoText);
    }
    Ok(text)
}

fn render_node(el: ElementRef) -> String {
    let has_line_breaks = el
        .children()
        .filter_map(ElementRef::wrap)
        .any(|child| child.value().name() == "br");
    if has_line_breaks {
        el.text()
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        flat_text(el)
    }
}

fn flat_text(el: ElementRef) -> String {
    el.text().collect()
}
