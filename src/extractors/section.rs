// src/extractors/section.rs

// --- Imports ---
use scraper::Html;

use crate::extractors::navigate::{self, Located};
use crate::schema::SectionSchema;

/// Runs every schema entry against the document root and returns the raw
/// located content keyed by section name, in schema order. An individual
/// miss is stored as `Absent` and never aborts the other entries; the
/// caller decides which absences matter.
pub fn extract<'a>(
    document: &'a Html,
    schema: &SectionSchema,
) -> Vec<(&'static str, Located<'a>)> {
    let root = document.root_element();
    schema
        .entries()
        .map(|(name, steps)| {
            let located = navigate::apply(root, steps);
            if located.is_absent() {
                tracing::debug!("Section '{}' not found in document", name);
            }
            (name, located)
        })
        .collect()
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::navigate::NavigationStep as Step;

    fn two_section_schema() -> SectionSchema {
        SectionSchema::new()
            .section(
                "prices_text",
                vec![
                    Step::find("h3").attr("id", "prices"),
                    Step::next_siblings("p"),
                ],
            )
            .section(
                "imports_text",
                vec![
                    Step::find("h3").attr("id", "imports"),
                    Step::next_siblings("p"),
                ],
            )
    }

    #[test]
    fn missing_entry_does_not_affect_the_others() {
        let doc = Html::parse_document(
            r#"<body>
                <h3 id="prices">Prices</h3>
                <p>Prices rose again.</p>
            </body>"#,
        );
        let sections = extract(&doc, &two_section_schema());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].0, "prices_text");
        assert!(matches!(sections[0].1, Located::Nodes(_)));
        assert_eq!(sections[1].0, "imports_text");
        assert!(sections[1].1.is_absent());
    }

    #[test]
    fn extraction_is_deterministic() {
        let doc = Html::parse_document(
            r#"<body>
                <h3 id="prices">Prices</h3>
                <p>Prices rose again.</p>
                <h3 id="imports">Imports</h3>
                <p>Imports fell.</p>
            </body>"#,
        );
        let schema = two_section_schema();
        let first: Vec<(&str, bool)> = extract(&doc, &schema)
            .iter()
            .map(|(n, l)| (*n, l.is_absent()))
            .collect();
        let second: Vec<(&str, bool)> = extract(&doc, &schema)
            .iter()
            .map(|(n, l)| (*n, l.is_absent()))
            .collect();
        assert_eq!(first, second);
    }
}
