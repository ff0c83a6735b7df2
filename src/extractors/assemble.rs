// src/extractors/assemble.rs

// --- Imports ---
use scraper::Html;

use crate::extractors::navigate::Located;
use crate::extractors::{metrics, section, table, text};
use crate::report::{Report, ReportType, Section, SectionValue, TableRecord};
use crate::utils::error::{ExtractError, TableFormatError};

/// Assembles a full report from a parsed document.
///
/// Sections are located per the report type's schema, then transformed by
/// naming convention: names containing "table" go through the table
/// reconstructor, everything else through the text renderer. A section
/// that is missing or fails to transform becomes a hole (`None`) and is
/// logged; partial reports are the expected common case. The derived
/// rankings and comments are computed only when their input sections are
/// present, and fail closed to `None` on parse errors.
///
/// The only assembly-level failure is every requested section coming back
/// absent, which almost always means a wrong schema or wrong document.
pub fn assemble(document: &Html, report_type: ReportType) -> Result<Report, ExtractError> {
    let schema = report_type.schema();
    let located = section::extract(document, schema);

    let mut sections: Vec<Section> = Vec::with_capacity(located.len());
    for (name, raw) in located {
        let value = if raw.is_absent() {
            None
        } else if name.contains("table") {
            match reconstruct_tables(&raw) {
                Ok(tables) => Some(SectionValue::Tables(tables)),
                Err(e) => {
                    tracing::warn!("Failed to reconstruct table section '{}': {}", name, e);
                    None
                }
            }
        } else {
            match text::render(&raw) {
                Ok(rendered) => Some(SectionValue::Text(rendered)),
                Err(e) => {
                    tracing::warn!("Failed to render section '{}': {}", name, e);
                    None
                }
            }
        };
        sections.push(Section { name, value });
    }

    if sections.iter().all(|s| s.value.is_none()) {
        tracing::error!(
            "All {} sections of the {} report came back absent",
            sections.len(),
            report_type
        );
        return Err(ExtractError::TotalExtractionFailure);
    }

    let rankings = derive_rankings(&sections, report_type);
    let comments = derive_comments(&sections);

    Ok(Report {
        report_type,
        sections,
        rankings,
        comments,
    })
}

/// Reconstructs every table a section located. A table section may hold a
/// single node or a run of sibling tables; one malformed table fails the
/// section.
fn reconstruct_tables(raw: &Located) -> Result<Vec<TableRecord>, TableFormatError> {
    match raw {
        Located::Node(el) => Ok(vec![table::reconstruct(*el)?]),
        Located::Nodes(els) => els.iter().map(|el| table::reconstruct(*el)).collect(),
        Located::Absent => Err(TableFormatError::Empty),
    }
}

fn derive_rankings(
    sections: &[Section],
    report_type: ReportType,
) -> Option<Vec<crate::report::RankingRecord>> {
    let overview = section_text(sections, "overview");
    let rank_by = section_text(sections, report_type.rank_by_section());
    match (overview, rank_by) {
        (Some(overview), Some(rank_by)) => {
            match metrics::rank(overview, rank_by, report_type.sectors()) {
                Ok(records) => Some(records),
                Err(e) => {
                    tracing::warn!(
                        "Failed to derive sector rankings: {}\noverview text:\n{}",
                        e,
                        overview
                    );
                    None
                }
            }
        }
        _ => {
            tracing::debug!("Ranking inputs absent; skipping sector rankings");
            None
        }
    }
}

fn derive_comments(sections: &[Section]) -> Option<Vec<crate::report::CommentRecord>> {
    let comments = section_text(sections, "comments")?;
    match metrics::extract_comments(comments) {
        Ok(records) => Some(records),
        Err(e) => {
            tracing::warn!(
                "Failed to extract respondent comments: {}\ncomments text:\n{}",
                e,
                comments
            );
            None
        }
    }
}

fn section_text<'a>(sections: &'a [Section], name: &str) -> Option<&'a str> {
    sections
        .iter()
        .find(|s| s.name == name)
        .and_then(|s| match &s.value {
            Some(SectionValue::Text(text)) => Some(text.as_str()),
            _ => None,
        })
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Cell;

    /// A cut-down manufacturing report page: headline, overview paragraphs
    /// with ranking sentences, respondent comments, the summary table, and
    /// one index section. Everything else in the schema is deliberately
    /// missing.
    fn manufacturing_fixture() -> Html {
        Html::parse_document(
            r#"<html><body>
                <h1>Manufacturing PMI</h1>
                <div>
                    <h3 class="text-center">July 2025 Manufacturing Index Summary</h3>
                    <p>Economic activity in the manufacturing sector contracted in July.</p>
                    <p>Of the 18 manufacturing industries, 3 reported growth: Textile Mills; Wood Products; and Machinery. 3 reported contraction: Paper Products; Furniture &amp; Related Products; and Apparel, Leather &amp; Allied Products.</p>
                </div>
                <div>
                    <h3 id="respondentsSay">What Respondents Are Saying</h3>
                    <ul><li>WHAT RESPONDENTS ARE SAYING</li>
                    <li>'Demand remains soft.' [Chemical Products]</li>
                    <li>'Backlog is finally shrinking.' [Machinery]</li>
                    <li>18 of 18 industries responded</li></ul>
                    <table>
                        <tr><th>Index</th><th>Series ID</th><th colspan="2">Direction</th></tr>
                        <tr><th></th><th></th><th>Jul</th><th>Jun</th></tr>
                        <tr><td>PMI</td><td>48.0</td><td>Contracting</td><td>Contracting</td></tr>
                    </table>
                </div>
                <div>
                    <h3>New Orders</h3>
                    <p>New Orders stayed weak.</p>
                    <p>The 2 industries reporting growth: Machinery; and Wood Products. The 2 industries reporting contraction: Paper Products; and Textile Mills.</p>
                </div>
            </body></html>"#,
        )
    }

    #[test]
    fn assembles_a_partial_report_with_holes() {
        let report = assemble(&manufacturing_fixture(), ReportType::Manufacturing).unwrap();

        assert_eq!(report.report_type, ReportType::Manufacturing);
        assert_eq!(report.sections.len(), 31);
        assert_eq!(report.text("headline"), Some("Manufacturing PMI"));
        assert!(report.text("overview").unwrap().contains("reported growth"));

        // Sections without anchors in the fixture are holes, not errors.
        assert!(report.section("production_text").is_none());
        assert!(report.section("buying_policy_table").is_none());
        assert!(!report.missing_sections().is_empty());
    }

    #[test]
    fn table_sections_are_reconstructed_not_rendered() {
        let report = assemble(&manufacturing_fixture(), ReportType::Manufacturing).unwrap();
        let tables = report.tables("full_pmi_table").expect("summary table");
        assert_eq!(tables.len(), 1);
        let record = &tables[0];
        assert_eq!(record.columns.len(), 4);
        assert_eq!(record.columns[2].group.as_deref(), Some("Direction"));
        assert_eq!(record.rows[0][1], Cell::Number(48.0));
    }

    #[test]
    fn derived_metrics_come_from_the_designated_sections() {
        let report = assemble(&manufacturing_fixture(), ReportType::Manufacturing).unwrap();

        let rankings = report.rankings.as_ref().expect("rankings derived");
        let textile = rankings.iter().find(|r| r.sector == "Textile Mills").unwrap();
        assert_eq!(textile.primary_rank, 3);
        assert_eq!(textile.secondary_rank, -1);

        let comments = report.comments.as_ref().expect("comments derived");
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].sector, "Chemical Products");
        assert_eq!(comments[1].comment, "Backlog is finally shrinking.");
    }

    #[test]
    fn missing_ranking_inputs_leave_rankings_absent() {
        let doc = Html::parse_document(
            r#"<html><body><h1>Manufacturing PMI</h1></body></html>"#,
        );
        let report = assemble(&doc, ReportType::Manufacturing).unwrap();
        assert_eq!(report.text("headline"), Some("Manufacturing PMI"));
        assert!(report.rankings.is_none());
        assert!(report.comments.is_none());
    }

    #[test]
    fn fully_absent_extraction_is_a_total_failure() {
        let doc = Html::parse_document(
            r#"<html><body><div>nothing the schema knows about</div></body></html>"#,
        );
        assert!(matches!(
            assemble(&doc, ReportType::Manufacturing),
            Err(ExtractError::TotalExtractionFailure)
        ));
    }

    #[test]
    fn assembly_is_deterministic() {
        let doc = manufacturing_fixture();
        let first = assemble(&doc, ReportType::Manufacturing).unwrap();
        let second = assemble(&doc, ReportType::Manufacturing).unwrap();
        assert_eq!(first.sections, second.sections);
        assert_eq!(first.rankings, second.rankings);
        assert_eq!(first.comments, second.comments);
    }
}
