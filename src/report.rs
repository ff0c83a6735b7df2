// src/report.rs
#![allow(dead_code)]
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::schema::{self, SectionSchema};

/// Which report family a document belongs to. Selects the section schema,
/// the sector vocabulary, and the secondary ranking input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Manufacturing,
    Services,
}

impl ReportType {
    pub fn schema(&self) -> &'static SectionSchema {
        match self {
            ReportType::Manufacturing => &schema::manufacturing::SCHEMA,
            ReportType::Services => &schema::services::SCHEMA,
        }
    }

    pub fn sectors(&self) -> &'static [&'static str] {
        match self {
            ReportType::Manufacturing => &schema::MAN_SECTORS,
            ReportType::Services => &schema::SERV_SECTORS,
        }
    }

    /// Name of the section whose text drives the secondary ranking.
    pub fn rank_by_section(&self) -> &'static str {
        match self {
            ReportType::Manufacturing => "new_orders_text",
            ReportType::Services => "business_activity_text",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Manufacturing => "manufacturing",
            ReportType::Services => "services",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "man" | "manufacturing" => Ok(ReportType::Manufacturing),
            "s" | "serv" | "services" => Ok(ReportType::Services),
            other => Err(format!(
                "unknown report type {:?} (expected 'manufacturing' or 'services')",
                other
            )),
        }
    }
}

/// A single table cell: the raw text, or a number when the text parses as one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(_) => None,
        }
    }
}

/// A column label, two-level when the source table had a merged header row.
/// `group` holds the spanning umbrella heading (e.g. "Percent Reporting").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnLabel {
    pub group: Option<String>,
    pub name: String,
}

/// A rectangular record set reconstructed from an HTML table.
/// Every row holds exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRecord {
    pub columns: Vec<ColumnLabel>,
    pub rows: Vec<Vec<Cell>>,
}

/// The typed content of one extracted section. Table sections may locate
/// several sibling tables; each is reconstructed independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SectionValue {
    Text(String),
    Tables(Vec<TableRecord>),
}

/// Growth/contraction rank for one sector. Positive ranks mean growth
/// (higher = stronger), negative mean contraction, 0 means unmentioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingRecord {
    pub sector: String,
    pub primary_rank: i32,
    pub secondary_rank: i32,
}

/// One quoted respondent comment attributed to a sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentRecord {
    pub sector: String,
    pub comment: String,
}

/// A named section slot. `value` is `None` when the schema entry found
/// nothing in the document or its content could not be transformed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub name: &'static str,
    pub value: Option<SectionValue>,
}

/// A fully assembled report: schema-ordered sections plus the derived
/// sector rankings and respondent comments. Owns all of its data; holds
/// no reference back to the source document.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub report_type: ReportType,
    pub sections: Vec<Section>,
    pub rankings: Option<Vec<RankingRecord>>,
    pub comments: Option<Vec<CommentRecord>>,
}

impl Report {
    pub fn section(&self, name: &str) -> Option<&SectionValue> {
        self.sections
            .iter()
            .find(|s| s.name == name)
            .and_then(|s| s.value.as_ref())
    }

    /// Rendered text of a narrative section, if present.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.section(name) {
            Some(SectionValue::Text(t)) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Reconstructed tables of a table section, if present.
    pub fn tables(&self, name: &str) -> Option<&[TableRecord]> {
        match self.section(name) {
            Some(SectionValue::Tables(t)) => Some(t.as_slice()),
            _ => None,
        }
    }

    /// Number of sections that came back with content.
    pub fn present_count(&self) -> usize {
        self.sections.iter().filter(|s| s.value.is_some()).count()
    }

    /// Names of the sections that came back empty.
    pub fn missing_sections(&self) -> Vec<&'static str> {
        self.sections
            .iter()
            .filter(|s| s.value.is_none())
            .map(|s| s.name)
            .collect()
    }
}
