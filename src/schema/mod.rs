// src/schema/mod.rs
//
// Static configuration: where each named report section lives in the
// document tree, and the fixed sector vocabulary for each report family.
// When the publisher changes the page structure, only this module needs
// updating.

pub mod manufacturing;
pub mod services;

use crate::extractors::navigate::NavigationStep;

/// Ordered mapping of section name -> navigation-step chain. Immutable
/// after construction; built once per process behind a `Lazy`.
pub struct SectionSchema {
    entries: Vec<(&'static str, Vec<NavigationStep>)>,
}

impl SectionSchema {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn section(mut self, name: &'static str, steps: Vec<NavigationStep>) -> Self {
        self.entries.push((name, steps));
        self
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &[NavigationStep])> {
        self.entries
            .iter()
            .map(|(name, steps)| (*name, steps.as_slice()))
    }
}

/// NAICS manufacturing sectors as they appear in the industry reports.
pub static MAN_SECTORS: [&str; 18] = [
    "Apparel, Leather & Allied Products",
    "Chemical Products",
    "Computer & Electronic Products",
    "Electrical Equipment, Appliances & Components",
    "Fabricated Metal Products",
    "Food, Beverage & Tobacco Products",
    "Furniture & Related Products",
    "Machinery",
    "Miscellaneous Manufacturing",
    "Nonmetallic Mineral Products",
    "Paper Products",
    "Petroleum & Coal Products",
    "Plastics & Rubber Products",
    "Primary Metals",
    "Printing & Related Support Activities",
    "Textile Mills",
    "Transportation Equipment",
    "Wood Products",
];

/// NAICS services sectors as they appear in the industry reports.
pub static SERV_SECTORS: [&str; 18] = [
    "Accommodation & Food Services",
    "Agriculture, Forestry, Fishing & Hunting",
    "Arts, Entertainment & Recreation",
    "Construction",
    "Educational Services",
    "Finance & Insurance",
    "Health Care & Social Assistance",
    "Information",
    "Management of Companies & Support Services",
    "Mining",
    "Other Services",
    "Professional, Scientific & Technical Services",
    "Public Administration",
    "Real Estate, Rental & Leasing",
    "Retail Trade",
    "Transportation & Warehousing",
    "Utilities",
    "Wholesale Trade",
];
