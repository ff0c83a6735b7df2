// src/schema/services.rs
//
// Section locations for the services report pages. Several index headings
// here carry no id, so they are anchored by their visible label instead.

use once_cell::sync::Lazy;

use super::SectionSchema;
use crate::extractors::navigate::NavigationStep as Step;

fn index_summaries_heading(text: Option<&str>) -> bool {
    text.map_or(false, |t| t.contains("SERVICES INDEX SUMMARIES"))
}

pub static SCHEMA: Lazy<SectionSchema> = Lazy::new(|| {
    SectionSchema::new()
        .section("headline", vec![Step::find("h1")])
        .section("highlights", vec![Step::find("h3").class_name("text-center")])
        // Overview paragraphs are the unclassed ones; styled paragraphs in
        // between are boilerplate.
        .section(
            "overview",
            vec![
                Step::find("h3").class_name("text-center"),
                Step::next_siblings("p").without_attr("class"),
            ],
        )
        .section(
            "comments",
            vec![
                Step::find("h3").attr("id", "respondentsSay"),
                Step::next_siblings("ul"),
            ],
        )
        .section(
            "full_pmi_table",
            vec![
                Step::find("h3").attr("id", "respondentsSay"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "comm_price_up",
            vec![
                Step::find("h3").attr("id", "commodities"),
                Step::next_sibling("div"),
                Step::first_child("p"),
            ],
        )
        .section(
            "comm_price_down",
            vec![
                Step::find("h3").attr("id", "commodities"),
                Step::next_sibling("div"),
                Step::next_sibling("div"),
                Step::first_child("p"),
            ],
        )
        .section(
            "comm_supply_short",
            vec![
                Step::find("h3").attr("id", "commodities"),
                Step::next_sibling("p"),
            ],
        )
        .section(
            "index_summary",
            vec![
                Step::find("h3").text_matches(index_summaries_heading),
                Step::parent("div"),
                Step::next_sibling("div"),
                Step::children("p"),
            ],
        )
        .section(
            "business_activity_text",
            vec![
                Step::find("h3").attr("id", "businessActivity"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "business_activity_table",
            vec![
                Step::find("h3").attr("id", "businessActivity"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "new_orders_text",
            vec![
                Step::find("h3").text_equals("New Orders"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "new_orders_table",
            vec![
                Step::find("h3").text_equals("New Orders"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "employment_text",
            vec![
                Step::find("h3").text_equals("Employment"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "employment_table",
            vec![
                Step::find("h3").text_equals("Employment"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "supplier_deliveries_text",
            vec![
                Step::find("h3").text_equals("Supplier Deliveries"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "supplier_deliveries_table",
            vec![
                Step::find("h3").text_equals("Supplier Deliveries"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "inventories_text",
            vec![
                Step::find("h3").text_equals("Inventories"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "inventories_table",
            vec![
                Step::find("h3").text_equals("Inventories"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "prices_text",
            vec![
                Step::find("h3").text_equals("Prices"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "prices_table",
            vec![
                Step::find("h3").text_equals("Prices"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "backlog_orders_text",
            vec![
                Step::find("h3").text_equals("Backlog of Orders"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "backlog_orders_table",
            vec![
                Step::find("h3").text_equals("Backlog of Orders"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "export_orders_text",
            vec![
                Step::find("h3").text_equals("New Export Orders"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "export_orders_table",
            vec![
                Step::find("h3").text_equals("New Export Orders"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "inventory_sentiment_text",
            vec![
                Step::find("h3").attr("id", "inventorySentiment"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "inventory_sentiment_table",
            vec![
                Step::find("h3").attr("id", "inventorySentiment"),
                Step::next_siblings("table"),
            ],
        )
});
