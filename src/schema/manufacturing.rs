// src/schema/manufacturing.rs
//
// Section locations for the manufacturing report pages. Most sections hang
// off an <h3> landmark with a stable id; the narrative/table pair for each
// index shares the same anchor and differs only in the sibling tag.

use once_cell::sync::Lazy;

use super::SectionSchema;
use crate::extractors::navigate::NavigationStep as Step;

pub static SCHEMA: Lazy<SectionSchema> = Lazy::new(|| {
    SectionSchema::new()
        .section("headline", vec![Step::find("h1")])
        .section("highlights", vec![Step::find("h3").class_name("text-center")])
        .section(
            "overview",
            vec![
                Step::find("h3").class_name("text-center"),
                Step::next_siblings("p"),
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
                Step::find("h3").attr("id", "manIndexSumm"),
                Step::next_siblings("p"),
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
            "production_text",
            vec![
                Step::find("h3").attr("id", "production"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "production_table",
            vec![
                Step::find("h3").attr("id", "production"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "employment_text",
            vec![
                Step::find("h3").attr("id", "employment"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "employment_table",
            vec![
                Step::find("h3").attr("id", "employment"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "supplier_deliveries_text",
            vec![
                Step::find("h3").attr("id", "supplierDeliveries"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "supplier_deliveries_table",
            vec![
                Step::find("h3").attr("id", "supplierDeliveries"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "inventories_text",
            vec![
                Step::find("h3").attr("id", "inventories"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "inventories_table",
            vec![
                Step::find("h3").attr("id", "inventories"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "customer_inventories_text",
            vec![
                Step::find("h3").attr("id", "customersInventories"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "customer_inventories_table",
            vec![
                Step::find("h3").attr("id", "customersInventories"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "prices_text",
            vec![
                Step::find("h3").attr("id", "prices"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "prices_table",
            vec![
                Step::find("h3").attr("id", "prices"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "backlog_orders_text",
            vec![
                Step::find("h3").attr("id", "backlogOrders"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "backlog_orders_table",
            vec![
                Step::find("h3").attr("id", "backlogOrders"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "export_orders_text",
            vec![
                Step::find("h3").attr("id", "newExportOrders"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "export_orders_table",
            vec![
                Step::find("h3").attr("id", "newExportOrders"),
                Step::next_siblings("table"),
            ],
        )
        .section(
            "imports_text",
            vec![
                Step::find("h3").attr("id", "imports"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "imports_table",
            vec![
                Step::find("h3").attr("id", "imports"),
                Step::next_siblings("table"),
            ],
        )
        // The buying-policy heading sits inside a wrapper div; its content
        // follows the wrapper, not the heading itself.
        .section(
            "buying_policy_text",
            vec![
                Step::find("h3").attr("id", "buyingPolicy"),
                Step::parent("div"),
                Step::next_siblings("p"),
            ],
        )
        .section(
            "buying_policy_table",
            vec![
                Step::find("h3").attr("id", "buyingPolicy"),
                Step::parent("div"),
                Step::next_siblings("table"),
            ],
        )
});
