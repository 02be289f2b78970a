// ============================================================================
// PRODUCT VIEW - Ficha de producto ZYZK-001
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::content::{product_facts, PageContent, ProductFacts};
use crate::dom::{text_element, ElementBuilder};
use crate::views::page::{render_hero, render_sections};

pub fn render_product(content: &PageContent) -> Result<Element, JsValue> {
    let facts = product_facts();
    Ok(ElementBuilder::new("article")?
        .class("page page-product")
        .child(render_hero(content)?)?
        .child(render_summary(facts)?)?
        .child(render_specs(facts)?)?
        .child(render_sections(content.sections)?)?
        .build())
}

fn render_summary(facts: &ProductFacts) -> Result<Element, JsValue> {
    let features = facts
        .features
        .iter()
        .map(|f| text_element("li", "product-feature", f))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ElementBuilder::new("section")?
        .class("product-summary")
        .child(text_element("span", "product-model", facts.model)?)?
        .child(text_element("h2", "product-name", facts.name)?)?
        .child(text_element("p", "product-text", facts.summary)?)?
        .child(ElementBuilder::new("ul")?.class("product-features").children(features)?.build())?
        .build())
}

fn render_specs(facts: &ProductFacts) -> Result<Element, JsValue> {
    let mut rows = Vec::with_capacity(facts.specs.len());
    for (label, value) in facts.specs {
        let row = ElementBuilder::new("tr")?
            .child(text_element("th", "spec-label", label)?)?
            .child(text_element("td", "spec-value", value)?)?
            .build();
        rows.push(row);
    }

    let body = ElementBuilder::new("tbody")?.children(rows)?.build();
    Ok(ElementBuilder::new("table")?
        .class("product-specs")
        .child(body)?
        .build())
}
