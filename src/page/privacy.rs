use super::node::{el, list, table, Element, Node};
use super::safety_policy::list_section;
use crate::i18n::{PrivacyStrings, TableSection};

fn subheading(title: &str) -> Element {
    el("h3").class("text-base font-semibold text-stone-700 mt-4 mb-2").text(title)
}

fn note(content: &str) -> Element {
    el("p").class("text-sm text-stone-500").text(content)
}

fn table_section(section: &TableSection) -> Vec<Node> {
    let mut nodes: Vec<Node> = vec![el("h2").text(&section.title).into()];
    if let Some(intro) = &section.intro {
        nodes.push(el("p").text(intro).into());
    }
    nodes.push(table(&section.headers, &section.rows).into());
    if let Some(content) = &section.note {
        nodes.push(note(content).into());
    }
    nodes
}

/// Privacy policy: intro, effective date, then each section as a table or list.
pub fn body(strings: &PrivacyStrings) -> Node {
    let sections = &strings.sections;
    let collection = &sections.collection;

    let article = el("article")
        .class("prose text-stone-600")
        .child(el("h1").class("text-stone-800").text(&strings.title))
        .child(el("p").text(&strings.intro))
        .child(el("p").child(el("strong").text(&strings.effective_date)))
        .children(table_section(&sections.purpose))
        .child(el("h2").text(&collection.title))
        .child(subheading(&collection.required))
        .child(table(&collection.required_headers, &collection.required_rows))
        .child(subheading(&collection.auto))
        .child(list(&collection.auto_items))
        .child(subheading(&collection.optional))
        .child(list(&collection.optional_items))
        .children(table_section(&sections.retention))
        .children(list_section(&sections.third_party))
        .children(table_section(&sections.outsourcing))
        .children(table_section(&sections.overseas))
        .children(list_section(&sections.destruction))
        .children(table_section(&sections.rights))
        .children(list_section(&sections.security))
        .children(table_section(&sections.officer))
        .children(list_section(&sections.remedies))
        .child(el("h2").text(&sections.changes.title))
        .child(el("p").text(&sections.changes.content));

    el("main")
        .class("pt-24 pb-16 bg-warm-bg min-h-screen")
        .child(el("div").class("max-w-4xl mx-auto px-6").child(article))
        .into()
}
