use super::node::{el, list, Node};
use crate::i18n::{SafetyPolicyStrings, TitledContent, TitledList};

fn content_section(section: &TitledContent) -> [Node; 2] {
    [
        el("h2").text(&section.title).into(),
        el("p").text(&section.content).into(),
    ]
}

pub(super) fn list_section(section: &TitledList) -> [Node; 3] {
    [
        el("h2").text(&section.title).into(),
        el("p").text(&section.intro).into(),
        list(&section.items).into(),
    ]
}

/// Child safety policy: intro, emergency alert, then each policy section.
pub fn body(strings: &SafetyPolicyStrings) -> Node {
    let sections = &strings.sections;
    let reporting = &sections.reporting;

    let article = el("article")
        .class("prose text-stone-600")
        .child(el("h1").class("text-stone-800").text(&strings.title))
        .child(el("p").text(&strings.intro))
        .child(el("p").child(el("strong").text(&strings.effective_date)))
        .child(
            el("div")
                .class("alert")
                .child(el("div").class("alert-title").text(&strings.emergency.title))
                .child(el("p").class("mb-0").text(&strings.emergency.content)),
        )
        .children(content_section(&sections.commitment))
        .children(list_section(&sections.age_restriction))
        .children(list_section(&sections.prohibited_content))
        .child(el("h2").text(&reporting.title))
        .child(el("p").text(&reporting.intro))
        .child(el("h3").text(&reporting.in_app.title))
        .child(list(&reporting.in_app.items))
        .child(el("h3").text(&reporting.email.title))
        .child(el("p").text(&reporting.email.content))
        .children(list_section(&sections.response))
        .children(content_section(&sections.cooperation))
        .children(content_section(&sections.education))
        .children(content_section(&sections.contact))
        .children(content_section(&sections.updates));

    el("main")
        .class("pt-24 pb-16 bg-warm-bg min-h-screen")
        .child(el("div").class("max-w-4xl mx-auto px-6").child(article))
        .into()
}
