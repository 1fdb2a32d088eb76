use super::node::{el, Node};
use crate::i18n::AccountDeletionStrings;

/// Account-deletion instructions: numbered steps, warning box, contact line.
pub fn body(strings: &AccountDeletionStrings) -> Node {
    let steps = strings.steps.iter().enumerate().map(|(index, step)| {
        el("div")
            .class("flex gap-4")
            .child(
                el("div")
                    .class("w-8 h-8 bg-primary/10 rounded-full flex items-center justify-center flex-shrink-0")
                    .child(
                        el("span")
                            .class("text-primary font-bold text-sm")
                            .text((index + 1).to_string()),
                    ),
            )
            .child(
                el("div")
                    .child(el("h3").class("font-semibold text-stone-800 mb-1").text(&step.title))
                    .child(el("p").class("text-stone-500 text-sm").text(&step.description)),
            )
    });

    let warnings = strings
        .warnings
        .iter()
        .map(|warning| el("li").text(format!("• {}", warning)));

    let card = el("div")
        .class("bg-white rounded-3xl shadow-sm border border-stone-100 p-8 md:p-12")
        .child(
            el("h1")
                .class("text-2xl md:text-3xl font-bold text-stone-800 mb-6")
                .text(&strings.title),
        )
        .child(el("p").class("text-stone-600 mb-8 leading-relaxed").text(&strings.intro))
        .child(el("div").class("space-y-6").children(steps))
        .child(
            el("div")
                .class("mt-10 p-4 bg-rose-50 rounded-xl border border-rose-100")
                .child(
                    el("h4")
                        .class("font-semibold text-rose-700 mb-2")
                        .text(&strings.warning_title),
                )
                .child(el("ul").class("text-sm text-rose-600 space-y-1").children(warnings)),
        )
        .child(
            el("div")
                .class("mt-8 pt-6 border-t border-stone-100")
                .child(el("p").class("text-sm text-stone-500").text(&strings.contact_info)),
        );

    el("main")
        .class("flex-1 pt-24 pb-16 bg-warm-bg min-h-screen")
        .child(el("div").class("max-w-2xl mx-auto px-6").child(card))
        .into()
}
