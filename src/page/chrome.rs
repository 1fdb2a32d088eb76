//! Page chrome shared by every page: navigation bar with the language
//! switcher, and the footer.

use super::node::{el, Element, Node};
use crate::i18n::{
    LangSwitcherStrings, Locale, LocaleResolver, Navigation, PageUrl, PreferenceStore,
    Translations,
};

const GLOBE_ICON_PATH: &str = "M21 12a9 9 0 01-9 9m9-9a9 9 0 00-9-9m9 9H3m9 9a9 9 0 01-9-9m9 9c1.657 0 3-4.03 3-9s-1.343-9-3-9m0 18c-1.657 0-3-4.03-3-9s1.343-9 3-9m-9 9a9 9 0 019-9";

/// Dropdown state of the language switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSwitcher {
    current: Locale,
    open: bool,
}

impl LanguageSwitcher {
    pub fn new(current: Locale) -> Self {
        Self {
            current,
            open: false,
        }
    }

    pub fn current(&self) -> Locale {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Button click.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Click anywhere outside the switcher.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pick a locale from the dropdown. Choosing the current locale only
    /// closes the dropdown; anything else persists the choice and returns the
    /// page to reload into.
    pub fn select<S: PreferenceStore>(
        &mut self,
        locale: Locale,
        resolver: &mut LocaleResolver<S>,
        current_url: &PageUrl,
    ) -> Option<Navigation> {
        self.close();
        if locale == self.current {
            return None;
        }
        Some(resolver.set_locale(locale, current_url))
    }

    pub fn render(&self, labels: &LangSwitcherStrings) -> Element {
        let button = el("button")
            .id("lang-btn")
            .class("flex items-center gap-1.5 text-stone-600 hover:text-stone-800 px-3 py-2 rounded-lg hover:bg-stone-100 transition-colors text-sm font-medium")
            .child(
                el("svg")
                    .class("w-4 h-4")
                    .attr("fill", "none")
                    .attr("viewBox", "0 0 24 24")
                    .attr("stroke", "currentColor")
                    .child(
                        el("path")
                            .attr("stroke-linecap", "round")
                            .attr("stroke-linejoin", "round")
                            .attr("stroke-width", "2")
                            .attr("d", GLOBE_ICON_PATH),
                    ),
            )
            .child(el("span").text(labels.label(self.current)));

        let mut dropdown_class = String::from(
            "absolute right-0 mt-1 w-32 bg-white rounded-lg shadow-lg border border-stone-100 py-1 z-50",
        );
        if !self.open {
            dropdown_class.push_str(" hidden");
        }

        let options = Locale::all().into_iter().map(|locale| {
            let emphasis = if locale == self.current {
                "text-primary font-medium"
            } else {
                "text-stone-600"
            };
            el("button")
                .attr("data-lang", locale.code())
                .class(format!(
                    "w-full text-left px-4 py-2 text-sm hover:bg-stone-50 transition-colors {}",
                    emphasis
                ))
                .text(labels.label(locale))
        });

        el("div")
            .class("relative")
            .id("lang-switcher")
            .child(button)
            .child(el("div").id("lang-dropdown").class(dropdown_class).children(options))
    }
}

/// Fixed navigation bar: brand, language switcher, back-to-home link.
pub fn nav(
    translations: &Translations,
    switcher: &LanguageSwitcher,
    back_to_home: &str,
    width: &str,
) -> Node {
    el("nav")
        .class("fixed top-0 left-0 right-0 z-50 bg-white/80 backdrop-blur-md border-b border-stone-100")
        .child(
            el("div")
                .class(format!(
                    "{} mx-auto px-6 py-4 flex justify-between items-center",
                    width
                ))
                .child(
                    el("a")
                        .attr("href", "/")
                        .class("text-2xl font-bold text-stone-800 tracking-tight")
                        .text(&translations.nav.brand),
                )
                .child(
                    el("div")
                        .class("flex items-center gap-4")
                        .child(switcher.render(&translations.lang_switcher))
                        .child(
                            el("a")
                                .attr("href", "/")
                                .class("text-stone-600 hover:text-stone-800 text-sm font-medium")
                                .text(back_to_home),
                        ),
                ),
        )
        .into()
}

/// Footer with the copyright line.
pub fn footer(translations: &Translations, width: &str) -> Node {
    el("footer")
        .class("py-8 bg-stone-900 border-t border-stone-800")
        .child(
            el("div")
                .class(format!("{} mx-auto px-6 text-center text-stone-500 text-sm", width))
                .text(&translations.footer.copyright),
        )
        .into()
}
