//! HTML string handling shared by the static generator and the page runtime.
//!
//! Documents are treated as text: every change is a regex rewrite over the
//! serialized markup, which is all the generated pages need.

mod document;
mod rules;

pub use document::{root_attr_rule, title_rule, HtmlDocument, MetaTag, RootAttr};
pub use rules::{apply_rules, Replacement, RewriteOutcome, RewriteRule, Scope};

/// Escape text for use inside an element or a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }

    result
}
