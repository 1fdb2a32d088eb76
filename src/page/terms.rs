use super::node::{el, list, ordered_list, Node};
use crate::i18n::{TermsArticle, TermsStrings};

fn article(article: &TermsArticle) -> Vec<Node> {
    let mut nodes: Vec<Node> = vec![el("h3").text(&article.title).into()];
    if let Some(content) = &article.content {
        nodes.push(el("p").text(content).into());
    }
    if !article.bullets.is_empty() {
        nodes.push(list(&article.bullets).into());
    }
    if !article.numbered.is_empty() {
        nodes.push(ordered_list(&article.numbered).into());
    }
    nodes
}

/// Terms of service: chapters with their articles, then the appendix.
pub fn body(strings: &TermsStrings) -> Node {
    let chapters = strings.chapters.iter().flat_map(|chapter| {
        std::iter::once(Node::from(el("h2").text(&chapter.title)))
            .chain(chapter.articles.iter().flat_map(article))
    });

    let content = el("article")
        .class("prose text-stone-600")
        .child(el("h1").class("text-stone-800").text(&strings.title))
        .child(el("p").child(el("strong").text(&strings.effective_date)))
        .children(chapters)
        .child(el("h2").text(&strings.appendix.title))
        .child(el("p").text(&strings.appendix.content));

    el("main")
        .class("pt-24 pb-16 bg-warm-bg min-h-screen")
        .child(el("div").class("max-w-4xl mx-auto px-6").child(content))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Dictionaries, Locale};

    #[test]
    fn test_every_chapter_and_article_is_rendered() {
        let dictionaries = Dictionaries::embedded().unwrap();
        let strings = &dictionaries.get(Locale::JAPANESE).terms;
        let html = body(strings).render();

        let articles: usize = strings.chapters.iter().map(|c| c.articles.len()).sum();
        assert_eq!(html.matches("<h2>").count(), strings.chapters.len() + 1);
        assert_eq!(html.matches("<h3>").count(), articles);
        assert!(html.ends_with(&format!(
            "<h2>{}</h2><p>{}</p></article></div></main>",
            strings.appendix.title, strings.appendix.content
        )));
    }

    #[test]
    fn test_article_parts_render_in_order() {
        let full = TermsArticle {
            title: "Article 14".to_string(),
            content: Some("Reasons:".to_string()),
            bullets: vec!["Abuse".to_string()],
            numbered: vec!["Notice".to_string()],
        };
        let html: String = article(&full).iter().map(Node::render).collect();
        assert_eq!(
            html,
            "<h3>Article 14</h3><p>Reasons:</p><ul><li>Abuse</li></ul><ol><li>Notice</li></ol>"
        );

        let bare = TermsArticle {
            title: "Article 2".to_string(),
            content: None,
            bullets: Vec::new(),
            numbered: vec!["Service".to_string()],
        };
        let html: String = article(&bare).iter().map(Node::render).collect();
        assert_eq!(html, "<h3>Article 2</h3><ol><li>Service</li></ol>");
    }
}
