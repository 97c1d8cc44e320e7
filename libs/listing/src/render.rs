use askama::Template;

use crate::{models::Article, RenderError};

const ARTICLE_CLASS: &str = "article";
const LOADING_CLASS: &str = "loading";
const EMPTY_STATE_TEXT: &str = "No new articles!";

#[derive(Template)]
#[template(path = "article.html")]
struct ArticleTemplate<'a> {
    article: &'a Article,
}

#[derive(Template)]
#[template(path = "empty.html")]
struct EmptyStateTemplate;

/// One rendered child of the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    class: &'static str,
    html: String,
    text: String,
}

impl Fragment {
    fn article(article: &Article) -> Result<Self, RenderError> {
        let html = ArticleTemplate { article }.render()?;
        Ok(Self {
            class: ARTICLE_CLASS,
            html,
            text: format!("{} {}", article.title, article.date_published),
        })
    }

    fn empty_state() -> Result<Self, RenderError> {
        let html = EmptyStateTemplate.render()?;
        Ok(Self {
            class: LOADING_CLASS,
            html,
            text: EMPTY_STATE_TEXT.to_string(),
        })
    }

    /// Style class of the fragment's root element.
    pub fn class(&self) -> &str {
        self.class
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The child list of the host page's container element. The host owns the
/// element itself; rendering only ever replaces the children.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Container {
    children: Vec<Fragment>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn children(&self) -> &[Fragment] {
        &self.children
    }

    /// Concatenated HTML of the children, ready to drop into the host
    /// element.
    pub fn inner_html(&self) -> String {
        self.children.iter().map(Fragment::html).collect()
    }

    /// Text of the children, as a DOM `textContent` read would see it.
    pub fn text_content(&self) -> String {
        self.children.iter().map(Fragment::text).collect()
    }

    fn replace_children(&mut self, children: Vec<Fragment>) {
        self.children = children;
    }
}

/// Render the article list into the container, replacing whatever was there.
/// An empty list renders the placeholder instead. Every fragment is built
/// before the container is touched, so a failure leaves it unchanged.
pub fn render(articles: &[Article], container: &mut Container) -> Result<(), RenderError> {
    let children = if articles.is_empty() {
        vec![Fragment::empty_state()?]
    } else {
        articles
            .iter()
            .map(Fragment::article)
            .collect::<Result<Vec<_>, _>>()?
    };

    container.replace_children(children);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_article(url: &str, title: &str, date: &str) -> Article {
        Article {
            url: url.to_string(),
            title: title.to_string(),
            date_published: date.to_string(),
        }
    }

    #[test]
    fn test_empty_list_renders_placeholder() {
        let mut container = Container::new();
        render(&[], &mut container).unwrap();

        assert_eq!(container.children().len(), 1);
        assert_eq!(container.children()[0].class(), "loading");
        assert_eq!(container.text_content(), "No new articles!");
        assert_eq!(
            container.inner_html(),
            r#"<p class="loading">No new articles!</p>"#
        );
    }

    #[test]
    fn test_single_article_markup() {
        let mut container = Container::new();
        let articles = vec![create_test_article("/a", "Hello", "2024-01-01")];
        render(&articles, &mut container).unwrap();

        assert_eq!(container.children().len(), 1);
        let child = &container.children()[0];
        assert_eq!(child.class(), "article");
        assert_eq!(
            child.html(),
            r#"<p class="article"><a class="article-title" href="/a">Hello</a> <span class="article-date">2024-01-01</span></p>"#
        );
        assert_eq!(child.text(), "Hello 2024-01-01");
    }

    #[test]
    fn test_articles_keep_input_order() {
        let mut container = Container::new();
        let articles = vec![
            create_test_article("/1", "First", "2024-03-03"),
            create_test_article("/2", "Second", "2024-02-02"),
            create_test_article("/3", "Third", "2024-01-01"),
        ];
        render(&articles, &mut container).unwrap();

        let titles: Vec<_> = container
            .children()
            .iter()
            .map(|c| c.text().split(' ').next().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_render_replaces_prior_content() {
        let mut container = Container::new();
        render(
            &[
                create_test_article("/1", "First", "2024-03-03"),
                create_test_article("/2", "Second", "2024-02-02"),
            ],
            &mut container,
        )
        .unwrap();

        render(&[create_test_article("/3", "Third", "2024-01-01")], &mut container).unwrap();

        assert_eq!(container.children().len(), 1);
        assert!(container.inner_html().contains("Third"));
        assert!(!container.inner_html().contains("First"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let articles = vec![create_test_article("/a", "Hello", "2024-01-01")];

        let mut first = Container::new();
        render(&articles, &mut first).unwrap();
        let mut second = first.clone();
        render(&articles, &mut second).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_placeholder_replaces_articles() {
        let mut container = Container::new();
        render(&[create_test_article("/a", "Hello", "2024-01-01")], &mut container).unwrap();

        render(&[], &mut container).unwrap();

        assert_eq!(container.children().len(), 1);
        assert_eq!(container.text_content(), "No new articles!");
    }

    #[test]
    fn test_markup_in_fields_is_escaped() {
        let mut container = Container::new();
        let articles = vec![create_test_article(
            r#"/a"><script>alert(1)</script>"#,
            "<b>Bold</b> move",
            "2024-01-01",
        )];
        render(&articles, &mut container).unwrap();

        let html = container.inner_html();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;"));
    }
}
