//! Email notifications over SMTP.

use archive::Article;
use askama::Template;
use async_trait::async_trait;
use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::config::EmailConfig;
use crate::services::watch::{to_listing_article, Notifier, WatchError};

const EMAIL_SUBJECT: &str = "New backlog articles";
const LEAD_LINE: &str = "Some new articles were published from your backlog!";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build email: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("smtp send failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error(transparent)]
    Render(#[from] listing::RenderError),
    #[error("email template render failed: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "email.html")]
struct EmailTemplate {
    articles_html: String,
}

/// Sends article digests as multipart mail through an SMTP relay with
/// implicit TLS.
pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
}

impl EmailNotifier {
    pub fn new(config: &EmailConfig) -> Result<Self, NotifyError> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.relay)?
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from: config.username.clone(),
            to: config.receiver.clone(),
        })
    }

    async fn send(&self, articles: &[Article]) -> Result<(), NotifyError> {
        let listed: Vec<_> = articles.iter().map(to_listing_article).collect();
        let text = plain_body(&listed);
        let html = html_body(&listed)?;

        let message = Message::builder()
            .from(self.from.parse()?)
            .to(self.to.parse()?)
            .cc(self.from.parse()?)
            .subject(EMAIL_SUBJECT)
            .multipart(MultiPart::alternative_plain_html(text, html))?;

        self.transport.send(message).await?;
        Ok(())
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    async fn notify(&self, articles: &[Article]) -> Result<(), WatchError> {
        self.send(articles).await?;
        tracing::info!(
            "Sent notification for {} articles to {}",
            articles.len(),
            self.to
        );
        Ok(())
    }
}

fn plain_body(articles: &[listing::Article]) -> String {
    let mut text = format!("{}\n", LEAD_LINE);
    for article in articles {
        text.push('\n');
        text.push_str(&format!(
            "{}: {} ({})",
            article.date_published, article.title, article.url
        ));
    }
    text
}

/// The HTML part reuses the listing fragments, so mail clients see the same
/// markup the page shows.
fn html_body(articles: &[listing::Article]) -> Result<String, NotifyError> {
    let mut container = listing::Container::new();
    listing::render(articles, &mut container)?;

    let template = EmailTemplate {
        articles_html: container.inner_html(),
    };
    Ok(template.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_articles() -> Vec<listing::Article> {
        vec![
            listing::Article {
                url: "https://example.com/articles/fish-and-chips".to_string(),
                title: "Fish & Chips At Home".to_string(),
                date_published: "03/05/2023".to_string(),
            },
            listing::Article {
                url: "https://example.com/articles/paella".to_string(),
                title: "Paella Basics".to_string(),
                date_published: "03/04/2023".to_string(),
            },
        ]
    }

    #[test]
    fn test_plain_body_lists_one_article_per_line() {
        let body = plain_body(&create_test_articles());

        assert!(body.starts_with("Some new articles were published from your backlog!\n"));
        assert!(body.contains(
            "\n03/05/2023: Fish & Chips At Home (https://example.com/articles/fish-and-chips)"
        ));
        assert!(body.contains("\n03/04/2023: Paella Basics (https://example.com/articles/paella)"));
    }

    #[test]
    fn test_html_body_wraps_rendered_fragments() {
        let html = html_body(&create_test_articles()).unwrap();

        assert!(html.contains("Some new articles were published from your backlog!"));
        assert!(html.contains(r#"class="article-title""#));
        // The ampersand in the title stays escaped in markup.
        assert!(html.contains("Fish &amp; Chips At Home"));
    }
}
