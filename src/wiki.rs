use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::Duration;

use crate::error::LookupError;

// Create a static client to reuse connections
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .pool_max_idle_per_host(10)
        .build()
        .expect("Failed to build HTTP client")
});

/// Resolves a topic to an encyclopedia page and returns its lead-section
/// extract. Handlers hold this behind `Arc<dyn SummaryProvider>` so tests
/// can substitute a deterministic fake.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn summary(&self, topic: &str) -> Result<String, LookupError>;
}

/// Wikipedia-backed provider speaking the MediaWiki action API of a single
/// content language.
pub struct WikipediaClient {
    api_url: String,
}

impl WikipediaClient {
    pub fn new(language: &str) -> Self {
        WikipediaClient {
            api_url: format!("https://{}.wikipedia.org/w/api.php", language),
        }
    }

    async fn query(&self, params: &[(&str, &str)]) -> Result<QueryResponse, LookupError> {
        let response = CLIENT
            .get(&self.api_url)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl SummaryProvider for WikipediaClient {
    async fn summary(&self, topic: &str) -> Result<String, LookupError> {
        // 1. Resolve the topic to a page, following redirects
        let resolved = self
            .query(&[
                ("prop", "info|pageprops"),
                ("ppprop", "disambiguation"),
                ("redirects", "1"),
                ("titles", topic),
            ])
            .await?;
        let title = resolve_page(topic, resolved)?;

        // 2. Retrieve the lead-section plain-text extract
        let extracted = self
            .query(&[
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("titles", &title),
            ])
            .await?;
        extract_summary(&title, extracted)
    }
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<QueryBody>,
}

#[derive(Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Deserialize)]
struct Page {
    title: String,
    #[serde(default)]
    missing: bool,
    pageprops: Option<PageProps>,
    extract: Option<String>,
}

// ppprop=disambiguation: the prop is present (with an empty value) on
// disambiguation pages and absent otherwise.
#[derive(Deserialize)]
struct PageProps {
    disambiguation: Option<String>,
}

fn resolve_page(topic: &str, response: QueryResponse) -> Result<String, LookupError> {
    let page = response
        .query
        .and_then(|q| q.pages.into_iter().next())
        .ok_or_else(|| LookupError::PageNotFound(topic.to_string()))?;

    if page.missing {
        return Err(LookupError::PageNotFound(topic.to_string()));
    }
    if page
        .pageprops
        .as_ref()
        .is_some_and(|props| props.disambiguation.is_some())
    {
        return Err(LookupError::SummaryUnavailable(format!(
            "{} (disambiguation page)",
            page.title
        )));
    }

    Ok(page.title)
}

fn extract_summary(title: &str, response: QueryResponse) -> Result<String, LookupError> {
    let page = response
        .query
        .and_then(|q| q.pages.into_iter().next())
        .ok_or_else(|| LookupError::SummaryUnavailable(title.to_string()))?;

    match page.extract {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(LookupError::SummaryUnavailable(title.to_string())),
    }
}
