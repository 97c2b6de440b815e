use crate::config::BitacoraConfig;
use crate::domain::{ContentSection, Post};
use crate::richtext::RichTextBlock;
use crate::store::ContentStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

pub struct HttpContentStore {
    client: Client,
    base_url: String,
    document_type: String,
    access_token: Option<String>,
}

impl HttpContentStore {
    pub fn new(config: &BitacoraConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.cms_api_url.trim_end_matches('/').to_string(),
            document_type: config.document_type.clone(),
            access_token: config.cms_access_token.clone(),
        }
    }

    fn get(&self, url: String) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url);
        if let Some(token) = &self.access_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        request
    }
}

#[async_trait]
impl ContentStore for HttpContentStore {
    async fn list_post_slugs(&self) -> Result<Vec<String>> {
        let url = format!(
            "{}/documents?type={}",
            self.base_url, self.document_type
        );

        let response = self
            .get(url)
            .send()
            .await
            .context("Failed to query the content API for the post list")?
            .error_for_status()
            .context("Content API rejected the post list query")?;

        let query: QueryResponse = response
            .json()
            .await
            .context("Failed to decode the post list response")?;

        Ok(query.results.into_iter().map(|doc| doc.uid).collect())
    }

    async fn get_post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        let url = format!(
            "{}/documents/{}/{}",
            self.base_url, self.document_type, slug
        );

        let response = self
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch document '{}' from the content API", slug))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let document: PostDocument = response
            .error_for_status()
            .with_context(|| format!("Content API rejected the fetch of document '{}'", slug))?
            .json()
            .await
            .with_context(|| format!("Failed to decode document '{}'", slug))?;

        Ok(Some(document.into()))
    }
}

// wire DTOs for the CMS document payload; only the fields the page needs
#[derive(Deserialize)]
struct QueryResponse {
    results: Vec<PostDocument>,
}

#[derive(Deserialize)]
struct PostDocument {
    pub uid: String,
    pub first_publication_date: Option<String>,
    pub data: PostData,
}

#[derive(Deserialize)]
struct PostData {
    pub title: String,
    pub banner: Banner,
    pub author: String,
    #[serde(default)]
    pub content: Vec<SectionDocument>,
}

#[derive(Deserialize)]
struct Banner {
    pub url: String,
}

#[derive(Deserialize)]
struct SectionDocument {
    pub heading: String,
    #[serde(default)]
    pub body: Vec<RichTextBlock>,
}

impl From<PostDocument> for Post {
    fn from(document: PostDocument) -> Self {
        // dates arrive as RFC 3339 strings; anything unparseable renders dateless
        let first_publication_date = document
            .first_publication_date
            .and_then(|raw| chrono::DateTime::parse_from_rfc3339(&raw).ok());

        Post {
            slug: document.uid,
            first_publication_date,
            title: document.data.title,
            banner_url: document.data.banner.url,
            author: document.data.author,
            content: document
                .data
                .content
                .into_iter()
                .map(|section| ContentSection {
                    heading: section.heading,
                    body: section.body,
                })
                .collect(),
        }
    }
}
