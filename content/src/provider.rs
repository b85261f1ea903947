use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared_kernel::http_client::{HttpClient, HttpClientError};
use shared_kernel::DocumentId;
use thiserror::Error;
use url::Url;

use crate::config::SETTINGS_CONFIG;
use crate::documents::facilities::{FacilitySlug, StorageFacility};
use crate::documents::forms::Form;
use crate::documents::hero::Hero;
use crate::documents::home_page::HomePage;
use crate::documents::locations::{District, Location};
use crate::documents::size_estimator::SizeEstimator;
use crate::documents::Linked;

/// Collections are small (a handful of locations and facilities), so a
/// single page at this limit always covers them.
const COLLECTION_PAGE_LIMIT: &str = "100";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Internal error")]
    InternalError(#[from] anyhow::Error),
    #[error("{0}")]
    ExpectedError(String),
}

impl From<HttpClientError> for ContentError {
    fn from(err: HttpClientError) -> Self {
        match err {
            HttpClientError::ErrorResponse { status, url, .. } if (400..500).contains(&status) => {
                ContentError::ExpectedError(format!(
                    "The content provider returned {status} for {url}"
                ))
            }
            other => ContentError::InternalError(other.into()),
        }
    }
}

/// Shape of the provider's paginated list responses. Only the fields the
/// site reads are modeled; the pagination cursors are ignored.
#[derive(Deserialize, Debug)]
struct DocumentPage<T> {
    docs: Vec<T>,
}

/// The home page sections that live in their own collections. A section
/// that cannot be resolved is `None` and the page renders without it.
#[derive(Debug, Default)]
pub struct HomePageSections {
    pub hero: Option<Hero>,
    pub size_estimator: Option<SizeEstimator>,
    pub quote_form: Option<Form>,
}

/// Read client for the headless content provider's REST interface.
///
/// `depth` on every fetch controls how many levels of relationships the
/// provider embeds; below that depth related documents arrive as bare ids
/// and surface as [`crate::documents::Linked::Unresolved`].
pub struct ContentProvider {
    host: String,
}

impl Default for ContentProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentProvider {
    /// Reads the provider host from this crate's configuration.
    pub fn new() -> Self {
        Self::with_host(SETTINGS_CONFIG.provider.host.clone())
    }

    /// Points the client at an explicit host instead of the configured one.
    pub fn with_host(host: impl Into<String>) -> Self {
        let host = host.into().trim_end_matches('/').to_string();
        ContentProvider { host }
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn home_page(&self, depth: u8) -> Result<HomePage, ContentError> {
        let url = Url::parse_with_params(
            &format!("{}/api/globals/home-page", self.host),
            &[("depth", depth.to_string())],
        )
        .context("Failed to parse url")?;
        Ok(HttpClient::get_json::<HomePage>(url).await?)
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn locations(&self, depth: u8) -> Result<Vec<Location>, ContentError> {
        self.collection("locations", Some("order"), depth).await
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn districts(&self, depth: u8) -> Result<Vec<District>, ContentError> {
        self.collection("districts", Some("order"), depth).await
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn storage_facilities(&self, depth: u8) -> Result<Vec<StorageFacility>, ContentError> {
        self.collection("storage-facilities", None, depth).await
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn facility_by_slug(
        &self,
        slug: &FacilitySlug,
        depth: u8,
    ) -> Result<Option<StorageFacility>, ContentError> {
        let url = Url::parse_with_params(
            &format!("{}/api/storage-facilities", self.host),
            &[
                ("where[slug][equals]", slug.inner()),
                ("limit", "1".to_string()),
                ("depth", depth.to_string()),
            ],
        )
        .context("Failed to parse url")?;
        let page = HttpClient::get_json::<DocumentPage<StorageFacility>>(url).await?;
        Ok(page.docs.into_iter().next())
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn hero(&self, id: &DocumentId, depth: u8) -> Result<Hero, ContentError> {
        self.document("heroes", id, depth).await
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn size_estimator(
        &self,
        id: &DocumentId,
        depth: u8,
    ) -> Result<SizeEstimator, ContentError> {
        self.document("size-estimators", id, depth).await
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn form(&self, id: &DocumentId, depth: u8) -> Result<Form, ContentError> {
        self.document("forms", id, depth).await
    }

    /// Resolves the hero, size estimator and quote form behind a home
    /// page in one concurrent round. Relationships the page already
    /// embeds are taken as-is; bare ids are fetched; sections that fail
    /// to resolve are dropped rather than failing the whole page.
    #[tracing::instrument(skip(self, page), level = "debug")]
    pub async fn home_page_sections(&self, page: &HomePage, depth: u8) -> HomePageSections {
        let hero = async {
            match &page.hero {
                Some(Linked::Resolved(hero)) => Some(hero.clone()),
                Some(Linked::Unresolved(id)) => match self.hero(id, depth).await {
                    Ok(hero) => Some(hero),
                    Err(error) => {
                        tracing::warn!("Failed to resolve the hero section: {error}");
                        None
                    }
                },
                None => None,
            }
        };
        let size_estimator = async {
            match &page.size_estimator {
                Some(Linked::Resolved(size_estimator)) => Some(size_estimator.clone()),
                Some(Linked::Unresolved(id)) => match self.size_estimator(id, depth).await {
                    Ok(size_estimator) => Some(size_estimator),
                    Err(error) => {
                        tracing::warn!("Failed to resolve the size estimator section: {error}");
                        None
                    }
                },
                None => None,
            }
        };
        let quote_form = async {
            match &page.quote_form {
                Some(Linked::Resolved(form)) => Some(form.clone()),
                Some(Linked::Unresolved(id)) => match self.form(id, depth).await {
                    Ok(form) => Some(form),
                    Err(error) => {
                        tracing::warn!("Failed to resolve the quote form section: {error}");
                        None
                    }
                },
                None => None,
            }
        };

        let (hero, size_estimator, quote_form) = futures::join!(hero, size_estimator, quote_form);
        HomePageSections {
            hero,
            size_estimator,
            quote_form,
        }
    }

    async fn collection<T: DeserializeOwned>(
        &self,
        collection: &str,
        sort: Option<&str>,
        depth: u8,
    ) -> Result<Vec<T>, ContentError> {
        let mut params = vec![
            ("limit", COLLECTION_PAGE_LIMIT.to_string()),
            ("depth", depth.to_string()),
        ];
        if let Some(sort) = sort {
            params.push(("sort", sort.to_string()));
        }
        let url = Url::parse_with_params(&format!("{}/api/{collection}", self.host), &params)
            .context("Failed to parse url")?;
        let page = HttpClient::get_json::<DocumentPage<T>>(url).await?;
        Ok(page.docs)
    }

    async fn document<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &DocumentId,
        depth: u8,
    ) -> Result<T, ContentError> {
        let url = Url::parse_with_params(
            &format!("{}/api/{collection}/{id}", self.host),
            &[("depth", depth.to_string())],
        )
        .context("Failed to parse url")?;
        HttpClient::get_json::<T>(url).await.map_err(|err| match err {
            HttpClientError::ErrorResponse { status: 404, .. } => ContentError::ExpectedError(
                format!("Document {collection}/{id} was not found"),
            ),
            other => other.into(),
        })
    }
}
