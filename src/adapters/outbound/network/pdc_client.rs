use crate::dependency_resolution::domain::{ComponentName, DependencyEdge, QueryScope};
use crate::ports::outbound::{EdgeProvider, ProviderResult};
use crate::shared::error::ConnectivityError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Results requested per page
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Per-request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Upper bound on results followed for one query
///
/// The page cap derives from it, so a small page size still drains the
/// same number of results.
const MAX_RESULTS: usize = 1000 * DEFAULT_PAGE_SIZE;

const API_PATH: &str = "rest_api/v1/";

/// One page of a paginated PDC listing
#[derive(Debug, Deserialize)]
struct Page<T> {
    #[serde(default)]
    next: Option<String>,
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ReleaseComponent {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ComponentRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Relationship {
    from_component: ComponentRef,
    to_component: ComponentRef,
}

/// PdcEdgeProvider adapter for the PDC REST API (v1)
///
/// Implements the EdgeProvider port on top of the `release-components` and
/// `release-component-relationships` listings. Every listing is drained by
/// following the `next` links the server hands back.
pub struct PdcEdgeProvider {
    client: reqwest::Client,
    server: String,
    api_base: String,
    page_size: usize,
}

impl PdcEdgeProvider {
    /// Creates a provider with the default page size and timeout
    pub fn new(server: &str) -> Result<Self> {
        Self::with_options(
            server,
            DEFAULT_PAGE_SIZE,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Creates a provider with an explicit page size and per-request timeout
    ///
    /// `server` is either a bare host name (`pdc.fedoraproject.org`, reached
    /// over https) or a full URL, which is used as-is.
    pub fn with_options(server: &str, page_size: usize, timeout: Duration) -> Result<Self> {
        let server = server.trim();
        if server.is_empty() {
            anyhow::bail!("PDC server must not be empty");
        }

        let user_agent = format!("pdc-tangle/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            server: server.to_string(),
            api_base: Self::api_base(server),
            page_size: page_size.max(1),
        })
    }

    /// Root URL of the REST API, always ending with a slash
    pub fn api_base(server: &str) -> String {
        let base = if server.contains("://") {
            server.trim_end_matches('/').to_string()
        } else {
            format!("https://{}", server.trim_end_matches('/'))
        };

        if base.ends_with(API_PATH.trim_end_matches('/')) {
            format!("{}/", base)
        } else {
            format!("{}/{}", base, API_PATH)
        }
    }

    /// Pages followed before a listing counts as runaway pagination
    fn max_pages(&self) -> usize {
        MAX_RESULTS.div_ceil(self.page_size)
    }

    fn endpoint(&self, resource: &str, query: &[(&str, &str)]) -> String {
        format!("{}{}/?{}", self.api_base, resource, encode_query(query))
    }

    fn unreachable(&self, details: impl ToString) -> ConnectivityError {
        ConnectivityError::Unreachable {
            server: self.server.clone(),
            details: details.to_string(),
        }
    }

    fn unexpected(&self, details: impl ToString) -> ConnectivityError {
        ConnectivityError::UnexpectedResponse {
            server: self.server.clone(),
            details: details.to_string(),
        }
    }

    async fn fetch_page<T: DeserializeOwned>(&self, url: &str) -> ProviderResult<Page<T>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.unexpected(format!("HTTP {} for {}", status, url)));
        }

        response
            .json::<Page<T>>()
            .await
            .map_err(|e| self.unexpected(format!("undecodable page: {}", e)))
    }

    /// Walks a listing page by page, handing each page's results to `visit`
    ///
    /// Stops early when `visit` returns `true`.
    async fn walk_pages<T, F>(&self, first_url: String, mut visit: F) -> ProviderResult<()>
    where
        T: DeserializeOwned,
        F: FnMut(Vec<T>) -> ProviderResult<bool>,
    {
        let max_pages = self.max_pages();
        let mut url = first_url;
        for _ in 0..max_pages {
            let page: Page<T> = self.fetch_page(&url).await?;
            if visit(page.results)? {
                return Ok(());
            }
            match page.next {
                Some(next) if !next.is_empty() => url = next,
                _ => return Ok(()),
            }
        }

        Err(self.unexpected(format!(
            "pagination did not end after {} pages of {} results",
            max_pages, self.page_size
        )))
    }
}

#[async_trait]
impl EdgeProvider for PdcEdgeProvider {
    async fn component_exists(&self, name: &ComponentName) -> ProviderResult<bool> {
        let page_size = self.page_size.to_string();
        let url = self.endpoint(
            "release-components",
            &[("name", name.as_str()), ("page_size", &page_size)],
        );

        // the listing filter may be looser than an exact match
        let mut found = false;
        self.walk_pages(url, |components: Vec<ReleaseComponent>| {
            found = components.iter().any(|c| c.name == name.as_str());
            Ok(found)
        })
        .await?;

        Ok(found)
    }

    async fn fetch_edges(
        &self,
        names: &[ComponentName],
        scope: &QueryScope,
    ) -> ProviderResult<Vec<DependencyEdge>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let page_size = self.page_size.to_string();
        let mut query: Vec<(&str, &str)> = names
            .iter()
            .map(|name| ("from_component_name", name.as_str()))
            .collect();
        query.push(("from_component_release", scope.release()));
        query.extend(
            scope
                .dependency_types()
                .iter()
                .map(|label| ("type", label.as_str())),
        );
        query.push(("page_size", &page_size));
        let url = self.endpoint("release-component-relationships", &query);

        let mut edges = Vec::new();
        self.walk_pages(url, |relationships: Vec<Relationship>| {
            for relationship in relationships {
                let from = ComponentName::new(relationship.from_component.name)
                    .map_err(|e| self.unexpected(e))?;
                let to = ComponentName::new(relationship.to_component.name)
                    .map_err(|e| self.unexpected(e))?;
                edges.push(DependencyEdge::new(from, to));
            }
            Ok(false)
        })
        .await?;

        Ok(edges)
    }

    fn server(&self) -> &str {
        &self.server
    }
}

/// Percent-encodes query pairs; keys may repeat
fn encode_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}
