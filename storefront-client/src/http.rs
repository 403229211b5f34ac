//! Product retrieval: the source trait and its HTTP implementation

use async_trait::async_trait;
use reqwest::Client;
use shared::{Category, Product};

use crate::{ClientConfig, ClientError, ClientResult};

/// Product-by-category retrieval
///
/// Any error is fatal for the fetch run that issued the request.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn products_by_category(&self, category: Category) -> ClientResult<Vec<Product>>;
}

#[async_trait]
impl<S: ProductSource + ?Sized> ProductSource for std::sync::Arc<S> {
    async fn products_by_category(&self, category: Category) -> ClientResult<Vec<Product>> {
        (**self).products_by_category(category).await
    }
}

/// Network product source backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpProductSource {
    /// Create a new source from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Base URL requests are issued against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn category_url(&self, category: Category) -> String {
        format!("{}/api/products/category/{}", self.base_url, category)
    }

    async fn handle_response(response: reqwest::Response) -> ClientResult<Vec<Product>> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn products_by_category(&self, category: Category) -> ClientResult<Vec<Product>> {
        let url = self.category_url(category);
        let mut req = self.client.get(&url);
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        tracing::trace!(%url, "requesting category products");
        let response = req.send().await?;
        Self::handle_response(response).await
    }
}
