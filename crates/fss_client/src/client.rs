use url::Url;

use fss_core::{
    download_query, navigation_query, ParseAs, QueryKind, QueryResult,
};
use fss_logging::{fss_debug, fss_warn};

use crate::{ClientError, ClientSettings, Downloaded, ReqwestTransport, Transport};

/// Client for one FSS plugin page.
///
/// Every request is issued against `base_url` with only the query string
/// varying, the same way the page's own scripts address the server.
pub struct FssClient<T: Transport = ReqwestTransport> {
    transport: T,
    base_url: Url,
}

impl FssClient<ReqwestTransport> {
    pub fn from_settings(base_url: &str, settings: &ClientSettings) -> Result<Self, ClientError> {
        Self::new(ReqwestTransport::new(settings)?, base_url)
    }
}

impl<T: Transport> FssClient<T> {
    pub fn new(transport: T, base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url} cannot carry a query"
            )));
        }
        Ok(Self {
            transport,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches the requested kinds for the server's current directory.
    pub async fn query(&self, kinds: &[QueryKind]) -> Result<QueryResult, ClientError> {
        self.query_at(None, kinds).await
    }

    /// Fetches the requested kinds after moving the server to `cwd`.
    pub async fn query_at(
        &self,
        cwd: Option<&str>,
        kinds: &[QueryKind],
    ) -> Result<QueryResult, ClientError> {
        let url = self.url_with_query(&navigation_query(cwd, kinds));
        let body = self.get(&url).await?;
        Ok(QueryResult::from_json(&body)?)
    }

    /// Downloads `path`, parsed per [`ParseAs::for_download`].
    pub async fn download(
        &self,
        path: &str,
        parse_as: Option<ParseAs>,
    ) -> Result<Downloaded, ClientError> {
        let url = self.url_with_query(&download_query(path));
        let body = self.get(&url).await?;
        match ParseAs::for_download(path, parse_as) {
            ParseAs::Json => Ok(Downloaded::Json(serde_json::from_slice(&body)?)),
            ParseAs::Text => String::from_utf8(body)
                .map(Downloaded::Text)
                .map_err(|err| ClientError::Decode(err.to_string())),
        }
    }

    /// Queries the listing, then downloads its root.
    pub async fn with_data(&self, parse_as: Option<ParseAs>) -> Result<Downloaded, ClientError> {
        let result = self.query(&[QueryKind::List]).await?;
        let listing = result
            .list
            .ok_or(ClientError::MissingField(QueryKind::List))?;
        fss_debug!("with_data: downloading root {}", listing.root);
        self.download(&listing.root, parse_as).await
    }

    fn url_with_query(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_query((!query.is_empty()).then_some(query));
        url
    }

    async fn get(&self, url: &Url) -> Result<Vec<u8>, ClientError> {
        self.transport.get(url).await.inspect_err(|err| {
            fss_warn!("GET {} failed: {}", url, err);
        })
    }
}
