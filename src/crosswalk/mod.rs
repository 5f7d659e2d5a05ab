use std::time::Duration;
use color_eyre::eyre::{bail, WrapErr};
use log::info;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use crate::coverage::ZipCounties;
use crate::utils::retry_wrapper;

pub mod model;

pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/scpike/us-state-county-zip/master/geo-data.csv";
const UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// HTTP client for the zip/county CSV
struct CrosswalkClient {
    client: Client,
}

impl CrosswalkClient {
    fn new(timeout: Duration) -> color_eyre::Result<Self> {
        Ok(
            Self {
                client: Client::builder()
                    .default_headers(Self::default_headers())
                    .timeout(timeout)
                    .build()?,
            }
        )
    }

    fn default_headers() -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(USER_AGENT, HeaderValue::from_static(UA));
        map
    }

    async fn fetch_text(&self, url: &str, retries: usize) -> color_eyre::Result<String> {
        Ok(
            retry_wrapper(url, retries, || async {
                self.client
                    .get(url)
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await
            }).await?
        )
    }
}

/// Downloads the zip -> county crosswalk for Ohio.
pub struct CrosswalkSource {
    client: CrosswalkClient,
    url: String,
    retries: usize,
}

impl CrosswalkSource {
    pub fn new(url: impl Into<String>, timeout: Duration, retries: usize) -> color_eyre::Result<Self> {
        Ok(
            Self {
                client: CrosswalkClient::new(timeout)?,
                url: url.into(),
                retries,
            }
        )
    }

    /// fetch and parse, failing when the body holds no usable Ohio rows
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch(&self) -> color_eyre::Result<ZipCounties> {
        info!("fetching zip/county crosswalk from [{}]...", self.url);
        let body = self.client.fetch_text(&self.url, self.retries).await
            .wrap_err_with(|| format!("cannot fetch {}", self.url))?;

        let zip_counties = model::parse_crosswalk(&body);
        if zip_counties.is_empty() {
            bail!("no Ohio rows found in {}", self.url);
        }
        info!("got [{}] Ohio zips from the crosswalk", zip_counties.len());
        Ok(zip_counties)
    }
}
