use crate::error::ListerError;
use std::time::Duration;
use url::Url;

/// Request settings taken from the command line
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
    pub proxy: Option<String>,
}

/// Fetch a page body with a single GET. Transport errors and non-2xx
/// statuses are both reported as [`ListerError::Fetch`].
pub async fn fetch_page(url: &Url, options: &FetchOptions) -> Result<String, ListerError> {
    log::debug!("Fetching: {}", url);

    let mut client_builder = reqwest::Client::builder()
        .timeout(options.timeout)
        .user_agent(options.user_agent.as_str());

    if let Some(proxy_url) = &options.proxy {
        log::debug!("Using proxy: {}", proxy_url);
        client_builder = client_builder.proxy(reqwest::Proxy::all(proxy_url)?);
    }

    let client = client_builder.build()?;

    let response = client.get(url.clone()).send().await?;
    log::debug!("Status code: {}", response.status().as_u16());

    let response = response.error_for_status()?;
    let html = response.text().await?;
    log::debug!("Received {} bytes", html.len());

    Ok(html)
}
