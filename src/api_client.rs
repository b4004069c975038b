use crate::{args::Args, config::Configuration};
use anyhow::Result;
use reqwest::{
    blocking::{Client, Response},
    header,
};
use serde::Serialize;
use std::time::Duration;

// Header names are case-insensitive and must be given in lowercase here.
const TOKEN_HEADER: &str = "x-quaketoken";

#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(args: &Args, config: &Configuration) -> Result<Self> {
        Ok(Self {
            client: ApiClient::build_client(args, config)?,
            base_url: args.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> reqwest::Result<Response> {
        self.client
            .post(format!("{}/{}", self.base_url, path))
            .json(body)
            .send()
    }

    fn build_client(args: &Args, config: &Configuration) -> Result<Client> {
        Client::builder()
            .default_headers(default_headers(config)?)
            .timeout(Duration::from_secs(args.timeout))
            .build()
            .map_err(Into::into)
    }
}

/// `Content-Type` and the token; nothing else from the config becomes a header.
pub fn default_headers(config: &Configuration) -> Result<header::HeaderMap> {
    let mut headers = header::HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );

    let mut token_value = header::HeaderValue::from_str(config.token()?)?;
    token_value.set_sensitive(true);
    headers.insert(header::HeaderName::from_static(TOKEN_HEADER), token_value);

    Ok(headers)
}
