//! Live network access for the offline worker.

use std::future::Future;
use std::time::Duration;

use bytes::Bytes;

use super::request::{Request, Response};
use crate::error::PortfolioResult;

/// Something that can perform a request against the live network.
///
/// An `Err` means the network itself failed (offline, DNS, reset); HTTP
/// error statuses are still `Ok` responses.
pub trait Network {
    fn fetch(&self, request: &Request) -> impl Future<Output = PortfolioResult<Response>> + Send;
}

/// reqwest-backed network.
#[derive(Clone, Debug)]
pub struct HttpNetwork {
    client: reqwest::Client,
}

impl HttpNetwork {
    pub fn new() -> PortfolioResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self { client })
    }
}

impl Network for HttpNetwork {
    fn fetch(&self, request: &Request) -> impl Future<Output = PortfolioResult<Response>> + Send {
        let client = self.client.clone();
        let url = request.url().clone();
        async move {
            let resp = client.get(url).send().await?;
            let status = resp.status().as_u16();
            let content_type = resp
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            let body: Bytes = resp.bytes().await?;
            Ok(Response {
                status,
                content_type,
                body,
            })
        }
    }
}
