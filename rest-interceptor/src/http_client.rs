use crate::{data::RequestData, error::Error};
use async_trait::async_trait;
use hyper::{client::HttpConnector, Body, Client, Response};
use hyper_tls::HttpsConnector;
use std::fmt::Debug;

/// The transport that performs the real network call.
#[async_trait]
pub trait HttpClient: Debug + Send + Sync {
    async fn execute(&self, request: RequestData) -> Result<Response<Body>, Error>;
}

#[derive(Debug)]
pub struct HyperHttpClient {
    client: Client<HttpsConnector<HttpConnector>>,
}

impl HyperHttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder().build(HttpsConnector::new()),
        }
    }
}

#[async_trait]
impl HttpClient for HyperHttpClient {
    async fn execute(&self, request: RequestData) -> Result<Response<Body>, Error> {
        let request = request.into_request()?;

        Ok(self.client.request(request).await?)
    }
}

impl Default for HyperHttpClient {
    fn default() -> Self {
        Self::new()
    }
}
