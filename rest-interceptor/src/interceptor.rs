//! The outgoing request pipeline.
//!
//! Every request passes through the registered interceptors in order. An
//! interceptor either hands the request on with [`Next::run`] or answers it
//! itself; the last step is always the [`HttpClient`].

use crate::{
    configuration::InterceptorConfiguration, data::RequestData, error::Error,
    http_client::HttpClient, mock::MockInterceptor, print_curl::PrintCurlInterceptor,
};
use async_trait::async_trait;
use hyper::{Body, Request, Response};
use log::info;
use std::{fmt::Debug, sync::Arc};

#[async_trait]
pub trait Interceptor: Debug + Send + Sync {
    async fn intercept(&self, request: RequestData, next: Next<'_>)
        -> Result<Response<Body>, Error>;
}

/// The rest of the chain after the current interceptor.
pub struct Next<'a> {
    interceptors: &'a [Arc<dyn Interceptor>],
    http_client: &'a dyn HttpClient,
}

impl<'a> Next<'a> {
    pub async fn run(self, request: RequestData) -> Result<Response<Body>, Error> {
        match self.interceptors.split_first() {
            Some((interceptor, rest)) => {
                let next = Next {
                    interceptors: rest,
                    http_client: self.http_client,
                };
                interceptor.intercept(request, next).await
            }
            None => self.http_client.execute(request).await,
        }
    }
}

#[derive(Debug)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn Interceptor>>,
    http_client: Arc<dyn HttpClient>,
}

impl InterceptorChain {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            interceptors: Vec::new(),
            http_client,
        }
    }

    /// Builds the chain described by `configuration`: the curl printer first,
    /// then the mock table. Disabled features are not registered.
    pub fn from_configuration(
        configuration: &InterceptorConfiguration,
        http_client: Arc<dyn HttpClient>,
    ) -> Result<Self, Error> {
        let mut chain = Self::new(http_client);

        if configuration.print_curl.enable {
            chain.add_interceptor(Arc::new(PrintCurlInterceptor::from_configuration(
                &configuration.print_curl,
            )?));
        }

        if configuration.mock.enable {
            chain.add_interceptor(Arc::new(MockInterceptor::from_configuration(
                &configuration.mock,
            )?));
        }

        Ok(chain)
    }

    pub fn add_interceptor(&mut self, interceptor: Arc<dyn Interceptor>) {
        info!("register interceptor: {:?}", interceptor);
        self.interceptors.push(interceptor);
    }

    pub fn with_interceptor<I: Interceptor + 'static>(mut self, interceptor: I) -> Self {
        self.add_interceptor(Arc::new(interceptor));
        self
    }

    pub fn interceptors(&self) -> &[Arc<dyn Interceptor>] {
        &self.interceptors
    }

    pub async fn execute(&self, request: RequestData) -> Result<Response<Body>, Error> {
        let next = Next {
            interceptors: &self.interceptors,
            http_client: self.http_client.as_ref(),
        };

        next.run(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> Result<Response<Body>, Error> {
        let request_data = RequestData::from_request(request).await?;

        self.execute(request_data).await
    }
}
