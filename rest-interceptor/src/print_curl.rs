use crate::{
    configuration::PrintCurlConfiguration,
    data::RequestData,
    error::Error,
    filter::RequestFilter,
    interceptor::{Interceptor, Next},
    serializer::CurlSerializer,
};
use async_trait::async_trait;
use hyper::{Body, Response};
use log::{log, warn, Level};
use std::{fmt::Debug, sync::Arc};

/// Receives every rendered curl command.
pub trait CurlSink: Debug + Send + Sync {
    fn emit(&self, level: Level, curl: &str);
}

/// Forwards to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl CurlSink for LogSink {
    fn emit(&self, level: Level, curl: &str) {
        log!(level, "Request-Curl:\n{}", curl);
    }
}

/// Logs each request as a `curl` command before passing it on unchanged.
#[derive(Debug)]
pub struct PrintCurlInterceptor {
    serializer: CurlSerializer,
    filter: RequestFilter,
    level: Level,
    sink: Arc<dyn CurlSink>,
}

impl PrintCurlInterceptor {
    pub fn new(serializer: CurlSerializer, filter: RequestFilter, level: Level) -> Self {
        Self {
            serializer,
            filter,
            level,
            sink: Arc::new(LogSink),
        }
    }

    pub fn from_configuration(configuration: &PrintCurlConfiguration) -> Result<Self, Error> {
        Ok(Self::new(
            CurlSerializer::new(configuration.ignore_headers.iter(), configuration.separator),
            RequestFilter::new(configuration.url_wishlist.iter())?,
            configuration.log_level(),
        ))
    }

    pub fn with_sink(mut self, sink: Arc<dyn CurlSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Prints `request` if the filter lets it through. Returns whether a line was emitted.
    pub fn print(&self, request: &RequestData) -> bool {
        if !self.filter.should_serialize(request) {
            return false;
        }

        match self.serializer.serialize(request) {
            Ok(curl) => {
                self.sink.emit(self.level, &curl);
                true
            }
            Err(e) => {
                warn!("print curl error: {}", e);
                false
            }
        }
    }
}

#[async_trait]
impl Interceptor for PrintCurlInterceptor {
    async fn intercept(
        &self,
        request: RequestData,
        next: Next<'_>,
    ) -> Result<Response<Body>, Error> {
        self.print(&request);

        next.run(request).await
    }
}
