use crate::{
    configuration::MockConfiguration,
    data::RequestData,
    error::Error,
    interceptor::{Interceptor, Next},
    path_matcher::PathPattern,
};
use async_trait::async_trait;
use hyper::{
    body::Bytes,
    header::{HeaderValue, CONTENT_LENGTH, CONTENT_TYPE},
    Body, HeaderMap, Response, StatusCode,
};
use log::{debug, warn};

#[derive(Debug, Clone)]
pub struct MockEntry {
    pattern: PathPattern,
    body: Bytes,
}

impl MockEntry {
    pub fn new<S1: Into<String>, S2: Into<String>>(pattern: S1, body: S2) -> Result<Self, Error> {
        Ok(Self {
            pattern: PathPattern::new(pattern)?,
            body: Bytes::from(body.into()),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Canned responses keyed by url pattern. Entries are tried in declaration
/// order against the full url, query included, and the first match wins.
#[derive(Debug, Clone, Default)]
pub struct MockSubstitutionTable {
    entries: Vec<MockEntry>,
}

impl MockSubstitutionTable {
    pub fn new<I: IntoIterator<Item = MockEntry>>(entries: I) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn from_configuration(configuration: &MockConfiguration) -> Result<Self, Error> {
        let entries = configuration
            .conf
            .iter()
            .map(|entry| MockEntry::new(entry.url.as_str(), entry.body.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn try_match(&self, request: &RequestData) -> Option<MockResponse> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.pattern.matches(&request.uri))?;

        debug!("mock {} matched {} {}", entry.pattern(), request.method, request.uri);

        Some(MockResponse {
            content_type: request
                .headers
                .first("Accept")
                .and_then(|accept| accept.split(',').next())
                .map(str::trim)
                .filter(|media_type| !media_type.is_empty())
                .map(String::from),
            body: entry.body.clone(),
        })
    }
}

/// A synthesized `200 OK` carrying a canned body.
#[derive(Debug, Clone)]
pub struct MockResponse {
    content_type: Option<String>,
    body: Bytes,
}

impl MockResponse {
    pub fn status(&self) -> StatusCode {
        StatusCode::OK
    }

    /// `Content-Type` mirrors the first media type the request accepts;
    /// `Content-Length` is the byte length of the body.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();

        if let Some(content_type) = &self.content_type {
            match HeaderValue::from_str(content_type) {
                Ok(value) => {
                    headers.insert(CONTENT_TYPE, value);
                }
                Err(_) => warn!("ignoring unusable mock content type {:?}", content_type),
            }
        }
        headers.insert(CONTENT_LENGTH, HeaderValue::from(self.body.len()));

        headers
    }

    pub fn body(&self) -> Body {
        Body::from(self.body.clone())
    }

    pub fn into_response(self) -> Result<Response<Body>, Error> {
        let mut response_builder = Response::builder().status(self.status());

        if let Some(headers_mut) = response_builder.headers_mut() {
            headers_mut.extend(self.headers());
        }

        Ok(response_builder.body(self.body())?)
    }
}

#[derive(Debug)]
pub struct MockInterceptor {
    table: MockSubstitutionTable,
}

impl MockInterceptor {
    pub fn new(table: MockSubstitutionTable) -> Self {
        Self { table }
    }

    pub fn from_configuration(configuration: &MockConfiguration) -> Result<Self, Error> {
        Ok(Self::new(MockSubstitutionTable::from_configuration(
            configuration,
        )?))
    }
}

#[async_trait]
impl Interceptor for MockInterceptor {
    async fn intercept(
        &self,
        request: RequestData,
        next: Next<'_>,
    ) -> Result<Response<Body>, Error> {
        match self.table.try_match(&request) {
            Some(mock_response) => mock_response.into_response(),
            None => next.run(request).await,
        }
    }
}
