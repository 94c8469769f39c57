use crate::{error::Error, util};
use hyper::{body, body::Bytes, Body, Request};

/// Header mapping that keeps the order headers were received in. Every name
/// appears once and may carry several values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, Vec<String>)>,
}

impl Headers {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a value to `name`, creating the entry at the end if it doesn't exist yet.
    pub fn append<S1: Into<String>, S2: Into<String>>(&mut self, name: S1, value: S2) {
        let name = name.into();
        let value = value.into();

        match self
            .entries
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(&name))
        {
            Some((_, values)) => values.push(value),
            None => self.entries.push((name, vec![value])),
        }
    }

    pub fn with<S1: Into<String>, S2: Into<String>>(mut self, name: S1, value: S2) -> Self {
        self.append(name, value);
        self
    }

    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        !self.get_all(name).is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Snapshot of an outgoing request. Cloning is cheap, the body is shared.
#[derive(Debug, Clone)]
pub struct RequestData {
    pub method: String,
    pub uri: String,
    pub headers: Headers,
    pub body: Bytes,
}

impl RequestData {
    pub fn new<S1: Into<String>, S2: Into<String>>(method: S1, uri: S2) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    pub fn with_header<S1: Into<String>, S2: Into<String>>(mut self, name: S1, value: S2) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn with_body<B: Into<Bytes>>(mut self, body: B) -> Self {
        self.body = body.into();
        self
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.first("Content-Type")
    }

    /// Reads the whole body of a hyper request into a snapshot.
    pub async fn from_request(request: Request<Body>) -> Result<Self, Error> {
        let (parts, request_body) = request.into_parts();
        let body = body::to_bytes(request_body)
            .await
            .map_err(|_| Error::InvalidBody)?;

        Ok(RequestData {
            method: parts.method.to_string(),
            uri: parts.uri.to_string(),
            headers: util::extract_headers(&parts.headers),
            body,
        })
    }

    pub(crate) fn into_request(self) -> Result<Request<Body>, Error> {
        let mut request_builder = Request::builder()
            .uri(self.uri.as_str())
            .method(self.method.as_str());

        if let Some(headers_mut) = request_builder.headers_mut() {
            util::put_headers(headers_mut, &self.headers)?;
        }

        Ok(request_builder.body(Body::from(self.body))?)
    }
}
