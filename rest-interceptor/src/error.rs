use hyper::http;
use std::{fmt::Display, io};

#[derive(Debug)]
pub enum Error {
    MalformedBody(String),
    InvalidPattern(String),
    InvalidHeaderName,
    InvalidHeaderValue,
    InvalidBody,
    ConfigurationError(String),
    IoError(io::Error),
    HyperError(hyper::Error),
    HttpError(http::Error),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedBody(reason) => write!(f, "Malformed request body: {}", reason),
            Error::InvalidPattern(pattern) => write!(f, "Invalid url pattern: {}", pattern),
            Error::InvalidHeaderName => write!(f, "Invalid header name"),
            Error::InvalidHeaderValue => write!(f, "Invalid header value"),
            Error::InvalidBody => write!(f, "Invalid body"),
            Error::ConfigurationError(reason) => write!(f, "Configuration error: {}", reason),
            Error::IoError(e) => write!(f, "IoError: {}", e),
            Error::HyperError(e) => write!(f, "Hyper error: {}", e),
            Error::HttpError(e) => write!(f, "Http Error: {}", e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IoError(e)
    }
}

impl From<hyper::header::InvalidHeaderName> for Error {
    fn from(_: hyper::header::InvalidHeaderName) -> Self {
        Error::InvalidHeaderName
    }
}

impl From<hyper::header::InvalidHeaderValue> for Error {
    fn from(_: hyper::header::InvalidHeaderValue) -> Self {
        Error::InvalidHeaderValue
    }
}

impl From<hyper::Error> for Error {
    fn from(e: hyper::Error) -> Self {
        Error::HyperError(e)
    }
}

impl From<http::Error> for Error {
    fn from(e: http::Error) -> Self {
        Error::HttpError(e)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::ConfigurationError(e.to_string())
    }
}
