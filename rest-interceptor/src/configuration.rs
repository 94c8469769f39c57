use crate::{
    error::Error,
    serializer::{Separator, DEFAULT_IGNORE_HEADERS},
};
use log::Level;
use serde::Deserialize;
use std::{fs, path::Path};

/// Settings of both interceptors. Loaded once at startup, read-only afterwards.
///
/// ```yaml
/// print-curl:
///   separator: multi-line
///   url-wishlist: ["http://localhost/api/**"]
/// mock:
///   enable: true
///   conf:
///     - url: /users/*
///       body: '{"id":1}'
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct InterceptorConfiguration {
    pub print_curl: PrintCurlConfiguration,
    pub mock: MockConfiguration,
}

impl InterceptorConfiguration {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, Error> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file_contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&file_contents)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PrintCurlConfiguration {
    pub enable: bool,
    pub separator: Separator,
    pub debug_log: bool,
    pub ignore_headers: Vec<String>,
    /// Url patterns to print, everything when empty.
    pub url_wishlist: Vec<String>,
}

impl PrintCurlConfiguration {
    pub fn set_multi_line(&mut self) {
        self.separator = Separator::MultiLine;
    }

    pub fn set_single_line(&mut self) {
        self.separator = Separator::SingleLine;
    }

    pub fn set_debug_log(&mut self) {
        self.debug_log = true;
    }

    pub fn set_info_log(&mut self) {
        self.debug_log = false;
    }

    pub fn append_ignore_headers<S: Into<String>, I: IntoIterator<Item = S>>(&mut self, headers: I) {
        self.ignore_headers
            .extend(headers.into_iter().map(Into::into));
    }

    pub fn set_ignore_headers<S: Into<String>, I: IntoIterator<Item = S>>(&mut self, headers: I) {
        self.ignore_headers = headers.into_iter().map(Into::into).collect();
    }

    pub fn set_url_wishlist<S: Into<String>, I: IntoIterator<Item = S>>(&mut self, patterns: I) {
        self.url_wishlist = patterns.into_iter().map(Into::into).collect();
    }

    pub fn log_level(&self) -> Level {
        if self.debug_log {
            Level::Debug
        } else {
            Level::Info
        }
    }
}

impl Default for PrintCurlConfiguration {
    fn default() -> Self {
        Self {
            enable: true,
            separator: Separator::SingleLine,
            debug_log: false,
            ignore_headers: DEFAULT_IGNORE_HEADERS.iter().map(|h| h.to_string()).collect(),
            url_wishlist: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MockConfiguration {
    pub enable: bool,
    pub conf: Vec<MockEntryConfiguration>,
}

impl MockConfiguration {
    pub fn add_mock<S1: Into<String>, S2: Into<String>>(&mut self, url: S1, body: S2) {
        self.conf.push(MockEntryConfiguration {
            url: url.into(),
            body: body.into(),
        });
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MockEntryConfiguration {
    /// Pattern matched against the full url, query included.
    pub url: String,
    pub body: String,
}
