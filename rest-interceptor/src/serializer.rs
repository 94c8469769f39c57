//! Renders a [`RequestData`] as a `curl` command line.
//!
//! The request is broken into [`RenderToken`]s in the order method, url,
//! headers, body. Each token renders independently; tokens that render to
//! nothing are dropped before the rest are joined with the separator.

use crate::{
    body::{quote, BodyRenderer},
    data::RequestData,
    error::Error,
    media_type::MediaType,
};
use serde::Deserialize;

pub const DEFAULT_IGNORE_HEADERS: [&str; 2] = ["Accept", "Content-Length"];

#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Separator {
    SingleLine,
    MultiLine,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::SingleLine => " ",
            Separator::MultiLine => " \\\n",
        }
    }
}

impl Default for Separator {
    fn default() -> Self {
        Separator::SingleLine
    }
}

#[derive(Debug, Clone, Copy)]
pub enum RenderToken<'a> {
    Method(&'a str),
    Url(&'a str),
    Header { key: &'a str, values: &'a [String] },
    Body {
        content_type: Option<&'a str>,
        body: &'a [u8],
    },
}

impl<'a> RenderToken<'a> {
    pub fn render(&self, separator: Separator) -> Result<Option<String>, Error> {
        Ok(match *self {
            RenderToken::Method(method) => Some(format!("curl -X {}", method)),
            RenderToken::Url(uri) => Some(quote(uri)),
            RenderToken::Header { key, values } => {
                Some(format!("-H {}", quote(&format!("{}: {}", key, values.join(";")))))
            }
            RenderToken::Body { content_type, body } => {
                let media_type = content_type.and_then(MediaType::parse);
                return BodyRenderer::select(media_type.as_ref(), body)
                    .render(body, separator.as_str());
            }
        })
    }
}

#[derive(Debug, Clone)]
pub struct CurlSerializer {
    ignore_headers: Vec<String>,
    separator: Separator,
}

impl CurlSerializer {
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(
        ignore_headers: I,
        separator: Separator,
    ) -> Self {
        Self {
            ignore_headers: ignore_headers.into_iter().map(Into::into).collect(),
            separator,
        }
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn ignore_headers(&self) -> &[String] {
        &self.ignore_headers
    }

    fn is_ignored(&self, header_name: &str) -> bool {
        self.ignore_headers
            .iter()
            .any(|ignored| ignored.eq_ignore_ascii_case(header_name))
    }

    /// The tokens of `request`, ignored headers already left out.
    pub fn tokens<'a>(&'a self, request: &'a RequestData) -> impl Iterator<Item = RenderToken<'a>> + 'a {
        let headers = request
            .headers
            .iter()
            .filter(move |(key, _)| !self.is_ignored(key))
            .map(|(key, values)| RenderToken::Header { key, values });

        vec![RenderToken::Method(&request.method), RenderToken::Url(&request.uri)]
            .into_iter()
            .chain(headers)
            .chain(std::iter::once(RenderToken::Body {
                content_type: request.content_type(),
                body: &request.body,
            }))
    }

    pub fn serialize(&self, request: &RequestData) -> Result<String, Error> {
        let mut fragments = Vec::new();
        for token in self.tokens(request) {
            if let Some(fragment) = token.render(self.separator)? {
                fragments.push(fragment);
            }
        }

        Ok(fragments.join(self.separator.as_str()))
    }
}

impl Default for CurlSerializer {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORE_HEADERS.iter().copied(), Separator::SingleLine)
    }
}
