use crate::{error::Error, media_type::MediaType};
use lazy_static::lazy_static;
use regex::Regex;
use std::str;

lazy_static! {
    static ref DISPOSITION_NAME_REGEX: Regex =
        Regex::new(r#";\s*name\s*=\s*(?:"(?P<quoted>[^"]*)"|(?P<bare>[^;\s]*))"#).unwrap();
}

const FIELD_FLAG: &str = "-F";
const URL_ENCODED_FLAG: &str = "--data-urlencode";
const DATA_FLAG: &str = "-d";
const CONTENT_DISPOSITION: &str = "Content-Disposition";

/// How a request body is turned into curl arguments.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BodyRenderer {
    Empty,
    UrlEncoded,
    Multipart,
    Raw,
}

impl BodyRenderer {
    pub fn select(content_type: Option<&MediaType>, body: &[u8]) -> Self {
        if body.is_empty() {
            return BodyRenderer::Empty;
        }

        match content_type {
            Some(media_type) if MediaType::multipart_form_data().is_compatible_with(media_type) => {
                BodyRenderer::Multipart
            }
            Some(media_type)
                if MediaType::application_form_urlencoded().is_compatible_with(media_type) =>
            {
                BodyRenderer::UrlEncoded
            }
            _ => BodyRenderer::Raw,
        }
    }

    /// Renders the body fragment, `None` when there is nothing to render.
    /// Form bodies that aren't valid UTF-8 fall back to the raw rendering.
    pub fn render(self, body: &[u8], separator: &str) -> Result<Option<String>, Error> {
        let text = match self {
            BodyRenderer::Empty => return Ok(None),
            BodyRenderer::Raw => return Ok(Some(render_raw(body))),
            BodyRenderer::UrlEncoded | BodyRenderer::Multipart => match str::from_utf8(body) {
                Ok(text) => text,
                Err(_) => return Ok(Some(render_raw(body))),
            },
        };

        let units = if self == BodyRenderer::Multipart {
            multipart_units(text)?
        } else {
            url_encoded_units(text)
        };

        if units.is_empty() {
            return Ok(None);
        }

        Ok(Some(units.join(separator)))
    }
}

/// Single-quotes `text` for a POSIX shell.
pub fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

fn field_unit(flag: &str, key: &str, value: &str) -> String {
    format!("{} {}", flag, quote(&format!("{}=\"{}\"", key, value)))
}

fn render_raw(body: &[u8]) -> String {
    format!("{} {}", DATA_FLAG, quote(&String::from_utf8_lossy(body)))
}

fn url_encoded_units(text: &str) -> Vec<String> {
    text.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut split = pair.splitn(2, '=');
            let key = split.next().unwrap_or("");
            let value = split.next().unwrap_or("");
            field_unit(URL_ENCODED_FLAG, key, value)
        })
        .collect()
}

// Only simple fields are reconstructed: the value is the single line after
// the blank line that ends the part headers.
fn multipart_units(text: &str) -> Result<Vec<String>, Error> {
    let mut units = Vec::new();
    let mut lines = text.lines();

    while let Some(line) = lines.next() {
        if !line.starts_with(CONTENT_DISPOSITION) {
            continue;
        }

        let name = disposition_name(line)?;
        let mut value = "";
        while let Some(header_line) = lines.next() {
            if header_line.is_empty() {
                value = lines.next().unwrap_or("");
                break;
            }
        }

        units.push(field_unit(FIELD_FLAG, name, value));
    }

    Ok(units)
}

fn disposition_name(line: &str) -> Result<&str, Error> {
    DISPOSITION_NAME_REGEX
        .captures(line)
        .and_then(|captures| captures.name("quoted").or_else(|| captures.name("bare")))
        .map(|name| name.as_str())
        .ok_or_else(|| Error::MalformedBody(format!("no field name in \"{}\"", line)))
}
