use crate::{data::Headers, error::Error};
use hyper::{
    header::{HeaderName, HeaderValue},
    HeaderMap,
};

pub fn extract_headers(header_map: &HeaderMap) -> Headers {
    // it currently ignores header values with opaque characters
    let mut headers = Headers::new();

    for (key, value) in header_map.iter() {
        if let Ok(value) = value.to_str() {
            headers.append(key.as_str(), value);
        }
    }

    headers
}

pub fn put_headers(header_map: &mut HeaderMap<HeaderValue>, headers: &Headers) -> Result<(), Error> {
    for (key, values) in headers.iter() {
        let header_name = HeaderName::from_lowercase(key.to_lowercase().as_bytes())?;
        for value in values {
            header_map.append(header_name.clone(), HeaderValue::from_str(value)?);
        }
    }

    Ok(())
}
