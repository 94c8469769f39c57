use crate::{data::RequestData, error::Error, path_matcher::PathPattern};

/// Decides which requests get printed. An empty wishlist lets everything through.
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    wishlist: Vec<PathPattern>,
}

impl RequestFilter {
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(wishlist: I) -> Result<Self, Error> {
        Ok(Self {
            wishlist: wishlist
                .into_iter()
                .map(PathPattern::new)
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn should_serialize(&self, request: &RequestData) -> bool {
        if self.wishlist.is_empty() {
            return true;
        }

        let url = strip_query(&request.uri);
        self.wishlist.iter().any(|pattern| pattern.matches(&url))
    }
}

/// Removes the query component, keeping any fragment.
fn strip_query(uri: &str) -> String {
    match uri.find('?') {
        Some(query_start) => {
            let fragment = uri[query_start..]
                .find('#')
                .map(|offset| &uri[query_start + offset..])
                .unwrap_or("");
            format!("{}{}", &uri[..query_start], fragment)
        }
        None => uri.to_string(),
    }
}
