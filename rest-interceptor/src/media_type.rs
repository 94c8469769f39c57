use std::fmt::Display;

const WILDCARD: &str = "*";

/// A parsed `Content-Type` value: type, subtype and its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    type_: String,
    subtype: String,
    parameters: Vec<(String, String)>,
}

impl MediaType {
    pub fn new<S1: Into<String>, S2: Into<String>>(type_: S1, subtype: S2) -> Self {
        Self {
            type_: type_.into().to_ascii_lowercase(),
            subtype: subtype.into().to_ascii_lowercase(),
            parameters: Vec::new(),
        }
    }

    pub fn multipart_form_data() -> Self {
        Self::new("multipart", "form-data")
    }

    pub fn application_form_urlencoded() -> Self {
        Self::new("application", "x-www-form-urlencoded")
    }

    /// Parses `type/subtype;key=value;...`. Returns `None` when there is no `/`
    /// or either side of it is empty.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split(';');
        let full_type = parts.next()?.trim();
        let (type_, subtype) = if full_type == WILDCARD {
            (WILDCARD, WILDCARD)
        } else {
            let mut split = full_type.splitn(2, '/');
            (split.next()?.trim(), split.next()?.trim())
        };

        if type_.is_empty() || subtype.is_empty() {
            return None;
        }

        let parameters = parts
            .filter_map(|parameter| {
                let mut split = parameter.splitn(2, '=');
                let key = split.next()?.trim();
                if key.is_empty() {
                    return None;
                }
                let value = split.next().unwrap_or("").trim().trim_matches('"');
                Some((key.to_ascii_lowercase(), value.to_string()))
            })
            .collect();

        Some(Self {
            type_: type_.to_ascii_lowercase(),
            subtype: subtype.to_ascii_lowercase(),
            parameters,
        })
    }

    pub fn type_(&self) -> &str {
        &self.type_
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn is_wildcard_type(&self) -> bool {
        self.type_ == WILDCARD
    }

    pub fn is_wildcard_subtype(&self) -> bool {
        self.subtype == WILDCARD || self.subtype.starts_with("*+")
    }

    fn subtype_suffix(&self) -> Option<&str> {
        self.subtype
            .rfind('+')
            .map(|position| &self.subtype[position + 1..])
    }

    /// Symmetric compatibility: equal type and subtype, where `*` on either side
    /// matches anything and `*+suffix` matches any subtype with that suffix.
    /// Parameters are ignored.
    pub fn is_compatible_with(&self, other: &MediaType) -> bool {
        if self.is_wildcard_type() || other.is_wildcard_type() {
            return true;
        }
        if self.type_ != other.type_ {
            return false;
        }
        if self.subtype == other.subtype {
            return true;
        }
        if !self.is_wildcard_subtype() && !other.is_wildcard_subtype() {
            return false;
        }
        if self.subtype == WILDCARD || other.subtype == WILDCARD {
            return true;
        }

        match (self.subtype_suffix(), other.subtype_suffix()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)?;
        for (key, value) in &self.parameters {
            write!(f, ";{}={}", key, value)?;
        }
        Ok(())
    }
}
