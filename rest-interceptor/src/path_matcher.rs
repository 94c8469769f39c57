//! Glob matching for request urls.
//!
//! `*` matches within one path segment, `**` matches across segments, `?`
//! matches a single character other than `/`. A `**` that fills a whole
//! segment also matches zero segments, so `/users/**` matches `/users`.
//! Matching is always anchored at both ends.

use crate::error::Error;
use regex::Regex;

const SEPARATOR: char = '/';

#[derive(Debug, Clone)]
pub struct PathPattern {
    pattern: String,
    regex: Regex,
}

impl PathPattern {
    pub fn new<S: Into<String>>(pattern: S) -> Result<Self, Error> {
        let pattern = pattern.into();
        let regex = Regex::new(&glob_to_regex(&pattern))
            .map_err(|_| Error::InvalidPattern(pattern.clone()))?;

        Ok(Self { pattern, regex })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// One-off match. A pattern that can't be compiled matches nothing.
pub fn matches(pattern: &str, candidate: &str) -> bool {
    PathPattern::new(pattern)
        .map(|pattern| pattern.matches(candidate))
        .unwrap_or(false)
}

fn glob_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut regex = String::from("(?s)^");
    let mut i = 0;

    while i < chars.len() {
        let is_double_star = |at: usize| chars.get(at) == Some(&'*') && chars.get(at + 1) == Some(&'*');

        match chars[i] {
            // trailing "/**" also matches the bare parent
            SEPARATOR if is_double_star(i + 1) && i + 3 == chars.len() => {
                regex.push_str("(?:/.*)?");
                i += 3;
            }
            '*' if is_double_star(i) => {
                let starts_segment = i == 0 || chars[i - 1] == SEPARATOR;
                if starts_segment && chars.get(i + 2) == Some(&SEPARATOR) {
                    regex.push_str("(?:.*/)?");
                    i += 3;
                } else {
                    regex.push_str(".*");
                    i += 2;
                }
            }
            '*' => {
                regex.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                regex.push_str("[^/]");
                i += 1;
            }
            c => {
                regex.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
                i += 1;
            }
        }
    }

    regex.push('$');
    regex
}
