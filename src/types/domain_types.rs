// src/types/domain_types.rs
//! Domain-specific newtypes for type safety and validation.

use super::ValidationError;
use std::fmt;
use url::Url;

/// API key sent as `X-Api-Key` to regulations.gov.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Create a new API key with validation
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        let key = key.trim();

        if key.is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot be empty".to_string(),
            });
        }

        if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key must not contain whitespace".to_string(),
            });
        }

        Ok(Self(key.to_string()))
    }

    /// Get the API key as a string reference
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self)
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact API key in display
        let visible: String = self.0.chars().take(4).collect();
        write!(f, "{}...", visible)
    }
}

/// Base URL of the upstream API, always without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim().trim_end_matches('/');
        let url = Url::parse(trimmed).map_err(|e| ValidationError::InvalidUrl {
            url: input.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ValidationError::InvalidUrl {
                    url: input.to_string(),
                    reason: format!("unsupported scheme '{}'", other),
                })
            }
        }

        if url.cannot_be_a_base() || url.query().is_some() {
            return Err(ValidationError::InvalidUrl {
                url: input.to_string(),
                reason: "must be a base URL without a query".to_string(),
            });
        }

        Ok(Self(url))
    }

    /// Joins path segments onto the base, percent-encoding each segment.
    pub fn join_segments<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.0.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single topic keyword, stored as supplied (lowercase by convention).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

impl Keyword {
    pub fn new(word: impl Into<String>) -> Result<Self, ValidationError> {
        let word = word.into();
        let trimmed = word.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::InvalidKeyword {
                keyword: word.clone(),
                reason: "keyword cannot be empty".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The keyword with its first character uppercased: `pima` → `Pima`.
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Case-sensitive containment of the keyword or its capitalized form.
    pub fn occurs_in(&self, text: &str) -> bool {
        text.contains(self.0.as_str()) || text.contains(self.capitalized().as_str())
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The set of keywords a comment is matched against. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet(Vec<Keyword>);

impl KeywordSet {
    pub fn new(keywords: Vec<Keyword>) -> Result<Self, ValidationError> {
        if keywords.is_empty() {
            return Err(ValidationError::EmptyField("keyword"));
        }
        Ok(Self(keywords))
    }

    /// Parses raw strings, rejecting blanks.
    pub fn parse<S: AsRef<str>>(words: &[S]) -> Result<Self, ValidationError> {
        let keywords = words
            .iter()
            .map(|w| Keyword::new(w.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(keywords)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.0.iter()
    }

    /// True when any keyword occurs in `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.0.iter().any(|k| k.occurs_in(text))
    }
}

impl fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words: Vec<&str> = self.0.iter().map(Keyword::as_str).collect();
        write!(f, "{}", words.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_matches_both_capitalizations() {
        let cotton = Keyword::new("cotton").unwrap();
        assert_eq!(cotton.capitalized(), "Cotton");
        assert!(cotton.occurs_in("upland cotton prices"));
        assert!(cotton.occurs_in("Cotton growers"));
        assert!(!cotton.occurs_in("COTTON"));
        assert!(!cotton.occurs_in("wheat"));
    }

    #[test]
    fn keyword_set_rejects_empty_input() {
        assert!(KeywordSet::parse::<&str>(&[]).is_err());
        assert!(KeywordSet::parse(&["cotton", "  "]).is_err());

        let set = KeywordSet::parse(&["cotton", "pima"]).unwrap();
        assert_eq!(set.to_string(), "cotton, pima");
        assert!(set.matches("We grow Pima here"));
    }

    #[test]
    fn base_url_joins_and_encodes_segments() {
        let base = BaseUrl::parse("https://beta.regulations.gov/api/").unwrap();
        let url = base.join_segments(["documentdetails", "FSA-2020-0004-0003"]);
        assert_eq!(
            url.as_str(),
            "https://beta.regulations.gov/api/documentdetails/FSA-2020-0004-0003"
        );

        let url = base.join_segments(["documentdetails", "a b"]);
        assert!(url.as_str().ends_with("/documentdetails/a%20b"));
    }

    #[test]
    fn base_url_rejects_non_http() {
        assert!(BaseUrl::parse("ftp://example.com").is_err());
        assert!(BaseUrl::parse("not a url").is_err());
        assert!(BaseUrl::parse("https://example.com/api?x=1").is_err());
    }

    #[test]
    fn api_key_is_redacted() {
        let key = ApiKey::new("DEMO_KEY_123456").unwrap();
        assert_eq!(key.to_string(), "DEMO...");
        assert_eq!(format!("{:?}", key), "ApiKey(DEMO...)");
        assert!(ApiKey::new("   ").is_err());
    }
}
