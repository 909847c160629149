// src/models/recommendation.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use url::Url;
use validator::Validate;

/// Kind of remediation content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaType {
    Video,
    Article,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Video => "VIDEO",
            MediaType::Article => "ARTICLE",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown media type '{0}'")]
pub struct UnknownMediaType(pub String);

impl TryFrom<String> for MediaType {
    type Error = UnknownMediaType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "VIDEO" => Ok(MediaType::Video),
            "ARTICLE" => Ok(MediaType::Article),
            _ => Err(UnknownMediaType(value)),
        }
    }
}

/// Represents the 'recommendations' table. Read-only reference data, many per topic.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: i64,
    pub topic_id: i64,
    pub url: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub media_type: MediaType,
}

/// DTO for attaching remediation content to a topic.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRecommendationRequest {
    pub topic_id: i64,
    #[validate(length(min = 1, max = 500), custom(function = validate_url_string))]
    pub url: String,
    #[validate(length(max = 2000))]
    pub description: String,
    pub media_type: MediaType,
}

/// Validates that a string is a correctly formatted URL.
fn validate_url_string(url: &str) -> Result<(), validator::ValidationError> {
    if Url::parse(url).is_err() {
        return Err(validator::ValidationError::new("invalid_url"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_from_column() {
        assert_eq!(MediaType::try_from("VIDEO".to_string()).unwrap(), MediaType::Video);
        assert_eq!(
            MediaType::try_from("ARTICLE".to_string()).unwrap(),
            MediaType::Article
        );
        assert!(MediaType::try_from("PODCAST".to_string()).is_err());
    }

    #[test]
    fn test_media_type_json() {
        let json = serde_json::to_string(&MediaType::Video).unwrap();
        assert_eq!(json, "\"VIDEO\"");
        let parsed: MediaType = serde_json::from_str("\"ARTICLE\"").unwrap();
        assert_eq!(parsed, MediaType::Article);
    }

    #[test]
    fn test_recommendation_url_validation() {
        let ok = CreateRecommendationRequest {
            topic_id: 1,
            url: "https://example.com/arrays".to_string(),
            description: "Arrays crash course".to_string(),
            media_type: MediaType::Video,
        };
        assert!(ok.validate().is_ok());

        let bad = CreateRecommendationRequest {
            url: "not a url".to_string(),
            ..ok
        };
        assert!(bad.validate().is_err());
    }
}
