//! Search results and citations

use serde::{Deserialize, Serialize};

/// Web page cited by a generated answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSource {
    pub uri: String,
    pub title: String,
}

/// Citation object returned next to generated text: `{ "web": { uri, title } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingChunk {
    pub web: WebSource,
}

impl GroundingChunk {
    pub fn web(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            web: WebSource {
                uri: uri.into(),
                title: title.into(),
            },
        }
    }
}

/// Generated answer plus the sources it was grounded on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    #[serde(default)]
    pub sources: Vec<GroundingChunk>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grounding_chunk_shape() {
        let chunk = GroundingChunk::web("https://ai.google.dev/", "Google AI for Developers");
        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(json["web"]["uri"], "https://ai.google.dev/");
        assert_eq!(json["web"]["title"], "Google AI for Developers");
    }

    #[test]
    fn test_search_result_sources_default_to_empty() {
        let result: SearchResult = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();
        assert_eq!(result.text, "hi");
        assert!(result.sources.is_empty());
    }
}
