pub mod fallback;
#[cfg(feature = "network")]
pub mod gemini;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of items a session needs. Index 0 feeds the AI-detection
/// challenge and index 1 the lateral-reading challenge; the rest are headroom
/// for future stages and for variety in remote responses.
pub const MIN_ITEMS: usize = 6;

/// One generated (or fallback) source-criticism exercise. Field names follow
/// the wire schema of the generation request (`isTrue` etc.). Immutable after
/// fetch; challenge builders only borrow it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeItem {
    pub headline: String,
    pub body: String,
    pub source: String,
    pub is_true: bool,
    pub explanation: String,
    pub clues: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Request(String),
    #[error("content response malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A provider of challenge items. One fetch per session, no retry; failures
/// are absorbed by `resolve`, never shown to the user.
pub trait ContentSource: Send {
    fn fetch(&self) -> Result<Vec<ChallengeItem>, ContentError>;
}

/// Where the session's items came from, shown as a small header note when the
/// remote provider was not (fully) used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentOrigin {
    Remote,
    /// Remote answered but came up short; padded from the fallback list.
    Padded,
    Fallback,
}

#[derive(Clone, Debug)]
pub struct ResolvedContent {
    pub items: Vec<ChallengeItem>,
    pub origin: ContentOrigin,
}

/// Resolve the session's content: one attempt against `source` (if any), then
/// deterministic padding from the embedded fallback list so the result always
/// holds at least [`MIN_ITEMS`] items. The fallback list itself is validated
/// at startup, which makes this step infallible.
pub fn resolve(source: Option<&dyn ContentSource>, fallback: Vec<ChallengeItem>) -> ResolvedContent {
    debug_assert!(fallback.len() >= MIN_ITEMS);

    let fetched = match source {
        Some(source) => source.fetch().ok(),
        None => None,
    };

    match fetched {
        Some(items) if items.len() >= MIN_ITEMS => ResolvedContent {
            items,
            origin: ContentOrigin::Remote,
        },
        Some(mut items) if !items.is_empty() => {
            let missing = MIN_ITEMS - items.len();
            items.extend(fallback.into_iter().take(missing));
            ResolvedContent {
                items,
                origin: ContentOrigin::Padded,
            }
        }
        _ => ResolvedContent {
            items: fallback,
            origin: ContentOrigin::Fallback,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSource(Result<Vec<ChallengeItem>, ()>);

    impl ContentSource for StubSource {
        fn fetch(&self) -> Result<Vec<ChallengeItem>, ContentError> {
            match &self.0 {
                Ok(items) => Ok(items.clone()),
                Err(()) => Err(ContentError::Request("stub failure".to_string())),
            }
        }
    }

    fn item(headline: &str) -> ChallengeItem {
        ChallengeItem {
            headline: headline.to_string(),
            body: "body".to_string(),
            source: "source.example".to_string(),
            is_true: false,
            explanation: "explanation".to_string(),
            clues: vec!["clue".to_string()],
        }
    }

    fn fallback_items() -> Vec<ChallengeItem> {
        (0..MIN_ITEMS).map(|i| item(&format!("fallback-{i}"))).collect()
    }

    #[test]
    fn test_resolve_uses_remote_when_sufficient() {
        let remote: Vec<_> = (0..MIN_ITEMS).map(|i| item(&format!("remote-{i}"))).collect();
        let source = StubSource(Ok(remote));
        let resolved = resolve(Some(&source), fallback_items());
        assert_eq!(resolved.origin, ContentOrigin::Remote);
        assert_eq!(resolved.items.len(), MIN_ITEMS);
        assert_eq!(resolved.items[0].headline, "remote-0");
    }

    #[test]
    fn test_resolve_pads_short_response() {
        let source = StubSource(Ok(vec![item("remote-0"), item("remote-1")]));
        let resolved = resolve(Some(&source), fallback_items());
        assert_eq!(resolved.origin, ContentOrigin::Padded);
        assert_eq!(resolved.items.len(), MIN_ITEMS);
        assert_eq!(resolved.items[0].headline, "remote-0");
        assert_eq!(resolved.items[2].headline, "fallback-0");
    }

    #[test]
    fn test_resolve_falls_back_on_error_and_empty() {
        let erroring = StubSource(Err(()));
        let resolved = resolve(Some(&erroring), fallback_items());
        assert_eq!(resolved.origin, ContentOrigin::Fallback);
        assert_eq!(resolved.items.len(), MIN_ITEMS);

        let empty = StubSource(Ok(Vec::new()));
        let resolved = resolve(Some(&empty), fallback_items());
        assert_eq!(resolved.origin, ContentOrigin::Fallback);
        assert_eq!(resolved.items.len(), MIN_ITEMS);
    }

    #[test]
    fn test_resolve_without_source_uses_fallback() {
        let resolved = resolve(None, fallback_items());
        assert_eq!(resolved.origin, ContentOrigin::Fallback);
        assert_eq!(resolved.items.len(), MIN_ITEMS);
    }

    #[test]
    fn test_item_wire_schema_round_trip() {
        let json = r#"{
            "headline": "h",
            "body": "b",
            "source": "s",
            "isTrue": true,
            "explanation": "e",
            "clues": ["c1", "c2"]
        }"#;
        let item: ChallengeItem = serde_json::from_str(json).unwrap();
        assert!(item.is_true);
        assert_eq!(item.clues.len(), 2);
        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["isTrue"], serde_json::Value::Bool(true));
    }
}
