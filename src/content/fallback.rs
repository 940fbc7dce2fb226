use anyhow::{Context, Result, ensure};
use rust_embed::Embed;

use crate::content::{ChallengeItem, MIN_ITEMS};

#[derive(Embed)]
#[folder = "assets/content/"]
struct ContentAssets;

/// The embedded fallback challenge list. A malformed or short list is a fatal
/// configuration error; validate once at startup, before entering the TUI.
pub fn items() -> Result<Vec<ChallengeItem>> {
    let file = ContentAssets::get("fallback.json").context("embedded fallback content missing")?;
    let items: Vec<ChallengeItem> =
        serde_json::from_slice(file.data.as_ref()).context("embedded fallback content malformed")?;
    ensure!(
        items.len() >= MIN_ITEMS,
        "embedded fallback content has {} items, need at least {MIN_ITEMS}",
        items.len()
    );
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_parses_with_enough_items() {
        let items = items().unwrap();
        assert!(items.len() >= MIN_ITEMS);
    }

    #[test]
    fn test_fallback_items_are_complete() {
        for item in items().unwrap() {
            assert!(!item.headline.is_empty());
            assert!(!item.body.is_empty());
            assert!(!item.source.is_empty());
            assert!(!item.explanation.is_empty());
            assert!(!item.clues.is_empty());
        }
    }

    #[test]
    fn test_fallback_covers_both_truth_labels() {
        let items = items().unwrap();
        assert!(items.iter().any(|i| i.is_true));
        assert!(items.iter().any(|i| !i.is_true));
    }
}
