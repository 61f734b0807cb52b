use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Deck;
use crate::persist::compute_str_hash;
use crate::quiz::validate_vocabulary;

const BUILTIN_DECK: &str = include_str!("../decks/default.yaml");

pub fn parse_deck(content: &str) -> Result<Deck> {
    let mut deck: Deck =
        serde_yaml::from_str(content).map_err(|e| Error::yaml("Invalid deck file", e))?;

    if deck.topics.is_empty() {
        return Err(Error::Deck("deck has no topics".to_string()));
    }

    let mut seen = HashSet::new();
    for topic in &deck.topics {
        if topic.id.trim().is_empty() {
            return Err(Error::Deck("topic with empty id".to_string()));
        }
        if !seen.insert(topic.id.as_str()) {
            return Err(Error::Deck(format!("duplicate topic id '{}'", topic.id)));
        }
        if topic.words.is_empty() {
            return Err(Error::Deck(format!("topic '{}' has no words", topic.id)));
        }
        validate_vocabulary(&topic.words)
            .map_err(|e| Error::Deck(format!("topic '{}': {}", topic.id, e)))?;
    }

    deck.deck_hash = compute_str_hash(content);
    Ok(deck)
}

pub fn load_deck(path: &Path) -> Result<Deck> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Cannot read deck {}", path.display()), e))?;
    let deck = parse_deck(&content)?;
    log::info!(
        "loaded deck {} ({} topics, {})",
        path.display(),
        deck.topics.len(),
        deck.deck_hash
    );
    Ok(deck)
}

pub fn builtin_deck() -> Result<Deck> {
    parse_deck(BUILTIN_DECK)
}
