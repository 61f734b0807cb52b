use crate::error::{Error, Result};
use crate::store::KeyValueStore;

pub fn saved_key(topic: &str) -> String {
    format!("savedWords-{}", topic)
}

pub fn mastered_key(topic: &str) -> String {
    format!("mastered-{}", topic)
}

/// Saved and mastered word ids for one topic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicProgress {
    topic: String,
    saved: Vec<String>,
    mastered: Vec<String>,
}

impl TopicProgress {
    pub fn load(store: &dyn KeyValueStore, topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
            saved: read_ids(store, &saved_key(topic)),
            mastered: read_ids(store, &mastered_key(topic)),
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(&saved_key(&self.topic), &write_ids(&self.saved)?)?;
        store.set(&mastered_key(&self.topic), &write_ids(&self.mastered)?)?;
        Ok(())
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// `<topic>-<word>`, the id kept in the saved and mastered lists.
    pub fn word_id(&self, word: &str) -> String {
        format!("{}-{}", self.topic, word)
    }

    pub fn is_saved(&self, word: &str) -> bool {
        self.saved.contains(&self.word_id(word))
    }

    pub fn is_mastered(&self, word: &str) -> bool {
        self.mastered.contains(&self.word_id(word))
    }

    /// Returns whether the word is saved afterwards.
    pub fn toggle_saved(&mut self, word: &str) -> bool {
        let id = self.word_id(word);
        toggle(&mut self.saved, id)
    }

    /// Returns whether the word is mastered afterwards.
    pub fn toggle_mastered(&mut self, word: &str) -> bool {
        let id = self.word_id(word);
        toggle(&mut self.mastered, id)
    }

    pub fn saved_count(&self) -> usize {
        self.count_in_topic(&self.saved)
    }

    pub fn mastered_count(&self) -> usize {
        self.count_in_topic(&self.mastered)
    }

    pub fn mastery_percent(&self, total_words: usize) -> u16 {
        if total_words == 0 {
            return 0;
        }
        let pct = (self.mastered_count() as f64 / total_words as f64) * 100.0;
        pct.round() as u16
    }

    fn count_in_topic(&self, ids: &[String]) -> usize {
        let prefix = format!("{}-", self.topic);
        ids.iter().filter(|id| id.starts_with(&prefix)).count()
    }
}

fn toggle(ids: &mut Vec<String>, id: String) -> bool {
    if ids.contains(&id) {
        ids.retain(|existing| existing != &id);
        false
    } else {
        ids.push(id);
        true
    }
}

fn read_ids(store: &dyn KeyValueStore, key: &str) -> Vec<String> {
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };
    match serde_yaml::from_str::<Vec<String>>(&raw) {
        Ok(ids) => ids,
        Err(e) => {
            log::warn!("ignoring unreadable value for {}: {}", key, e);
            Vec::new()
        }
    }
}

fn write_ids(ids: &[String]) -> Result<String> {
    serde_yaml::to_string(ids).map_err(|e| Error::yaml("Cannot serialize word list", e))
}
