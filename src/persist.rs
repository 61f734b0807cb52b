use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::model::{Deck, Score};
use crate::progress::TopicProgress;
use crate::session::QuizSession;
use crate::store::{atomic_write, KeyValueStore};

pub const STORE_FILE: &str = "store.yaml";
pub const RESULTS_FILE: &str = "results.yaml";
pub const LOG_FILE: &str = "vocabquiz.log";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizRecord {
    pub topic: String,
    pub deck_hash: String,
    pub completed_at: String,
    pub correct: usize,
    pub total: usize,
    pub answers: Vec<AnswerRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub answer: Option<String>,
    pub correct: bool,
}

impl QuizRecord {
    pub fn from_session(topic: &str, deck_hash: &str, session: &QuizSession) -> Self {
        let answers = session
            .questions()
            .iter()
            .map(|q| {
                let answer = session.answer_for(&q.id).map(|a| a.to_string());
                let correct = session.scored_correct(&q.id).unwrap_or(false);
                AnswerRecord {
                    question_id: q.id.clone(),
                    kind: q.kind.name().to_string(),
                    answer,
                    correct,
                }
            })
            .collect();
        let score = session.score();
        Self {
            topic: topic.to_string(),
            deck_hash: deck_hash.to_string(),
            completed_at: chrono::Local::now().to_rfc3339(),
            correct: score.correct,
            total: score.total,
            answers,
        }
    }

    pub fn score(&self) -> Score {
        Score {
            correct: self.correct,
            total: self.total,
        }
    }
}

/// Data directory for the store, results and log. `override_dir` wins.
pub fn state_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    let dirs = ProjectDirs::from("", "", "vocabquiz")
        .ok_or_else(|| Error::Other("Cannot determine a home directory".to_string()))?;
    Ok(dirs.data_dir().to_path_buf())
}

pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "vocabquiz").map(|d| d.config_dir().to_path_buf())
}

pub fn load_history(state_dir: &Path) -> Result<Vec<QuizRecord>> {
    let path = state_dir.join(RESULTS_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path)
        .map_err(|e| Error::io(format!("Cannot read {}", path.display()), e))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(&content).map_err(|e| {
        Error::yaml(
            format!("Corrupt {} (use --clear to reset)", RESULTS_FILE),
            e,
        )
    })
}

pub fn append_result(state_dir: &Path, record: QuizRecord) -> Result<()> {
    fs::create_dir_all(state_dir)
        .map_err(|e| Error::io(format!("Cannot create {}", state_dir.display()), e))?;
    let mut history = load_history(state_dir)?;
    log::info!(
        "recording {} result {}/{}",
        record.topic,
        record.correct,
        record.total
    );
    history.push(record);
    let yaml = serde_yaml::to_string(&history)
        .map_err(|e| Error::yaml("Cannot serialize results", e))?;
    atomic_write(&state_dir.join(RESULTS_FILE), &yaml)
}

pub fn export_history(state_dir: &Path, path: &str) -> Result<()> {
    let history = load_history(state_dir)?;
    let yaml = serde_yaml::to_string(&history)
        .map_err(|e| Error::yaml("Cannot serialize results", e))?;
    fs::write(path, &yaml).map_err(|e| Error::io("Cannot export", e))?;
    Ok(())
}

pub fn clear_state(state_dir: &Path) -> Result<()> {
    for name in [STORE_FILE, RESULTS_FILE] {
        let path = state_dir.join(name);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| Error::io("Cannot clear state", e))?;
        }
    }
    Ok(())
}

pub fn status_report(deck: &Deck, store: &dyn KeyValueStore, history: &[QuizRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Deck: {}\n", deck.title()));
    out.push_str(&format!("Topics: {}\n", deck.topics.len()));
    for topic in &deck.topics {
        let progress = TopicProgress::load(store, &topic.id);
        let total = topic.words.len();
        out.push_str(&format!(
            "  {:<14} mastered {}/{} ({}%), saved {}",
            topic.id,
            progress.mastered_count(),
            total,
            progress.mastery_percent(total),
            progress.saved_count()
        ));
        if let Some(last) = history.iter().rev().find(|r| r.topic == topic.id) {
            out.push_str(&format!(
                ", last quiz {}/{} on {}",
                last.correct, last.total, last.completed_at
            ));
        }
        out.push('\n');
    }
    out
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn compute_str_hash(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let result = hasher.finalize();
    format!("sha256:{}", hex_encode(&result))
}
