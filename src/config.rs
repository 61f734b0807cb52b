use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::quiz::DEFAULT_MAX_QUESTIONS;

pub const CONFIG_FILE: &str = "config.yaml";

/// Settings read from `config.yaml`; every field is optional there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub deck: Option<PathBuf>,
    pub max_questions: usize,
    pub advance_delay_ms: u64,
    pub finish_delay_ms: u64,
    pub login_delay_ms: u64,
    pub signup_delay_ms: u64,
    pub speech_command: Option<String>,
    pub state_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            deck: None,
            max_questions: DEFAULT_MAX_QUESTIONS,
            advance_delay_ms: 1500,
            finish_delay_ms: 1000,
            login_delay_ms: 1000,
            signup_delay_ms: 1500,
            speech_command: None,
            state_dir: None,
        }
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| Error::yaml("Invalid config", e))
    }

    /// Reads `path` when it exists, defaults otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Cannot read {}", path.display()), e))?;
        Self::parse(&content)
    }

    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(deck) = &cli.deck {
            self.deck = Some(PathBuf::from(deck));
        }
        if let Some(n) = cli.questions {
            self.max_questions = n;
        }
        if let Some(dir) = &cli.state_dir {
            self.state_dir = Some(PathBuf::from(dir));
        }
        if let Some(cmd) = &cli.speech {
            self.speech_command = Some(cmd.clone());
        }
        if cli.fast {
            self.advance_delay_ms = 0;
            self.finish_delay_ms = 0;
            self.login_delay_ms = 0;
            self.signup_delay_ms = 0;
        }
        self
    }

    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    pub fn finish_delay(&self) -> Duration {
        Duration::from_millis(self.finish_delay_ms)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn signup_delay(&self) -> Duration {
        Duration::from_millis(self.signup_delay_ms)
    }
}
