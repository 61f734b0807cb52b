use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "vocabquiz", version, about = "Terminal vocabulary trainer")]
pub struct Cli {
    /// Deck file (YAML) [default: bundled deck]
    pub deck: Option<String>,

    /// Open this topic directly
    #[arg(long, value_name = "id")]
    pub topic: Option<String>,

    /// Maximum number of questions per quiz
    #[arg(long, value_name = "n")]
    pub questions: Option<usize>,

    /// Seed for question order and distractors
    #[arg(long, value_name = "n")]
    pub seed: Option<u64>,

    /// Directory for progress, results and the log file
    #[arg(long, value_name = "dir")]
    pub state_dir: Option<String>,

    /// Text-to-speech command; the word is appended as last argument
    #[arg(long, value_name = "cmd")]
    pub speech: Option<String>,

    /// Skip simulated sign-in latency and answer pacing
    #[arg(long)]
    pub fast: bool,

    /// Clear saved progress and results and start fresh
    #[arg(long)]
    pub clear: bool,

    /// Show progress per topic without entering the TUI
    #[arg(long)]
    pub status: bool,

    /// Export quiz results to file
    #[arg(long, value_name = "path")]
    pub export: Option<String>,
}
