use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use vocabquiz::cli::Cli;
use vocabquiz::config::{Config, CONFIG_FILE};
use vocabquiz::error::{Error, Result};
use vocabquiz::persist::{self, STORE_FILE};
use vocabquiz::state::AppState;
use vocabquiz::store::FileStore;
use vocabquiz::{deck, logging, source, speech, tui};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Config file, then command line
    let config = match persist::config_dir() {
        Some(dir) => Config::load(&dir.join(CONFIG_FILE))?,
        None => Config::default(),
    }
    .apply_cli(&cli);

    let state_dir = persist::state_dir(config.state_dir.as_deref())?;
    if let Err(e) = logging::init(&state_dir) {
        eprintln!("Warning: {}", e);
    }
    log::info!("starting, state in {}", state_dir.display());

    // Handle --clear
    if cli.clear {
        persist::clear_state(&state_dir)?;
        eprintln!("State cleared.");
    }

    let deck = match &config.deck {
        Some(path) => deck::load_deck(&source::resolve_deck(path)?)?,
        None => deck::builtin_deck()?,
    };

    let store = FileStore::open(&state_dir.join(STORE_FILE))?;

    // Handle --status
    if cli.status {
        let history = persist::load_history(&state_dir)?;
        print!("{}", persist::status_report(&deck, &store, &history));
        return Ok(());
    }

    // Handle --export
    if let Some(ref export_path) = cli.export {
        persist::export_history(&state_dir, export_path)?;
        eprintln!("Results exported to {}", export_path);
        return Ok(());
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let speaker = speech::default_speaker(config.speech_command.as_deref());

    let mut state = AppState::new(
        deck,
        config,
        state_dir,
        Box::new(store),
        speaker,
        rng,
    );

    if let Some(ref topic) = cli.topic {
        if state.user.is_some() && !state.open_topic_by_id(topic) {
            return Err(Error::Other(format!("Unknown topic '{}'", topic)));
        }
    }

    tui::run_tui(state)
}
