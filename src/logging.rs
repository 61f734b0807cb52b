use std::fs::{self, OpenOptions};
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::{Error, Result};
use crate::persist::LOG_FILE;

pub const LOG_ENV: &str = "VOCABQUIZ_LOG";

/// Sends log output to `<state_dir>/vocabquiz.log`; the terminal belongs to the TUI.
pub fn init(state_dir: &Path) -> Result<()> {
    fs::create_dir_all(state_dir)
        .map_err(|e| Error::io(format!("Cannot create {}", state_dir.display()), e))?;
    let path = state_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| Error::io(format!("Cannot open {}", path.display()), e))?;

    Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| Error::Other(format!("Cannot initialize logging: {}", e)))?;
    Ok(())
}
