use std::process::{Command, Stdio};
use std::thread;

use crate::error::{Error, Result};

pub trait Speaker {
    fn speak(&self, text: &str) -> Result<()>;
}

pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn speak(&self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// Hands text to an external text-to-speech program and does not wait for it.
#[derive(Debug, Clone)]
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    /// Parses a command line such as `espeak -v en-us`; the text is appended
    /// as the last argument.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut parts = command.split_whitespace().map(|s| s.to_string());
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// First of the usual speech programs that is installed.
    pub fn detect() -> Option<Self> {
        for (program, args) in [
            ("espeak-ng", vec!["-v", "en-us"]),
            ("espeak", vec!["-v", "en-us"]),
            ("say", vec![]),
        ] {
            if is_installed(program) {
                return Some(Self {
                    program: program.to_string(),
                    args: args.into_iter().map(|a| a.to_string()).collect(),
                });
            }
        }
        None
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::io(format!("Cannot run '{}'", self.program), e))?;

        // Reap off-thread; the key loop must not wait for playback
        let program = self.program.clone();
        thread::spawn(move || {
            if let Err(e) = child.wait() {
                log::warn!("waiting for {} failed: {}", program, e);
            }
        });
        Ok(())
    }
}

fn is_installed(program: &str) -> bool {
    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&paths).any(|dir| dir.join(program).is_file())
}

pub fn default_speaker(command: Option<&str>) -> Box<dyn Speaker> {
    let speaker = match command {
        Some(cmd) => CommandSpeaker::from_command_line(cmd),
        None => CommandSpeaker::detect(),
    };
    match speaker {
        Some(s) => {
            log::info!("speech via {}", s.program());
            Box::new(s)
        }
        None => {
            log::info!("no speech program found; audio disabled");
            Box::new(NullSpeaker)
        }
    }
}
