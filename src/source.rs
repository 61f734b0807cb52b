use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

fn is_deck_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .map_or(false, |e| e == "yaml" || e == "yml")
}

/// Resolves a deck argument: a YAML file, or a directory holding exactly one.
pub fn resolve_deck(path: &Path) -> Result<PathBuf> {
    let path = if path.is_relative() {
        std::env::current_dir()
            .map_err(|e| Error::io("Cannot get cwd", e))?
            .join(path)
    } else {
        path.to_path_buf()
    };

    if is_deck_file(&path) {
        Ok(path)
    } else if path.is_dir() {
        find_deck_file(&path)
    } else {
        Err(Error::Other(format!("Deck not found: {}", path.display())))
    }
}

fn find_deck_file(dir: &Path) -> Result<PathBuf> {
    let mut decks: Vec<PathBuf> = Vec::new();

    let entries = std::fs::read_dir(dir)
        .map_err(|e| Error::io(format!("Cannot read directory {}", dir.display()), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| Error::io("Error reading entry", e))?;
        let path = entry.path();
        if is_deck_file(&path) {
            decks.push(path);
        }
    }

    match decks.len() {
        0 => Err(Error::Other(format!(
            "No .yaml deck files found in {}",
            dir.display()
        ))),
        1 => Ok(decks.remove(0)),
        _ => {
            decks.sort();
            let names: Vec<String> = decks
                .iter()
                .map(|p| format!("  - {}", p.file_name().unwrap_or_default().to_string_lossy()))
                .collect();
            Err(Error::Other(format!(
                "Multiple deck files found. Specify which one:\n{}",
                names.join("\n")
            )))
        }
    }
}
