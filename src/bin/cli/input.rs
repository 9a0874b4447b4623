use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// A query line together with its 1-based line number in the script.
#[derive(Debug)]
pub(crate) struct ScriptLine {
    pub(crate) number: usize,
    pub(crate) text: String,
}

#[derive(Debug)]
pub(crate) enum Script {
    Stdin,
    File(PathBuf),
}

impl Script {
    /// `None` and `-` both mean stdin.
    pub(crate) fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    /// Lines worth running: blank lines and `#` comments are skipped.
    pub(crate) fn lines(&self) -> Result<impl Iterator<Item = io::Result<ScriptLine>>> {
        let reader: Box<dyn BufRead> = match self {
            Script::Stdin => Box::new(BufReader::new(io::stdin())),
            Script::File(path) => Box::new(BufReader::new(
                File::open(path).with_context(|| format!("Unable to open {}", path.display()))?,
            )),
        };
        let lines = reader
            .lines()
            .enumerate()
            .map(|(i, line)| {
                line.map(|text| ScriptLine {
                    number: i + 1,
                    text,
                })
            })
            .filter(|line| match line {
                Ok(line) => {
                    let trimmed = line.text.trim();
                    !trimmed.is_empty() && !trimmed.starts_with('#')
                }
                Err(_) => true,
            });
        Ok(lines)
    }
}
