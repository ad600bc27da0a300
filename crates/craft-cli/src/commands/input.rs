//! Loading Craft source from a file, stdin or inline text.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Path(PathBuf),
    Stdin,
    Text(String),
}

impl Input {
    /// Inline text wins over a path; `-` and no path both mean stdin.
    pub fn new(path: Option<PathBuf>, text: Option<String>) -> Self {
        match (text, path) {
            (Some(text), _) => Input::Text(text),
            (None, Some(path)) if path.as_os_str() != "-" => Input::Path(path),
            (None, _) => Input::Stdin,
        }
    }

    /// Name used as the location prefix in diagnostics.
    pub fn label(&self) -> String {
        match self {
            Input::Path(path) => path.display().to_string(),
            Input::Stdin => "<stdin>".to_string(),
            Input::Text(_) => "<source>".to_string(),
        }
    }

    /// Reads the whole input. Invalid UTF-8 is replaced, never rejected.
    pub fn load(&self) -> Result<String, InputError> {
        let bytes = match self {
            Input::Text(text) => return Ok(text.clone()),
            Input::Path(path) => fs::read(path).map_err(|source| InputError::Read {
                path: path.display().to_string(),
                source,
            })?,
            Input::Stdin => {
                let mut buf = Vec::new();
                io::stdin()
                    .read_to_end(&mut buf)
                    .map_err(|source| InputError::Read {
                        path: "stdin".to_string(),
                        source,
                    })?;
                buf
            }
        };
        tracing::debug!(input = %self.label(), bytes = bytes.len(), "loaded input");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn load_or_exit(&self) -> String {
        match self.load() {
            Ok(source) => source,
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
