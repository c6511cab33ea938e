//! Puzzle input loading

use crate::error::InputError;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where the puzzle input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read from standard input
    Stdin,
    /// Read from a file
    File(PathBuf),
}

impl InputSource {
    /// `-` selects standard input, anything else is a file path
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new("-") {
            InputSource::Stdin
        } else {
            InputSource::File(path.to_path_buf())
        }
    }

    /// Read the whole input
    pub fn read(&self) -> Result<String, InputError> {
        match self {
            InputSource::Stdin => {
                let mut input = String::new();
                io::stdin()
                    .read_to_string(&mut input)
                    .map_err(InputError::Stdin)?;
                Ok(input)
            }
            InputSource::File(path) => fs::read_to_string(path).map_err(|source| InputError::Io {
                path: path.clone(),
                source,
            }),
        }
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
