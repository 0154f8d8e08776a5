//! Number File Module
//!
//! Reads and writes numeral lists as decimal text files. A number file holds
//! the decimal value on its first line; anything after it is ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use entities_number_list::{CircularList, NumberListError, DEFAULT_BASE};
use infrastructure_base_conversion::DecimalCodec;
use thiserror::Error;

/// Number file operations
pub struct NumberFile;

/// Number file errors
#[derive(Debug, Error)]
pub enum NumberFileError {
    /// The decimal form could not be written
    #[error("failed to write number file {}", .path.display())]
    Write {
        /// Destination that failed
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

impl NumberFile {
    /// Load a binary list from the decimal number stored in `path`.
    ///
    /// Missing or unreadable files, and files whose first line is not a
    /// non-negative decimal number, give an empty list.
    pub fn load<P: AsRef<Path>>(path: P) -> CircularList {
        Self::read_first_line(path.as_ref())
            .and_then(|line| DecimalCodec::decode(&line, DEFAULT_BASE).ok())
            .unwrap_or_default()
    }

    /// Load the number stored in `path` as a list of `base` digits.
    ///
    /// Read failures still give an empty list; only an invalid base is an error.
    pub fn load_with_base<P: AsRef<Path>>(path: P, base: u32) -> Result<CircularList, NumberListError> {
        let empty = CircularList::with_base(base)?;
        match Self::read_first_line(path.as_ref()) {
            Some(line) => DecimalCodec::decode(&line, base),
            None => Ok(empty),
        }
    }

    /// Write the decimal form of `list` as the whole content of `path`.
    ///
    /// An empty list writes an empty file.
    pub fn save<P: AsRef<Path>>(list: &CircularList, path: P) -> Result<(), NumberFileError> {
        let path = path.as_ref();
        let decimal = DecimalCodec::encode(list);
        fs::write(path, decimal.as_bytes()).map_err(|source| {
            tracing::warn!(
                target: "numeral::io",
                path = %path.display(),
                error = %source,
                "failed to save number file"
            );
            NumberFileError::Write {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    fn read_first_line(path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(content) => Some(content.lines().next().unwrap_or("").trim().to_string()),
            Err(error) => {
                tracing::warn!(
                    target: "numeral::io",
                    path = %path.display(),
                    error = %error,
                    "failed to read number file, producing empty list"
                );
                None
            }
        }
    }
}
