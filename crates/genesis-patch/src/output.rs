//! Output destination for the rendered patch

use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use crate::error::PatchError;

/// Where the rendered patch goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `-` selects stdout; anything else is a file path.
    pub fn parse(value: &str) -> Self {
        if value == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(value))
        }
    }

    /// Write the whole document, then flush and release the destination.
    pub fn write(&self, text: &str) -> Result<(), PatchError> {
        let result = match self {
            OutputTarget::Stdout => write_all(&mut io::stdout().lock(), text),
            OutputTarget::File(path) => {
                File::create(path).and_then(|mut file| write_all(&mut file, text))
            }
        };

        result.map_err(|source| PatchError::Output {
            target: self.to_string(),
            source,
        })?;

        info!(target = %self, bytes = text.len(), "Genesis patch written");
        Ok(())
    }
}

fn write_all<W: Write>(writer: &mut W, text: &str) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

impl FromStr for OutputTarget {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stdout => f.write_str("<stdout>"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}
