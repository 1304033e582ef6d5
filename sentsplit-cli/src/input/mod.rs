//! Input handling module

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use sentsplit_core::{Result, SplitError};

/// Where documents are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Interpret the positional argument; absent or `-` means stdin
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => InputSource::File(path.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }

    /// Open the source for line-by-line reading
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = open_file(path)?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Number of documents in a regular file; `None` for stdin, pipes and
    /// other sources that cannot be read twice
    ///
    /// Counts line terminators, plus one for a final unterminated line.
    pub fn count_documents(&self) -> Result<Option<u64>> {
        let InputSource::File(path) = self else {
            return Ok(None);
        };

        let metadata = fs::metadata(path).map_err(|source| SplitError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Ok(None);
        }

        let mut reader = BufReader::new(open_file(path)?);
        let mut buf = [0u8; 64 * 1024];
        let mut count = 0u64;
        let mut last = None;

        loop {
            let n = reader.read(&mut buf)?;
            if n == 0 {
                break;
            }
            count += buf[..n].iter().filter(|&&b| b == b'\n').count() as u64;
            last = Some(buf[n - 1]);
        }

        if matches!(last, Some(b) if b != b'\n') {
            count += 1;
        }
        Ok(Some(count))
    }

    /// Name used in log messages
    pub fn display_name(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| SplitError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })
}
