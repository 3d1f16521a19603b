use std::path::{Path, PathBuf};

use encoding_rs::UTF_8;

use crate::error::Error;

/// File content substituted verbatim into the output.
///
/// The file is read each time the include is rendered, and its content is
/// neither escaped nor re-indented. If the file cannot be read the whole
/// render fails with [`Error::Include`].
///
/// The bytes are taken as UTF-8 whatever the content declares. A byte order
/// mark is kept, and malformed sequences become U+FFFD.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawInclude {
    path: PathBuf,
}

impl RawInclude {
    /// Include the file at `path`.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        RawInclude { path: path.into() }
    }

    /// The included path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file.
    pub fn read(&self) -> Result<String, Error> {
        let data = match std::fs::read(&self.path) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Failed to read raw include");
                return Err(Error::Include(self.path.clone(), e));
            }
        };
        let (text, malformed) = UTF_8.decode_without_bom_handling(&data);
        if malformed {
            tracing::warn!(path = %self.path.display(), "Raw include is not valid UTF-8");
        }
        tracing::debug!(path = %self.path.display(), bytes = data.len(), "Read raw include");
        Ok(text.into_owned())
    }
}
