use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while building or rendering an HTML tree.
#[derive(Debug)]
pub enum Error {
    /// A raw include could not read its file. The render that triggered the
    /// read is aborted.
    Include(PathBuf, std::io::Error),
    /// The tag name is not in the tag catalog.
    UnknownTag(String),
    /// Writing rendered output failed.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Include(path, e) => write!(f, "cannot include {}: {}", path.display(), e),
            Error::UnknownTag(name) => write!(f, "unknown tag: {}", name),
            Error::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Include(_, e) | Error::Io(e) => Some(e),
            Error::UnknownTag(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
