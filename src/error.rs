use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Everything that can go wrong while parsing, naming or writing documents.
#[derive(Debug)]
pub enum Error {
    /// An entity reference without a closing `;`.
    UnclosedEntity(String),
    /// An entity or character reference that isn't recognized.
    InvalidEntity(String),
    /// A close tag that doesn't match the open element.
    UnexpectedCloseTag(String),
    /// An element still open at the end of the input.
    UnclosedTag(String),
    /// The input contained no document element.
    NoDocumentElement,
    /// The input's encoding could not be determined or decoded.
    UnsupportedEncoding(String),
    /// An input path without a final path component.
    MissingFileName(PathBuf),
    Io(std::io::Error),
    Parser(xmlparser::Error),
    /// An error tied to the input file it occurred in. The run driver
    /// wraps per-file failures in this so callers can report the path.
    File {
        path: PathBuf,
        source: Box<Error>,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnclosedEntity(entity) => {
                write!(f, "entity without closing semicolon: &{}", entity)
            }
            Error::InvalidEntity(entity) => write!(f, "unknown entity: &{};", entity),
            Error::UnexpectedCloseTag(tag) => write!(f, "unexpected close tag: {}", tag),
            Error::UnclosedTag(tag) => write!(f, "unclosed tag: {}", tag),
            Error::NoDocumentElement => write!(f, "no document element"),
            Error::UnsupportedEncoding(label) => write!(f, "unsupported encoding: {}", label),
            Error::MissingFileName(path) => {
                write!(f, "path has no file name: {}", path.display())
            }
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Parser(e) => write!(f, "parse error: {}", e),
            Error::File { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Parser(e) => Some(e),
            Error::File { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<xmlparser::Error> for Error {
    #[inline]
    fn from(e: xmlparser::Error) -> Self {
        Error::Parser(e)
    }
}

impl From<std::io::Error> for Error {
    #[inline]
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl Error {
    pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Error {
        Error::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
