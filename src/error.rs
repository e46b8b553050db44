use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, GlossaryError>;

#[derive(Debug, thiserror::Error)]
pub enum GlossaryError {
    /// A block ran into the end of input before its blank-line terminator.
    #[error("malformed input: block for term {term:?} starting at line {line} is not terminated by a blank line")]
    MalformedInput { term: String, line: usize },

    #[error("io error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // DaachorseError implements Display only, so it is carried in the message.
    #[error("failed to build term matcher: {0}")]
    Matcher(daachorse::errors::DaachorseError),

    #[error("failed to render {page}")]
    Render {
        page: String,
        #[source]
        source: askama::Error,
    },
}

impl GlossaryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GlossaryError::Io {
            path: path.into(),
            source,
        }
    }
}
