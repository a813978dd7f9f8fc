use std::{
    error::Error,
    fmt::{self, Display},
    io,
    num::ParseIntError,
    path::PathBuf,
};

/// The result type used across the whole crate.
pub type Result<T> = std::result::Result<T, FannErr>;

/// Everything that can end a run before the network file is written.
#[derive(Debug)]
pub enum FannErr {
    /// Malformed invocation: wrong amount of output paths, too few layers, bad options.
    Usage(String),
    /// A layer size that isn't an unsigned integer.
    Parse {
        value: String,
        source: ParseIntError,
    },
    /// The network could not be written to `path`.
    Io { path: PathBuf, source: io::Error },
    /// The backend refused to build a network from the given topology.
    Construction(String),
}

impl FannErr {
    /// Whether the error stems from how the tool was invoked, in which case the usage text should
    /// follow the diagnostic.
    pub fn is_usage(&self) -> bool {
        matches!(self, FannErr::Usage(_) | FannErr::Parse { .. })
    }
}

impl Display for FannErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FannErr::Usage(msg) => write!(f, "{msg}"),
            FannErr::Parse { value, source } => {
                write!(f, "invalid layer size {value:?}: {source}")
            }
            FannErr::Io { path, source } => {
                write!(f, "failed to write {}: {source}", path.display())
            }
            FannErr::Construction(msg) => write!(f, "failed to build network: {msg}"),
        }
    }
}

impl Error for FannErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FannErr::Parse { source, .. } => Some(source),
            FannErr::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<clap::Error> for FannErr {
    fn from(value: clap::Error) -> Self {
        // clap renders a multi-line report, the first line is the actual complaint.
        let rendered = value.to_string();
        let line = rendered.lines().next().unwrap_or_default();
        Self::Usage(line.trim_start_matches("error: ").to_string())
    }
}
