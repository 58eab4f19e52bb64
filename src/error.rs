use std::fmt;
use std::io;
use std::path::PathBuf;

pub type ResolveResult = Result<PathBuf, ResolveError>;

#[derive(Debug)]
pub enum ResolveError {
    InvalidPath(String),
    CurrentDir(nix::Error),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::InvalidPath(token) => write!(f, "Invalid path: {}", token),
            ResolveError::CurrentDir(e) => write!(f, "Cannot read current directory: {}", e),
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::CurrentDir(e) => Some(e),
            _ => None,
        }
    }
}

impl From<nix::Error> for ResolveError {
    fn from(e: nix::Error) -> Self {
        ResolveError::CurrentDir(e)
    }
}

#[derive(Debug)]
pub enum RunError {
    Resolve(ResolveError),
    Io(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Resolve(e) => write!(f, "{}", e),
            RunError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Resolve(e) => Some(e),
            RunError::Io(e) => Some(e),
        }
    }
}

impl From<ResolveError> for RunError {
    fn from(e: ResolveError) -> Self {
        RunError::Resolve(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        RunError::Io(e)
    }
}
