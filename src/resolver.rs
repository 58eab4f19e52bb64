use std::path::{Component, Path, PathBuf};

use crate::error::{ResolveError, ResolveResult};

#[derive(Debug, Clone)]
pub struct PathResolver {
    base: PathBuf,
}

impl PathResolver {
    pub fn from_current_dir() -> Result<Self, ResolveError> {
        let base = nix::unistd::getcwd()?;
        Ok(PathResolver { base })
    }

    // Base must be absolute; used by tests and embedding callers.
    pub fn with_base<P: Into<PathBuf>>(base: P) -> Self {
        PathResolver { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn resolve(&self, token: &str) -> ResolveResult {
        if token.bytes().any(|b| b == 0) {
            return Err(ResolveError::InvalidPath(token.to_string()));
        }

        let path = Path::new(token);
        if path.is_absolute() {
            Ok(normalize(path))
        } else {
            Ok(normalize(&self.base.join(path)))
        }
    }
}

// Lexical normalization: empty and `.` segments drop out, `name/..` pairs
// collapse, `..` at the root stays at the root. The filesystem is never
// consulted, so symlinks are not followed.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(Component::RootDir),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(name) => out.push(name),
        }
    }
    out
}
