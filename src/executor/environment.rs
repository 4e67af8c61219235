// file: src/executor/environment.rs
// version: 1.0.0
// guid: 96973139-5dd1-4cad-8f2a-ce2d456f0cb9

//! Child-process search path resolution
//!
//! Launchers and GUI hosts often start without a login shell, so their `PATH`
//! misses the directories where installers drop `sui` and `walrus`. The
//! child's `PATH` is rebuilt on every invocation as: configured extra
//! directories, then the well-known installation directories, then the
//! inherited entries. Duplicates keep their first position.

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Installation directories relative to the user's home
const HOME_RELATIVE_DIRS: [&str; 2] = [".local/bin", ".cargo/bin"];

/// Absolute installation directories (system prefix, Homebrew on Apple Silicon)
const ABSOLUTE_DIRS: [&str; 2] = ["/usr/local/bin", "/opt/homebrew/bin"];

/// Ordered, de-duplicated list of directories searched for executables
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    /// Build the search path from explicit inputs. Pure: no environment reads.
    pub fn resolve(home: Option<&Path>, extra: &[PathBuf], inherited: Option<&OsStr>) -> Self {
        let mut path = Self::default();

        for dir in extra {
            path.push(dir.clone());
        }
        for dir in well_known_dirs(home) {
            path.push(dir);
        }
        if let Some(inherited) = inherited {
            for dir in std::env::split_paths(inherited) {
                path.push(dir);
            }
        }

        path
    }

    /// Build the search path from the current process environment
    pub fn from_process_env(extra: &[PathBuf]) -> Self {
        let home = dirs::home_dir();
        let inherited = std::env::var_os("PATH");
        Self::resolve(home.as_deref(), extra, inherited.as_deref())
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Join into a value suitable for the child's `PATH` variable
    pub fn joined(&self) -> io::Result<OsString> {
        std::env::join_paths(&self.dirs)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
    }

    fn push(&mut self, dir: PathBuf) {
        if dir.as_os_str().is_empty() || self.dirs.contains(&dir) {
            return;
        }
        // An entry holding the separator cannot be represented in PATH
        if std::env::join_paths([&dir]).is_err() {
            warn!("Skipping search path entry that contains a path separator: {}", dir.display());
            return;
        }
        self.dirs.push(dir);
    }
}

/// The fixed list of well-known installation directories
pub fn well_known_dirs(home: Option<&Path>) -> Vec<PathBuf> {
    let mut dirs = Vec::with_capacity(HOME_RELATIVE_DIRS.len() + ABSOLUTE_DIRS.len());
    if let Some(home) = home {
        dirs.extend(HOME_RELATIVE_DIRS.iter().map(|rel| home.join(rel)));
    }
    dirs.extend(ABSOLUTE_DIRS.iter().map(PathBuf::from));
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_dirs_with_home() {
        let dirs = well_known_dirs(Some(Path::new("/home/alice")));
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/home/alice/.local/bin"),
                PathBuf::from("/home/alice/.cargo/bin"),
                PathBuf::from("/usr/local/bin"),
                PathBuf::from("/opt/homebrew/bin"),
            ]
        );
    }

    #[test]
    fn test_well_known_dirs_without_home() {
        let dirs = well_known_dirs(None);
        assert_eq!(dirs, vec![PathBuf::from("/usr/local/bin"), PathBuf::from("/opt/homebrew/bin")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_orders_extra_then_well_known_then_inherited() {
        let extra = vec![PathBuf::from("/opt/sui/bin")];
        let path = SearchPath::resolve(
            Some(Path::new("/home/alice")),
            &extra,
            Some(OsStr::new("/usr/bin:/bin")),
        );

        assert_eq!(
            path.dirs(),
            &[
                PathBuf::from("/opt/sui/bin"),
                PathBuf::from("/home/alice/.local/bin"),
                PathBuf::from("/home/alice/.cargo/bin"),
                PathBuf::from("/usr/local/bin"),
                PathBuf::from("/opt/homebrew/bin"),
                PathBuf::from("/usr/bin"),
                PathBuf::from("/bin"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_deduplicates_and_skips_empty() {
        let path = SearchPath::resolve(None, &[], Some(OsStr::new("/usr/local/bin::/usr/bin:/usr/bin")));
        assert_eq!(
            path.dirs(),
            &[
                PathBuf::from("/usr/local/bin"),
                PathBuf::from("/opt/homebrew/bin"),
                PathBuf::from("/usr/bin"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_skips_entries_with_separator() {
        let extra = vec![PathBuf::from("/weird:dir")];
        let path = SearchPath::resolve(None, &extra, None);
        assert!(!path.dirs().contains(&PathBuf::from("/weird:dir")));
        assert!(path.joined().is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_joined() {
        let path = SearchPath::resolve(None, &[], Some(OsStr::new("/usr/bin")));
        assert_eq!(
            path.joined().unwrap(),
            OsString::from("/usr/local/bin:/opt/homebrew/bin:/usr/bin")
        );
    }
}
