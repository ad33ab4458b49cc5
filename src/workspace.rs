use crate::errors::{OpError, OpResult};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Handle on the sandbox root. Constructed once at startup and passed into
/// every tool; holding it is the only way to turn caller input into a path.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Creates the root directory if absent and canonicalizes it. The
    /// canonical form is what every containment check compares against.
    pub fn open(root_dir: &Path) -> anyhow::Result<Self> {
        fs::create_dir_all(root_dir)?;
        let root = dunce::canonicalize(root_dir)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves untrusted caller input to an absolute path confined to the
    /// root, without requiring the target to exist (writes and creates name
    /// paths that do not exist yet). Empty input means the root itself.
    /// Backslashes count as separators so mixed-convention input cannot dodge
    /// the traversal collapse.
    pub fn resolve(&self, rel: &str) -> OpResult<PathBuf> {
        let rel = if rel.is_empty() { "." } else { rel };
        let rel = rel.replace('\\', "/");
        // An absolute second operand replaces the root on join; it still has
        // to survive the containment check below.
        let joined = self.root.join(Path::new(&rel));
        let target = lexical_normalize(&joined);
        if target.starts_with(&self.root) {
            Ok(target)
        } else {
            Err(OpError::PathEscape)
        }
    }

    /// Creates the parent directory chain of a resolved path. The root is its
    /// own designated parent and already exists.
    pub fn ensure_parent(&self, abs: &Path) -> OpResult<()> {
        let parent = abs.parent().unwrap_or(&self.root);
        fs::create_dir_all(parent)?;
        Ok(())
    }
}

/// Collapses `.` and `..` components and redundant separators without touching
/// the filesystem. `..` at the filesystem root stays at the root, matching
/// what canonicalization would do for existing paths.
fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            c => out.push(c.as_os_str()),
        }
    }
    out
}
