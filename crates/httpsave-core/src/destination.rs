//! Turns a loose destination argument into the concrete file path to write.

use crate::url_model::base_name;
use std::path::{Component, Path, PathBuf};

/// Resolves `destination` against `source` into the file path a download writes to.
///
/// - Empty or whitespace-only destination: the source's base name in the current directory.
/// - Destination that already exists as a directory: the source's base name inside it.
/// - Anything else: the trimmed destination, taken verbatim as the target file.
///
/// The directory check is done on the destination as given, not the trimmed
/// value. Joined paths are cleaned lexically, so `./` + `a.zip` is `a.zip`.
pub fn resolve_destination(destination: &str, source: &str) -> PathBuf {
    let trimmed = destination.trim();
    if trimmed.is_empty() || Path::new(destination).is_dir() {
        let resolved = join_clean(trimmed, base_name(source));
        tracing::debug!(
            "destination {:?} resolved to {} (name from source)",
            destination,
            resolved.display()
        );
        return resolved;
    }
    PathBuf::from(trimmed)
}

/// Joins `dir` and `name`, dropping `.` components and folding `..` where possible.
fn join_clean(dir: &str, name: &str) -> PathBuf {
    let joined = Path::new(dir).join(name);
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.into_iter().collect()
}
