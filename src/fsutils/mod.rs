pub mod tmpfile;

use std::path::{Component, Path, PathBuf};

use ignore;

use crate::error::IndexError;
use crate::Result;

/// Names of every entry directly inside `dir`, in no particular order.
pub fn list_names(dir: &Path) -> Result<Vec<String>> {
    ignore::WalkBuilder::new(dir)
        .standard_filters(false)
        .max_depth(Some(1))
        .build()
        .filter_map(|result| match result {
            Ok(dir_entry) if dir_entry.depth() == 0 => None,
            Ok(dir_entry) => Some(Ok(dir_entry.file_name().to_string_lossy().into_owned())),
            Err(source) => Some(Err(IndexError::ListDir {
                path: dir.to_path_buf(),
                source,
            })),
        })
        .collect()
}

/// Collapses `.` and `..` segments without touching the filesystem.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Relative `/`-separated link from `from_dir` to `to_file`.
///
/// Both paths are expected to be absolute and normalized. When they share no
/// root (different drives on Windows) the target is returned unchanged.
pub fn relative_link(from_dir: &Path, to_file: &Path) -> String {
    let from: Vec<Component> = from_dir.components().collect();
    let to: Vec<Component> = to_file.components().collect();
    if from.first() != to.first() {
        return to_file.to_string_lossy().into_owned();
    }
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let ups = std::iter::repeat(String::from("..")).take(from.len() - common);
    let downs = to[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned());
    ups.chain(downs).collect::<Vec<String>>().join("/")
}
