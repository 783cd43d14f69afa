use std::{fs, io, path::Path, path::PathBuf};

use rand::{distributions::Alphanumeric, Rng};

/// Scratch file living next to its final destination, so that `persist`
/// is a same-filesystem rename.
pub struct TmpFile {
    path: Option<PathBuf>,
}

impl TmpFile {
    pub fn new_in(dir: &Path, stem: &str) -> io::Result<TmpFile> {
        let path = dir.join(format!(".{stem}.{}.tmp", get_tmp_file_name()));
        let _ = fs::File::create(&path)?;
        Ok(TmpFile { path: Some(path) })
    }

    pub fn path(&self) -> &Path {
        self.path.as_deref().unwrap_or(Path::new(""))
    }

    pub fn write(&self, contents: &str) -> io::Result<()> {
        fs::write(self.path(), contents)
    }

    /// Moves the file over `dest`, replacing whatever was there.
    pub fn persist(mut self, dest: &Path) -> io::Result<()> {
        if let Some(path) = self.path.take() {
            if let Err(err) = fs::rename(&path, dest) {
                let _ = fs::remove_file(&path);
                return Err(err);
            }
        }
        Ok(())
    }
}

impl Drop for TmpFile {
    fn drop(&mut self) {
        if let Some(path) = self.path.take() {
            let _ = fs::remove_file(path);
        }
    }
}

pub fn get_tmp_file_name() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}
