pub mod entry;
pub mod error;
pub mod fsutils;
pub mod render;
pub mod scan;
pub mod title;

use std::{
    io,
    path::{Path, PathBuf},
};

use entry::Entry;
use error::IndexError;
use fsutils::tmpfile::TmpFile;
use scan::ScanSource;

pub type Result<T> = std::result::Result<T, IndexError>;

pub const DEFAULT_TARGET: &str = "docs";
pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone)]
pub struct Config {
    /// Target directory exactly as the user spelled it.
    pub target: String,
    /// Directory that relative paths are resolved against.
    pub work_dir: PathBuf,
}

impl Config {
    pub fn new(target: impl Into<String>, work_dir: impl Into<PathBuf>) -> Self {
        let target = target.into();
        let target = if target.is_empty() {
            String::from(DEFAULT_TARGET)
        } else {
            target
        };
        Config {
            target,
            work_dir: work_dir.into(),
        }
    }

    pub fn out_dir(&self) -> PathBuf {
        fsutils::normalize(&self.work_dir.join(&self.target))
    }

    pub fn out_file(&self) -> PathBuf {
        self.out_dir().join(INDEX_FILE)
    }

    // literal comparison: "./" or an absolute path to the working directory still fall back
    pub fn uses_fallback_scan(&self) -> bool {
        self.target != "."
    }
}

#[derive(Debug)]
pub struct Report {
    pub out_file: PathBuf,
    pub entries: Vec<Entry>,
    pub source: ScanSource,
}

pub fn generate_index(config: &Config) -> Result<Report> {
    generate_index_at(config, &render::timestamp())
}

/// Same as [`generate_index`] with a fixed footer timestamp.
pub fn generate_index_at(config: &Config, generated_at: &str) -> Result<Report> {
    let scan = scan::scan(config)?;
    if scan.source == ScanSource::WorkingDir {
        log::info!(
            "no .html under {}, listing {} page(s) from working directory {} with links relative to the target",
            config.target,
            scan.files.len(),
            config.work_dir.display()
        );
    }

    let entries: Vec<Entry> = scan
        .files
        .into_iter()
        .map(|file| {
            let resolved = title::resolve_title(config, &file);
            log::debug!("{} => {:?} ({:?})", file, resolved.title, resolved.source);
            Entry::new(file, resolved.title)
        })
        .collect();

    let html = render::render_page(&config.target, &entries, generated_at);
    let out_dir = config.out_dir();
    let out_file = config.out_file();
    write_output(&out_dir, &out_file, &html).map_err(|source| IndexError::WriteOutput {
        path: out_file.clone(),
        source,
    })?;
    log::info!("generated {} ({} page(s))", out_file.display(), entries.len());

    Ok(Report {
        out_file,
        entries,
        source: scan.source,
    })
}

fn write_output(out_dir: &Path, out_file: &Path, html: &str) -> io::Result<()> {
    let tmp = TmpFile::new_in(out_dir, INDEX_FILE)?;
    tmp.write(html)?;
    tmp.persist(out_file)
}
