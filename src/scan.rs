use std::{cmp::Ordering, fs, path::Path};

use icu_collator::{Collator, CollatorOptions, Strength};

use crate::error::IndexError;
use crate::fsutils;
use crate::{Config, Result, INDEX_FILE};

/// Where the listed files were found.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ScanSource {
    Target,
    WorkingDir,
}

#[derive(Debug)]
pub struct Scan {
    /// Link paths relative to the output directory, in display order.
    pub files: Vec<String>,
    pub source: ScanSource,
}

pub fn is_candidate(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".html") && lower != INDEX_FILE
}

/// Root-locale collator at base strength: case and accents are ignored,
/// punctuation keeps its collation weight.
pub fn name_collator() -> Result<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Primary);
    Collator::try_new(&Default::default(), options).map_err(IndexError::Collation)
}

pub fn compare_names(collator: &Collator, a: &str, b: &str) -> Ordering {
    collator.compare(a, b).then_with(|| a.cmp(b))
}

/// Candidate page names directly inside `dir`, sorted.
pub fn list_candidates(dir: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = fsutils::list_names(dir)?
        .into_iter()
        .filter(|name| is_candidate(name))
        .collect();
    let collator = name_collator()?;
    names.sort_by(|a, b| compare_names(&collator, a, b));
    Ok(names)
}

/// Creates the output directory and collects the pages to index, falling
/// back to the working directory when the target has none.
pub fn scan(config: &Config) -> Result<Scan> {
    let out_dir = config.out_dir();
    fs::create_dir_all(&out_dir).map_err(|source| IndexError::CreateDir {
        path: out_dir.clone(),
        source,
    })?;

    let files = list_candidates(&out_dir)?;
    if !files.is_empty() || !config.uses_fallback_scan() {
        return Ok(Scan {
            files,
            source: ScanSource::Target,
        });
    }

    let work_dir = fsutils::normalize(&config.work_dir);
    let files: Vec<String> = list_candidates(&work_dir)?
        .into_iter()
        .map(|name| fsutils::relative_link(&out_dir, &work_dir.join(name)))
        .collect();
    let source = if files.is_empty() {
        ScanSource::Target
    } else {
        ScanSource::WorkingDir
    };
    Ok(Scan { files, source })
}
