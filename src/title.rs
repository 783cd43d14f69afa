use std::{fmt, fs, io, path::Path};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Config;

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title pattern is valid"));

/// Why a lookup produced no title.
#[derive(Debug)]
pub enum Absent {
    Unreadable(io::Error),
    NoTitleElement,
    EmptyTitle,
}

impl fmt::Display for Absent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Absent::Unreadable(err) => write!(f, "unreadable: {}", err),
            Absent::NoTitleElement => write!(f, "no <title> element"),
            Absent::EmptyTitle => write!(f, "empty <title> element"),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TitleSource {
    TargetDir,
    WorkingDir,
    FileName,
}

#[derive(Debug, Eq, PartialEq)]
pub struct Resolved {
    pub title: String,
    pub source: TitleSource,
}

pub fn extract_title(content: &str) -> Result<String, Absent> {
    let captures = TITLE_RE.captures(content).ok_or(Absent::NoTitleElement)?;
    let title = captures.get(1).map_or("", |m| m.as_str()).trim();
    if title.is_empty() {
        Err(Absent::EmptyTitle)
    } else {
        Ok(title.to_string())
    }
}

pub fn read_title(path: &Path) -> Result<String, Absent> {
    let content = fs::read_to_string(path).map_err(Absent::Unreadable)?;
    extract_title(&content)
}

/// `my-first_page.v2.html` becomes `my first page v2`.
pub fn label_from_filename(file: &str) -> String {
    let name = Path::new(file)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string());
    let stem = match name.len().checked_sub(".html".len()) {
        Some(cut) if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(".html") => {
            &name[..cut]
        }
        _ => &name[..],
    };
    stem.replace(['-', '_', '.'], " ")
}

/// Title for `file`: the page's own `<title>` under the output directory,
/// then under the working directory, then a label made from the name.
pub fn resolve_title(config: &Config, file: &str) -> Resolved {
    let attempts = [
        (config.out_dir().join(file), TitleSource::TargetDir),
        (config.work_dir.join(file), TitleSource::WorkingDir),
    ];
    for (path, source) in attempts {
        match read_title(&path) {
            Ok(title) => return Resolved { title, source },
            Err(reason) => log::debug!("no title from {}: {}", path.display(), reason),
        }
    }
    Resolved {
        title: label_from_filename(file),
        source: TitleSource::FileName,
    }
}
