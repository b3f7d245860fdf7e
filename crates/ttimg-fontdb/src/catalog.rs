// this_file: crates/ttimg-fontdb/src/catalog.rs

//! The installed-fonts catalog
//!
//! Built once per process by walking the platform font folders and reading
//! the `name` table of every file that parses as a font. Files that are not
//! fonts (`fonts.dir`, caches, licences) are skipped without complaint.
//! After construction the catalog is never mutated, so one instance can be
//! shared by any number of resolutions.

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use skrifa::raw::FileRef;
use skrifa::string::StringId;
use skrifa::{FontRef, MetadataProvider};
use walkdir::WalkDir;

/// Overrides the platform font folders (platform path-list syntax)
pub const FONT_DIRS_ENV: &str = "TTIMG_FONT_DIRS";

/// Where a catalogued face lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub path: PathBuf,
    /// Face inside a `.ttc`/`.otc` collection, 0 for single fonts
    pub face_index: u32,
}

/// Lookup from lower-cased font name to font file
#[derive(Debug, Default, Clone)]
pub struct FontCatalog {
    /// Full font names from the `name` table ("arial bold")
    by_name: HashMap<String, CatalogEntry>,
    /// File names as found on disk ("arialbd.ttf")
    by_file: HashMap<String, CatalogEntry>,
}

impl FontCatalog {
    /// A catalog that knows no fonts; only explicit paths will resolve
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scan the folders named by `TTIMG_FONT_DIRS`, or the platform defaults.
    ///
    /// On platforms without known font folders this logs a warning and
    /// returns an empty catalog.
    pub fn system() -> Self {
        if let Some(value) = env::var_os(FONT_DIRS_ENV) {
            let dirs: Vec<PathBuf> = env::split_paths(&value).collect();
            log::debug!("Using font folders from {}: {:?}", FONT_DIRS_ENV, dirs);
            return Self::from_dirs(dirs);
        }

        match system_font_dirs() {
            Some(dirs) => Self::from_dirs(dirs),
            None => {
                log::warn!(
                    "Unsupported operating system ({}). Fonts can only be selected by file path.",
                    env::consts::OS
                );
                Self::empty()
            },
        }
    }

    /// Scan the given folders recursively.
    ///
    /// Files are visited sorted by name within each folder, and folders in the
    /// order given, so when two files carry the same font name the one
    /// visited last wins on every platform.
    pub fn from_dirs<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut catalog = Self::empty();
        for dir in dirs {
            catalog.scan_dir(dir.as_ref());
        }
        log::debug!(
            "Font catalog ready: {} names, {} files",
            catalog.by_name.len(),
            catalog.by_file.len()
        );
        catalog
    }

    fn scan_dir(&mut self, dir: &Path) {
        if !dir.is_dir() {
            log::debug!("Skipping missing font folder {}", dir.display());
            return;
        }

        let walker = WalkDir::new(dir).follow_links(true).sort_by_file_name();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Cannot read inside font folder {}: {}", dir.display(), e);
                    continue;
                },
            };
            if entry.file_type().is_file() {
                self.index_file(entry.path());
            }
        }
    }

    /// Record every face of one file. Returns how many faces were added.
    pub fn index_file(&mut self, path: &Path) -> usize {
        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                log::debug!("Skipping {}: {}", path.display(), e);
                return 0;
            },
        };

        let faces = face_names(&data);
        if faces.is_empty() {
            log::debug!("Skipping {}: not a font", path.display());
            return 0;
        }

        for (face_index, name) in &faces {
            let entry = CatalogEntry {
                path: path.to_path_buf(),
                face_index: *face_index,
            };
            if let Some(name) = name {
                self.by_name.insert(name.to_lowercase(), entry);
            }
        }

        if let Some(file_name) = path.file_name() {
            self.by_file.insert(
                file_name.to_string_lossy().to_lowercase(),
                CatalogEntry {
                    path: path.to_path_buf(),
                    face_index: 0,
                },
            );
        }

        faces.len()
    }

    /// Find a font by full name, then by file name. `name` must already be
    /// lower-cased.
    pub fn lookup(&self, name: &str) -> Option<&CatalogEntry> {
        self.by_name.get(name).or_else(|| self.by_file.get(name))
    }

    /// Catalogued full names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of distinct full names
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty() && self.by_file.is_empty()
    }
}

/// Face indices with their full name (name ID 4), if the data is a font
fn face_names(data: &[u8]) -> Vec<(u32, Option<String>)> {
    let full_name = |font: &FontRef<'_>| {
        font.localized_strings(StringId::FULL_NAME)
            .english_or_first()
            .map(|name| name.chars().collect::<String>())
            .filter(|name| !name.trim().is_empty())
    };

    match FileRef::new(data) {
        Ok(FileRef::Font(font)) => vec![(0, full_name(&font))],
        Ok(FileRef::Collection(collection)) => (0..collection.len())
            .filter_map(|index| {
                collection
                    .get(index)
                    .ok()
                    .map(|font| (index, full_name(&font)))
            })
            .collect(),
        Err(_) => Vec::new(),
    }
}

/// Well-known font folders for the running platform, None if unsupported
pub fn system_font_dirs() -> Option<Vec<PathBuf>> {
    let home = env::var_os("HOME").map(PathBuf::from);

    if cfg!(target_os = "linux") {
        let mut dirs = vec![
            PathBuf::from("/usr/share/fonts"),
            PathBuf::from("/usr/local/share/fonts"),
        ];
        if let Some(home) = home {
            dirs.push(home.join(".local/share/fonts"));
            dirs.push(home.join(".fonts"));
        }
        Some(dirs)
    } else if cfg!(target_os = "windows") {
        let windir = env::var_os("WINDIR").unwrap_or_else(|| OsString::from(r"C:\Windows"));
        let mut dirs = vec![PathBuf::from(windir).join("Fonts")];
        if let Some(local) = env::var_os("LOCALAPPDATA") {
            dirs.push(PathBuf::from(local).join(r"Microsoft\Windows\Fonts"));
        }
        Some(dirs)
    } else if cfg!(target_os = "macos") {
        let mut dirs = vec![
            PathBuf::from("/System/Library/Fonts"),
            PathBuf::from("/Library/Fonts"),
        ];
        if let Some(home) = home {
            dirs.push(home.join("Library/Fonts"));
        }
        Some(dirs)
    } else {
        None
    }
}
