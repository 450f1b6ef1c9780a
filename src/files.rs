//! File selection holder
//!
//! Three independent attachment lists. Picking files for a category replaces
//! that category's previous selection entirely.

use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff", "svg"];
const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "avi", "mov", "wmv", "flv", "webm", "mkv", "m4v", "3gp", "ogv",
];

/// Attachment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileCategory {
    Images,
    Videos,
    Documents,
}

impl FileCategory {
    pub const ALL: [FileCategory; 3] = [
        FileCategory::Images,
        FileCategory::Videos,
        FileCategory::Documents,
    ];

    /// Multipart part name for files of this category
    pub fn field_name(&self) -> &'static str {
        match self {
            FileCategory::Images => "images",
            FileCategory::Videos => "videos",
            FileCategory::Documents => "documents",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FileCategory::Images => "Images (JPG, PNG, GIF, WEBP)",
            FileCategory::Videos => "Videos (MP4, AVI, MOV, WEBM)",
            FileCategory::Documents => "Documents (PDF, DOC, DOCX, JPG, PNG)",
        }
    }

    /// Singular noun used in the "Selected: N ..." hint
    pub fn noun(&self) -> &'static str {
        match self {
            FileCategory::Images => "image",
            FileCategory::Videos => "video",
            FileCategory::Documents => "document",
        }
    }

    /// Non-enforcing accept hint, in file-input `accept` syntax
    pub fn accept(&self) -> AcceptFilter {
        match self {
            FileCategory::Images => AcceptFilter::parse("image/*"),
            FileCategory::Videos => AcceptFilter::parse("video/*"),
            FileCategory::Documents => AcceptFilter::parse(".pdf,.doc,.docx,.jpg,.jpeg,.png"),
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Opaque handle to a file chosen by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Final path component, or the whole path when there is none
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    /// Lowercased extension without the dot
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

impl From<PathBuf> for FileHandle {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

/// One entry of an accept hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptToken {
    /// `image/*`, `video/*`, ...
    MimeWildcard(String),
    /// `.pdf`, stored lowercased without the dot
    Extension(String),
}

/// Parsed accept hint. Used to suggest files, never to reject a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptFilter {
    raw: String,
    tokens: Vec<AcceptToken>,
}

impl AcceptFilter {
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .filter_map(|token| {
                if let Some(ext) = token.strip_prefix('.') {
                    Some(AcceptToken::Extension(ext.to_lowercase()))
                } else if let Some(top) = token.strip_suffix("/*") {
                    Some(AcceptToken::MimeWildcard(top.to_lowercase()))
                } else {
                    None
                }
            })
            .collect();

        Self {
            raw: raw.to_string(),
            tokens,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[AcceptToken] {
        &self.tokens
    }

    /// Whether the file looks like something this hint suggests
    pub fn matches(&self, file: &FileHandle) -> bool {
        let Some(ext) = file.extension() else {
            return false;
        };

        self.tokens.iter().any(|token| match token {
            AcceptToken::Extension(accepted) => *accepted == ext,
            AcceptToken::MimeWildcard(top) => match top.as_str() {
                "image" => IMAGE_EXTENSIONS.contains(&ext.as_str()),
                "video" => VIDEO_EXTENSIONS.contains(&ext.as_str()),
                _ => false,
            },
        })
    }
}

/// The three attachment lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelections {
    lists: [Vec<FileHandle>; 3],
}

impl FileSelections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole selection for `category`, keeping the given order
    pub fn set_files(&mut self, category: FileCategory, files: Vec<FileHandle>) {
        self.lists[category.index()] = files;
    }

    pub fn files(&self, category: FileCategory) -> &[FileHandle] {
        &self.lists[category.index()]
    }

    pub fn count(&self, category: FileCategory) -> usize {
        self.lists[category.index()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }

    /// Every selected file with its category, images then videos then documents
    pub fn iter(&self) -> impl Iterator<Item = (FileCategory, &FileHandle)> {
        FileCategory::ALL.iter().flat_map(move |category| {
            self.lists[category.index()]
                .iter()
                .map(move |file| (*category, file))
        })
    }
}
