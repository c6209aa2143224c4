//! Language filtering and ordering of scanned files

use crate::domain::{FileEntry, LanguageFilter, SortMode};

/// Apply the language filter, then order what is left.
pub fn select_entries(
    entries: Vec<FileEntry>,
    languages: &LanguageFilter,
    sort: SortMode,
) -> Vec<FileEntry> {
    let mut selected: Vec<FileEntry> =
        entries.into_iter().filter(|entry| languages.matches(&entry.relative_path)).collect();
    sort_entries(&mut selected, sort);
    selected
}

/// Stable sort; ties keep scan order. Extensions compare case-insensitively.
pub fn sort_entries(entries: &mut [FileEntry], sort: SortMode) {
    match sort {
        SortMode::Name => entries.sort_by(|a, b| a.file_name().cmp(b.file_name())),
        SortMode::Type => entries.sort_by_cached_key(|e| e.extension.to_ascii_lowercase()),
    }
}
