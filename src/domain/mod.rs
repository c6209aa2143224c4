//! Core domain types and models
//!
//! Defines FileEntry, BundleOptions, Config and the fixed selection rules.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::BundleError;

/// Extensions considered source code. Everything else is ignored by the scanner.
pub const CODE_EXTENSIONS: [&str; 7] = [".cs", ".java", ".cpp", ".py", ".js", ".html", ".css"];

/// Folder names whose presence anywhere in a file's relative directory excludes it.
pub const EXCLUDED_FOLDERS: [&str; 4] = ["bin", "obj", "debug", "release"];

/// Language filter value that selects every code file.
pub const ALL_LANGUAGES: &str = "all";

/// Order in which selected files are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum SortMode {
    /// By file name
    #[default]
    Name,
    /// By extension, grouping files of the same language
    Type,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
        }
    }
}

/// Only `type` selects extension ordering; any other value sorts by name.
impl From<&str> for SortMode {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("type") {
            Self::Type
        } else {
            Self::Name
        }
    }
}

impl From<String> for SortMode {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

/// A file selected by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute path to the file
    pub path: PathBuf,

    /// Path relative to the bundle root, `/`-separated
    pub relative_path: String,

    /// File extension (with leading dot, case preserved)
    pub extension: String,
}

impl FileEntry {
    pub fn new(path: PathBuf, relative_path: String, extension: String) -> Self {
        Self { path, relative_path, extension }
    }

    pub fn file_name(&self) -> &str {
        self.path.file_name().and_then(|n| n.to_str()).unwrap_or(&self.relative_path)
    }
}

/// Which languages end up in the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageFilter {
    All,
    /// Lowercased extensions without the leading dot
    Only(Vec<String>),
}

impl LanguageFilter {
    /// Build a filter from the requested language list.
    ///
    /// Entries are trimmed, a leading dot is dropped and empty entries are
    /// ignored. The `all` sentinel anywhere in the list selects everything.
    pub fn from_requested<I, S>(requested: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut languages = Vec::new();
        for lang in requested {
            let trimmed = lang.as_ref().trim();
            if trimmed.eq_ignore_ascii_case(ALL_LANGUAGES) {
                return Self::All;
            }
            let normalized = trimmed.trim_start_matches('.').to_lowercase();
            if !normalized.is_empty() && !languages.contains(&normalized) {
                languages.push(normalized);
            }
        }
        Self::Only(languages)
    }

    /// Parse a comma-separated language list such as `py,js` or `all`.
    pub fn parse(csv: &str) -> Self {
        Self::from_requested(csv.split(','))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Only(langs) if langs.is_empty())
    }

    /// Case-insensitive suffix match of `.<lang>` against the path.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(langs) => {
                let lower = path.to_lowercase();
                langs.iter().any(|lang| lower.ends_with(&format!(".{lang}")))
            }
        }
    }
}

/// Fully resolved options for one bundle run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleOptions {
    pub output: PathBuf,
    pub languages: LanguageFilter,
    pub note: bool,
    pub sort: SortMode,
    pub remove_empty_lines: bool,
    pub author: String,
}

impl BundleOptions {
    pub fn new(output: impl Into<PathBuf>, languages: LanguageFilter) -> Self {
        Self {
            output: output.into(),
            languages,
            note: false,
            sort: SortMode::Name,
            remove_empty_lines: false,
            author: String::new(),
        }
    }
}

impl TryFrom<Config> for BundleOptions {
    type Error = BundleError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        let output = config
            .output
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(BundleError::MissingOption("--output"))?;
        let languages = config
            .languages
            .map(LanguageFilter::from_requested)
            .filter(|filter| !filter.is_empty())
            .ok_or(BundleError::MissingOption("--languages"))?;

        Ok(Self {
            output,
            languages,
            note: config.note,
            sort: config.sort,
            remove_empty_lines: config.remove_empty_lines,
            author: config.author.unwrap_or_default().trim().to_string(),
        })
    }
}

/// Counters collected while scanning
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Regular files seen under the root
    pub files_scanned: usize,

    /// Files passing the extension and folder rules
    pub files_included: usize,

    /// Files whose extension is not a code extension
    pub files_skipped_extension: usize,

    /// Files under an excluded folder
    pub files_skipped_folder: usize,
}

/// Outcome of a successful bundle run
#[derive(Debug, Clone)]
pub struct BundleReport {
    /// Absolute path of the written bundle
    pub output: PathBuf,

    /// Files written into the bundle, in order
    pub files: Vec<FileEntry>,

    pub stats: ScanStats,
}

/// Options as read from config files and the environment.
///
/// Every field is optional here; [`BundleOptions::try_from`] enforces the
/// required ones after CLI overrides are merged in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default, alias = "language", deserialize_with = "deserialize_languages")]
    pub languages: Option<Vec<String>>,

    #[serde(default)]
    pub note: bool,

    #[serde(default)]
    pub sort: SortMode,

    #[serde(default, alias = "remove-empty-lines")]
    pub remove_empty_lines: bool,

    #[serde(default)]
    pub author: Option<String>,
}

/// Accepts a comma-separated string or an array of languages.
fn deserialize_languages<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct LanguagesVisitor;

    impl<'de> Visitor<'de> for LanguagesVisitor {
        type Value = Option<Vec<String>>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a comma-separated string or an array of languages")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value.split(',').map(|s| s.trim().to_string()).collect()))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: de::SeqAccess<'de>,
        {
            let mut result = Vec::new();
            while let Some(lang) = seq.next_element::<String>()? {
                result.push(lang.trim().to_string());
            }
            Ok(Some(result))
        }
    }

    deserializer.deserialize_any(LanguagesVisitor)
}

/// True when `extension` (with leading dot) is one of [`CODE_EXTENSIONS`].
pub fn is_code_extension(extension: &str) -> bool {
    CODE_EXTENSIONS.iter().any(|ext| ext.eq_ignore_ascii_case(extension))
}

/// True when the directory part of `relative_path` contains an excluded folder name.
///
/// This is a substring match, so `robin/` is excluded just like `bin/`.
pub fn is_excluded_folder(relative_path: &Path) -> bool {
    let Some(dir) = relative_path.parent() else {
        return false;
    };
    let dir = dir.to_string_lossy().to_lowercase();
    EXCLUDED_FOLDERS.iter().any(|folder| dir.contains(folder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_mode_defaults_to_name_for_unknown_values() {
        assert_eq!(SortMode::from("type"), SortMode::Type);
        assert_eq!(SortMode::from(" TYPE "), SortMode::Type);
        assert_eq!(SortMode::from("name"), SortMode::Name);
        assert_eq!(SortMode::from("size"), SortMode::Name);
        assert_eq!(SortMode::from(""), SortMode::Name);
    }

    #[test]
    fn language_filter_normalizes_entries() {
        let filter = LanguageFilter::parse(" py, .JS ,,py");
        assert_eq!(filter, LanguageFilter::Only(vec!["py".to_string(), "js".to_string()]));
        assert_eq!(LanguageFilter::parse("cs,All"), LanguageFilter::All);
        assert!(LanguageFilter::parse(" , ").is_empty());
    }

    #[test]
    fn language_filter_matches_extension_suffix_case_insensitively() {
        let filter = LanguageFilter::parse("py,cpp");
        assert!(filter.matches("src/main.py"));
        assert!(filter.matches("src/MAIN.PY"));
        assert!(filter.matches("engine/core.cpp"));
        assert!(!filter.matches("web/app.js"));
        assert!(!filter.matches("src/happy"));
        assert!(!filter.matches("py"));
        assert!(LanguageFilter::All.matches("anything.css"));
    }

    #[test]
    fn code_extensions_are_case_insensitive() {
        assert!(is_code_extension(".cs"));
        assert!(is_code_extension(".HTML"));
        assert!(!is_code_extension(".rs"));
        assert!(!is_code_extension(""));
    }

    #[test]
    fn excluded_folder_uses_directory_substring() {
        assert!(is_excluded_folder(Path::new("bin/c.py")));
        assert!(is_excluded_folder(Path::new("src/Debug/x.cs")));
        assert!(is_excluded_folder(Path::new("robin/hood.py")));
        assert!(!is_excluded_folder(Path::new("binary.py")));
        assert!(!is_excluded_folder(Path::new("src/objects.js")));
    }

    #[test]
    fn options_require_output_and_languages() {
        let missing_output = Config { languages: Some(vec!["all".into()]), ..Config::default() };
        let err = BundleOptions::try_from(missing_output).expect_err("output is required");
        assert!(err.to_string().contains("--output"));

        let missing_langs = Config {
            output: Some(PathBuf::from("out.txt")),
            languages: Some(vec![" ".into()]),
            ..Config::default()
        };
        let err = BundleOptions::try_from(missing_langs).expect_err("languages are required");
        assert!(err.to_string().contains("--languages"));

        let complete = Config {
            output: Some(PathBuf::from("out.txt")),
            languages: Some(vec!["py".into()]),
            sort: SortMode::Type,
            author: Some("  Ada  ".into()),
            ..Config::default()
        };
        let options = BundleOptions::try_from(complete).expect("valid options");
        assert_eq!(options.languages, LanguageFilter::Only(vec!["py".into()]));
        assert_eq!(options.sort, SortMode::Type);
        assert_eq!(options.author, "Ada");
    }
}
