//! CLI argument merging with config

use crate::domain::{Config, SortMode};
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub languages: Option<Vec<String>>,
    pub note: Option<bool>,
    pub sort: Option<SortMode>,
    pub remove_empty_lines: Option<bool>,
    pub author: Option<String>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(output) = cli.output {
        base_config.output = Some(output);
    }
    if let Some(languages) = cli.languages {
        base_config.languages = Some(languages);
    }
    if let Some(note) = cli.note {
        base_config.note = note;
    }
    if let Some(sort) = cli.sort {
        base_config.sort = sort;
    }
    if let Some(remove_empty_lines) = cli.remove_empty_lines {
        base_config.remove_empty_lines = remove_empty_lines;
    }
    if let Some(author) = cli.author {
        base_config.author = Some(author);
    }

    base_config
}

#[cfg(test)]
mod tests {
    use super::{merge_cli_with_config, CliOverrides};
    use crate::domain::{Config, SortMode};
    use std::path::PathBuf;

    #[test]
    fn cli_overrides_replace_base_values() {
        let base = Config {
            output: Some(PathBuf::from("from-config.txt")),
            languages: Some(vec!["py".to_string()]),
            note: true,
            sort: SortMode::Type,
            author: Some("Config".to_string()),
            ..Config::default()
        };

        let cli = CliOverrides {
            output: Some(PathBuf::from("from-cli.txt")),
            note: Some(false),
            remove_empty_lines: Some(true),
            ..CliOverrides::default()
        };

        let merged = merge_cli_with_config(base, cli);
        assert_eq!(merged.output, Some(PathBuf::from("from-cli.txt")));
        assert_eq!(merged.languages, Some(vec!["py".to_string()]));
        assert!(!merged.note);
        assert_eq!(merged.sort, SortMode::Type);
        assert!(merged.remove_empty_lines);
        assert_eq!(merged.author.as_deref(), Some("Config"));
    }
}
