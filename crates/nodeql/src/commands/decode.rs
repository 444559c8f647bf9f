use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::type_name_parser;
use crate::output_utils;
use crate::schemas;
use crate::schemas::SchemaEntry;
use anyhow::Context;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct DecodeCmd {
    #[arg(
        help="The bundled GraphQL object type the responses were fetched as.",
        long="type",
        value_parser=type_name_parser(),
    )]
    type_name: String,

    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    response_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more saved response documents or directories \
             containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What a scan of the input paths turned up.
#[derive(Debug, Default)]
struct ResponseFiles {
    file_paths: Vec<PathBuf>,
    num_skipped: usize,
    /// Input paths (or entries below them) that could not be walked.
    unreadable: Vec<walkdir::Error>,
}

impl DecodeCmd {
    /// Every response file at or under the input paths.
    fn find_response_files(&self) -> ResponseFiles {
        let response_file_exts: HashSet<&str> =
            self.response_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut found = ResponseFiles::default();
        for root in &self.file_or_dir_paths {
            let walker = WalkDir::new(root.as_path()).follow_links(true).sort_by_file_name();
            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!("Failed to walk entities at/under {root:#?}.");
                        found.unreadable.push(e);
                        continue
                    },
                };

                let path = entry.path();
                let has_response_ext =
                    path.extension()
                        .and_then(|ext| ext.to_str())
                        .is_some_and(|ext| response_file_exts.contains(ext));
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {path:#?}.");
                } else if has_response_ext {
                    log::trace!("Found response file at {path:#?}.");
                    found.file_paths.push(path.to_path_buf());
                } else {
                    log::trace!("Skipping file with a non-response extension: {path:#?}.");
                    found.num_skipped += 1;
                }
            }
        }

        // A lone file argument is decoded even when its extension doesn't
        // match `--response-file-exts`.
        if found.file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            log::warn!(
                "Proceeding to decode {only_path:#?} even though it doesn't \
                match any of the --response-file-exts ({}).",
                self.response_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            found.file_paths.push(only_path.clone());
            found.num_skipped = found.num_skipped.saturating_sub(1);
        }

        found
    }
}

fn decode_file(entry: &SchemaEntry, path: &Path) -> anyhow::Result<Value> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    entry.decode_str(&body)
        .with_context(|| format!("Failed to decode {}", path.display()))
}

fn format_errors<E: std::fmt::Display>(errors: &[E]) -> String {
    errors.iter()
        .map(|e| format!("  * {e:#}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[inherent::inherent]
impl RunnableCommand for DecodeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let entry = match schemas::lookup(&self.type_name) {
            Ok(entry) => entry,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e}",
                output_utils::RED_X,
            )),
        };

        let ResponseFiles {
            file_paths,
            num_skipped,
            unreadable,
        } = self.find_response_files();
        log::debug!(
            "Found {} response files to decode as `{}`.",
            file_paths.len(),
            self.type_name,
        );

        let mut decoded = IndexMap::new();
        let mut failures = vec![];
        for path in &file_paths {
            match decode_file(entry, path) {
                Ok(value) => {
                    decoded.insert(path.display().to_string(), value);
                },
                Err(e) => failures.push(e),
            }
        }

        let mut problems = vec![];
        if !unreadable.is_empty() {
            problems.push(format!(
                "{} Could not read {} input paths:\n{}",
                output_utils::RED_X,
                unreadable.len(),
                format_errors(&unreadable),
            ));
        }
        if !failures.is_empty() {
            problems.push(format!(
                "{} {} of {} response files failed:\n{}",
                output_utils::RED_X,
                failures.len(),
                file_paths.len(),
                format_errors(&failures),
            ));
        }
        if !problems.is_empty() {
            return CommandResult::stderr(format_args!("{}", problems.join("\n")));
        }

        if decoded.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No response files found under the given paths.",
                output_utils::RED_X,
            ));
        }

        log::info!(
            "{} Decoded {} response files as `{}` ({num_skipped} other files skipped).",
            output_utils::GREEN_CHECK,
            decoded.len(),
            self.type_name,
        );

        // A single response prints as-is; several are keyed by their path.
        let output = if decoded.len() == 1 {
            decoded.swap_remove_index(0).map(|(_, value)| value).unwrap_or_default()
        } else {
            Value::Object(decoded.into_iter().collect())
        };
        match serde_json::to_string_pretty(&output) {
            Ok(pretty) => CommandResult::stdout(format_args!("{pretty}")),
            Err(e) => CommandResult::stderr(format_args!(
                "{} Failed to print the decoded values: {e}",
                output_utils::RED_X,
            )),
        }
    }
}
