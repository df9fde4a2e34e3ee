//! The `search` command: load the dataset once, apply a query, render.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use fffinder_core::{
    AppConfig, Directory, FacilityRecord, FacilityStatus, LoadState, Query, SearchField,
};
use fffinder_loader::{parse_dataset, FacilityLoader};

use crate::render;

#[derive(Debug, Clone, Default, Args)]
pub(crate) struct SearchArgs {
    /// Text to look for; matched case-insensitively and used untrimmed
    #[arg(long, default_value = "")]
    pub(crate) term: String,
    /// Field to search: all, name, or address (anything else searches all)
    #[arg(long, default_value = "all")]
    pub(crate) field: String,
    /// Only show facilities with this permit status (e.g., APPROVED)
    #[arg(long)]
    pub(crate) status: Option<FacilityStatus>,
    /// Print matching records as JSON instead of cards
    #[arg(long)]
    pub(crate) json: bool,
    /// Read the dataset from a local CSV file instead of the configured URL
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
}

impl SearchArgs {
    pub(crate) fn query(&self) -> Query {
        Query {
            search_term: self.term.clone(),
            search_field: SearchField::from_param(&self.field),
            status_filter: self.status,
        }
    }
}

/// Loads the dataset, applies the query from `args`, and prints the result.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or output cannot be
/// written.
pub(crate) async fn run_search(config: &AppConfig, args: &SearchArgs) -> anyhow::Result<()> {
    let mut directory = Directory::new();
    directory.set_query(args.query());
    render::render_view(&mut std::io::stderr().lock(), &directory.view(), false)?;

    let outcome = load_records(config, args.file.as_deref()).await;
    let load_error = outcome.as_ref().err().map(|e| format!("{e:#}"));
    directory.apply_load(outcome);

    let view = directory.view();
    if matches!(view.state, LoadState::Failed(_)) {
        render::render_view(&mut std::io::stderr().lock(), &view, args.json)?;
        anyhow::bail!(load_error.unwrap_or_else(|| "failed to load facilities".to_owned()));
    }

    render::render_view(&mut std::io::stdout().lock(), &view, args.json)
}

/// Reads records from `file` when given, otherwise from the configured URL.
pub(crate) async fn load_records(
    config: &AppConfig,
    file: Option<&Path>,
) -> anyhow::Result<Vec<FacilityRecord>> {
    if let Some(path) = file {
        let text = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read dataset file {}", path.display()))?;
        let records = parse_dataset(&text).inspect_err(|error| {
            tracing::error!(path = %path.display(), %error, "error parsing dataset file");
        })?;
        tracing::info!(path = %path.display(), records = records.len(), "loaded facility dataset");
        return Ok(records);
    }

    let loader = FacilityLoader::new(config)?;
    Ok(loader.load().await?)
}
