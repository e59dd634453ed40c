//! The `search` command: resolve inputs, remember them, run discovery, print.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Args, ValueEnum};
use nosite_core::{AppConfig, Category, SearchQuery, SearchResults, DEFAULT_RADIUS_KM};
use nosite_places::{run_search, PlacesClient, SearchOptions, SearchOrigin};

use crate::export::to_csv;
use crate::render::{render_cards, render_table};
use crate::saved::{self, SavedSearch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Layout {
    Table,
    Cards,
    Csv,
}

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Address, city or landmark to search around (defaults to the last search)
    pub location: Option<String>,
    /// Maximum distance from the location, in kilometers
    #[arg(long, short = 'r')]
    pub radius_km: Option<f64>,
    /// Category to probe; repeat or comma-separate (defaults to the last search, then all)
    #[arg(long = "category", short = 'c', value_delimiter = ',')]
    pub categories: Vec<Category>,
    /// How to print the results
    #[arg(long, value_enum, default_value = "table")]
    pub layout: Layout,
    /// Write the rendered results to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
    /// Do not remember these inputs for the next run
    #[arg(long)]
    pub no_save: bool,
}

/// Fully resolved inputs for one run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchInputs {
    pub location: String,
    pub radius_km: f64,
    pub categories: Vec<Category>,
}

impl SearchInputs {
    pub(crate) fn radius_m(&self) -> f64 {
        self.radius_km * 1000.0
    }
}

/// Merge command-line values over the saved search, then defaults.
///
/// # Errors
///
/// Returns an error when no location is available or the radius is invalid.
pub(crate) fn resolve_inputs(
    args: &SearchArgs,
    saved: Option<&SavedSearch>,
) -> anyhow::Result<SearchInputs> {
    let location = args
        .location
        .clone()
        .or_else(|| saved.map(|s| s.location.clone()))
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!("no location given and no saved search; pass a LOCATION")
        })?;

    let radius_km = args
        .radius_km
        .or_else(|| saved.map(|s| s.radius_km))
        .unwrap_or(DEFAULT_RADIUS_KM);

    let categories = match saved {
        _ if !args.categories.is_empty() => args.categories.clone(),
        Some(saved) if !saved.categories.is_empty() => saved.categories.clone(),
        _ => Category::ALL.to_vec(),
    };

    let inputs = SearchInputs {
        location: location.trim().to_string(),
        radius_km,
        categories,
    };
    SearchQuery::validate_radius(inputs.radius_m())
        .map_err(|_| anyhow::anyhow!("radius must be a positive number of km, got {radius_km}"))?;
    Ok(inputs)
}

/// Render results in the chosen layout. `None` means there is nothing to write.
pub(crate) fn render(results: &SearchResults, layout: Layout) -> Option<String> {
    match layout {
        Layout::Table => Some(render_table(results)),
        Layout::Cards => Some(render_cards(results)),
        Layout::Csv if results.is_empty() => None,
        Layout::Csv => Some(to_csv(&results.businesses)),
    }
}

/// Run the `search` command end to end.
///
/// # Errors
///
/// Returns an error for missing inputs, a missing API key, an unresolvable
/// location, or an output file that cannot be written.
pub(crate) async fn run_search_command(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let saved = saved::load_or_warn(&config.state_path);
    let inputs = resolve_inputs(&args, saved.as_ref())?;

    let api_key = config
        .places_api_key
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("GOOGLE_PLACES_API_KEY is not set; cannot search"))?;
    let client = PlacesClient::from_app_config(api_key, config)
        .map_err(|e| anyhow::anyhow!("failed to build places client: {e}"))?;

    if !args.no_save {
        let record = SavedSearch {
            location: inputs.location.clone(),
            radius_km: inputs.radius_km,
            categories: inputs.categories.clone(),
            saved_at: Utc::now(),
        };
        if let Err(e) = saved::store(&config.state_path, &record) {
            tracing::warn!(error = %e, "could not save search inputs");
        }
    }

    eprintln!(
        "searching {} categories within {} km of {}",
        inputs.categories.len(),
        inputs.radius_km,
        inputs.location
    );

    let results = run_search(
        &client,
        SearchOrigin::Address(inputs.location.clone()),
        inputs.radius_m(),
        &inputs.categories,
        SearchOptions::from_config(config),
    )
    .await?;

    eprintln!("found {} businesses without websites", results.len());

    let Some(rendered) = render(&results, args.layout) else {
        eprintln!("No data to export");
        return Ok(());
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
