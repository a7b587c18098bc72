//! Explore command implementation for trade atlas CLI
//!
//! The interactive counterpart of `view`: the dataset is loaded once and the
//! user picks mode, commodity, reporter and period or year from menus built
//! from the dataset's own option lists, as many times as they like.

use super::shared::{
    RunStats, apply_display_overrides, build_store, load_configuration, print_load_summary,
    print_view_human, setup_logging,
};
use crate::Result;
use crate::app::models::Selection;
use crate::app::services::commodity_catalog::description_banner;
use crate::app::services::dataset_store::TradeDataset;
use crate::cli::args::ExploreArgs;
use crate::cli::input::{MenuChoice, ViewMode, prompt_choice, prompt_confirmation, prompt_view_mode};
use colored::*;
use std::time::Instant;
use tracing::{debug, info};

/// Explore command runner
pub fn run_explore(args: ExploreArgs) -> Result<RunStats> {
    let start_time = Instant::now();
    setup_logging(&args.log)?;

    info!("Starting interactive explorer");
    let mut config = load_configuration(&args.source)?;
    apply_display_overrides(&mut config.display, args.transform, args.sort_by_value);

    let store = build_store(&config, args.log.show_progress())?;
    let dataset = store.get_or_load()?;

    println!("{}", "Trade Atlas Explorer".bright_green().bold());
    print_load_summary(dataset.summary());

    let mut stats = RunStats {
        records_loaded: dataset.len(),
        ..Default::default()
    };

    loop {
        let Some(selection) = prompt_selection(&dataset)? else {
            break;
        };
        debug!("Interactive selection: {}", selection);

        // Memoized: no reload between selections
        let mut view = store.get_or_load()?.view(&selection);
        if config.display.sort_by_value {
            view.sort_by_value_desc();
        }
        print_view_human(&view, &config.display);

        stats.views_rendered += 1;
        stats.rows_output += view.len();

        if !prompt_confirmation("\nAnother selection?", true)? {
            break;
        }
    }

    stats.elapsed = start_time.elapsed();
    info!(
        "Explorer finished after {} views in {:.2?}",
        stats.views_rendered, stats.elapsed
    );
    Ok(stats)
}

/// Walk the user through one selection; `None` when they quit
fn prompt_selection(dataset: &TradeDataset) -> Result<Option<Selection>> {
    let options = dataset.options();

    let Some(mode) = prompt_view_mode()? else {
        return Ok(None);
    };

    let MenuChoice::Selected(commodity) = prompt_choice("commodity (HS code)", &options.commodities, None)? else {
        return Ok(None);
    };
    println!("{}", description_banner(&commodity).dimmed());

    let MenuChoice::Selected(reporter) = prompt_choice("reporter", &options.reporters, None)? else {
        return Ok(None);
    };

    let selection = match mode {
        ViewMode::Monthly => {
            let MenuChoice::Selected(period) = prompt_choice("period (YYYYMM)", &options.periods, None)? else {
                return Ok(None);
            };
            Selection::monthly(reporter, commodity, period)
        }
        ViewMode::Annual => {
            let MenuChoice::Selected(year) = prompt_choice("year (YYYY)", &options.years, None)? else {
                return Ok(None);
            };
            Selection::annual(reporter, commodity, year)
        }
    };

    Ok(Some(selection))
}
