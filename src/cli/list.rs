//! Headless country listing.

use crate::cli::common::{CliError, CliResult};
use crate::fetch::CountrySource;
use crate::models::HighlightColor;
use crate::pipeline::{CountryPipeline, CountryView};
use crate::query::split_filter_text;
use clap::Args;
use serde::Serialize;
use tracing::info;

/// Filter, group and print countries without the TUI
#[derive(Debug, Clone, Args)]
pub struct ListArgs {
    /// Filter text, e.g. `tt continent` (search token, then group token)
    #[arg(value_name = "QUERY", num_args = 0..)]
    pub query: Vec<String>,

    /// Page to print (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Print every page
    #[arg(long, conflicts_with = "page")]
    pub all: bool,

    /// Toggle selection of a country code after filtering (repeatable)
    #[arg(long, value_name = "CODE")]
    pub toggle: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One printed country with its page and display background.
#[derive(Debug, Serialize)]
struct ListRow {
    page: usize,
    #[serde(flatten)]
    item: CountryView,
    background: Option<HighlightColor>,
}

#[derive(Debug, Serialize)]
struct ListOutput {
    title: String,
    warning: Option<&'static str>,
    /// `None` when every page was printed
    page: Option<usize>,
    total_pages: usize,
    matched: usize,
    items: Vec<ListRow>,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, source: &CountrySource) -> CliResult<()> {
        let countries = source
            .load()
            .map_err(|e| CliError::io(format!("Failed to load countries: {e:#}")))?;

        let mut pipeline = CountryPipeline::new(countries);
        let (search, group) = split_filter_text(&self.query.join(" "));
        let outcome = pipeline.apply(&search, &group);

        for code in &self.toggle {
            if !pipeline.toggle_selection(code) {
                return Err(CliError::validation(format!(
                    "Country code '{code}' is not in the result"
                )));
            }
        }

        let total_pages = pipeline.total_pages();
        let pages: Vec<usize> = if self.all {
            pipeline.page_numbers().collect()
        } else {
            check_page(self.page, total_pages)?;
            vec![self.page]
        };

        let items = collect_rows(&mut pipeline, &pages);
        info!(query = %self.query.join(" "), rows = items.len(), "Listed countries");

        let output = ListOutput {
            title: pipeline.title().to_string(),
            warning: outcome.warning,
            page: (!self.all).then_some(self.page),
            total_pages,
            matched: outcome.matched,
            items,
        };

        if self.json {
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
        } else {
            print_human_readable(&output);
        }

        Ok(())
    }
}

/// Page 1 of an empty result is allowed so "not found" still prints a title.
fn check_page(page: usize, total_pages: usize) -> CliResult<()> {
    if page == 0 || (page > total_pages && !(page == 1 && total_pages == 0)) {
        return Err(CliError::validation(format!(
            "Page {page} is out of range (1-{total_pages})"
        )));
    }
    Ok(())
}

fn collect_rows(pipeline: &mut CountryPipeline, pages: &[usize]) -> Vec<ListRow> {
    let mut rows = Vec::new();
    for &page in pages {
        pipeline.set_page(page);
        for (position, item) in pipeline.current_page_items().iter().enumerate() {
            rows.push(ListRow {
                page,
                item: item.clone(),
                background: pipeline.background_for(item, position),
            });
        }
    }
    rows
}

fn print_human_readable(output: &ListOutput) {
    if !output.title.is_empty() {
        println!("{}", output.title);
    }
    if let Some(warning) = output.warning {
        println!("Warning: {warning}");
    }

    let mut current_page = None;
    for row in &output.items {
        if current_page != Some(row.page) {
            println!();
            println!(
                "Page {} of {} ({} countries)",
                row.page, output.total_pages, output.matched
            );
            current_page = Some(row.page);
        }

        let country = row.item.country();
        let marker = if row.item.is_selected { '*' } else { ' ' };
        let background = row
            .background
            .map(|color| format!("  [{color} {}]", color.to_hex()))
            .unwrap_or_default();
        println!(
            "{marker} {:<3} {:<28} {:<14} {:<18} {:<8} {}{background}",
            country.code,
            country.name,
            country.continent.name,
            country.capital_display(),
            country.currency_display(),
            country.languages_display(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Country;

    #[test]
    fn test_check_page_bounds() {
        assert!(check_page(1, 3).is_ok());
        assert!(check_page(3, 3).is_ok());
        assert!(check_page(0, 3).is_err());
        assert!(check_page(4, 3).is_err());
        // Empty results still print page 1
        assert!(check_page(1, 0).is_ok());
        assert!(check_page(2, 0).is_err());
    }

    #[test]
    fn test_collect_rows_all_pages() {
        let countries = (0..20)
            .map(|i| Country::new(format!("C{i:02}"), format!("Country {i}"), "Asia"))
            .collect();
        let mut pipeline = CountryPipeline::new(countries);
        pipeline.apply("", "");

        let rows = collect_rows(&mut pipeline, &[1, 2]);
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[15].page, 2);
        // Auto-selected 10th item carries its color
        assert!(rows[9].item.is_selected);
        assert!(rows[9].background.is_some());
        // Last item gets a boundary color
        assert!(rows[19].background.is_some());
        assert!(rows[0].background.is_none());
    }
}
