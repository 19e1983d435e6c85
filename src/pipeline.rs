//! Country pipeline: filter, group, paginate and highlight.
//!
//! The pipeline owns the immutable base list and a derived view list. Every
//! `apply`/`clear` rebuilds the view from the base list, so repeated queries
//! never accumulate state. Selection and highlight colors live only on
//! [`CountryView`] items.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::models::{Country, HighlightColor, PaletteCursor};
use crate::query::{GroupKey, GroupRequest, Query, INVALID_GROUP_WARNING};

/// Number of countries per page.
pub const PAGE_SIZE: usize = 15;

/// Position auto-selected after each query (the 10th item).
pub const AUTO_SELECT_INDEX: usize = 9;

/// A country as shown in the current view, with transient selection state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryView {
    /// Shared source record
    #[serde(flatten)]
    country: Arc<Country>,
    /// Whether the item is selected
    pub is_selected: bool,
    /// Assigned highlight color; kept when the item is deselected
    pub highlight: Option<HighlightColor>,
}

impl CountryView {
    fn new(country: Arc<Country>) -> Self {
        Self {
            country,
            is_selected: false,
            highlight: None,
        }
    }

    /// Source record.
    #[must_use]
    pub fn country(&self) -> &Country {
        &self.country
    }

    /// Country code (selection key).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.country.code
    }
}

/// Result of [`CountryPipeline::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Number of countries in the new view
    pub matched: usize,
    /// Advisory shown when the group token was not a grouping keyword
    pub warning: Option<&'static str>,
}

/// Filter/group/select/paginate state for one country list.
#[derive(Debug, Clone)]
pub struct CountryPipeline {
    base: Vec<Arc<Country>>,
    view: Vec<CountryView>,
    current_page: usize,
    title: String,
    cursor: PaletteCursor,
    /// Fallback colors for the 10th and last view positions, drawn per rebuild
    boundary_colors: (HighlightColor, HighlightColor),
}

impl CountryPipeline {
    /// Creates a pipeline over the base list, showing every country unselected.
    #[must_use]
    pub fn new(countries: Vec<Country>) -> Self {
        let base: Vec<Arc<Country>> = countries.into_iter().map(Arc::new).collect();
        let view = Self::fresh_view(&base);

        Self {
            base,
            view,
            current_page: 1,
            title: String::new(),
            cursor: PaletteCursor::new(),
            boundary_colors: (HighlightColor::random(), HighlightColor::random()),
        }
    }

    fn fresh_view(base: &[Arc<Country>]) -> Vec<CountryView> {
        base.iter().cloned().map(CountryView::new).collect()
    }

    /// Replaces the view and redraws the boundary fallback colors.
    fn publish(&mut self, view: Vec<CountryView>) {
        self.view = view;
        self.boundary_colors = (HighlightColor::random(), HighlightColor::random());
    }

    /// Marks the 10th item (or the last, for shorter lists) as selected.
    fn auto_select(&mut self, view: &mut [CountryView]) {
        if view.is_empty() {
            return;
        }
        let index = AUTO_SELECT_INDEX.min(view.len() - 1);
        view[index].is_selected = true;
        view[index].highlight = Some(self.cursor.next_color());
    }

    /// Applies a search and group query.
    ///
    /// Tokens are raw filter input; see [`Query::classify`] for how they are
    /// interpreted. With both tokens empty the full list is restored and the
    /// title and page are left as they were.
    pub fn apply(&mut self, search_text: &str, group_text: &str) -> ApplyOutcome {
        let query = Query::classify(search_text, group_text);

        if query.is_empty() {
            let mut view = Self::fresh_view(&self.base);
            self.auto_select(&mut view);
            let matched = view.len();
            self.publish(view);
            info!(matched, "Reset view to full country list");
            return ApplyOutcome {
                matched,
                warning: None,
            };
        }

        let mut view: Vec<CountryView> = if query.search.is_empty() {
            Self::fresh_view(&self.base)
        } else {
            self.base
                .iter()
                .filter(|country| country.matches(&query.search))
                .cloned()
                .map(CountryView::new)
                .collect()
        };

        let mut warning = None;
        match &query.group {
            GroupRequest::By(key) => view = group_by(view, *key),
            GroupRequest::Invalid(token) => {
                if !view.is_empty() {
                    debug!(token = %token, "Ignoring unknown group token");
                    warning = Some(INVALID_GROUP_WARNING);
                }
            }
            GroupRequest::None => {}
        }

        self.auto_select(&mut view);

        self.title = query.title(view.len());
        self.current_page = 1;
        let matched = view.len();
        self.publish(view);

        info!(
            search = %query.search,
            group = ?query.group,
            matched,
            "Applied country query"
        );

        ApplyOutcome { matched, warning }
    }

    /// Restores the full list with no selection, an empty title and page 1.
    pub fn clear(&mut self) {
        let view = Self::fresh_view(&self.base);
        self.publish(view);
        self.title.clear();
        self.current_page = 1;
        info!("Cleared filters");
    }

    /// Sets the current page (1-based). Bounds are not checked.
    pub fn set_page(&mut self, page: usize) {
        debug!(page, "Page changed");
        self.current_page = page;
    }

    /// Moves to the next page if there is one.
    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.set_page(self.current_page + 1);
            true
        } else {
            false
        }
    }

    /// Moves to the previous page if there is one.
    pub fn previous_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.set_page(self.current_page - 1);
            true
        } else {
            false
        }
    }

    /// Flips selection for `code` and assigns the next palette color.
    ///
    /// The color is assigned in both directions, so a deselected item keeps a
    /// color. Returns `false` when no view item has that code.
    pub fn toggle_selection(&mut self, code: &str) -> bool {
        let Some(item) = self.view.iter_mut().find(|item| item.code() == code) else {
            return false;
        };

        item.is_selected = !item.is_selected;
        let color = self.cursor.next_color();
        item.highlight = Some(color);
        debug!(code, selected = item.is_selected, color = %color, "Toggled selection");
        true
    }

    /// Slice of the view list for a 1-based page; empty when out of range.
    #[must_use]
    pub fn paginate(&self, page: usize) -> &[CountryView] {
        if page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(PAGE_SIZE).min(self.view.len());
        let end = page.saturating_mul(PAGE_SIZE).min(self.view.len());
        &self.view[start..end]
    }

    /// Items on the current page.
    #[must_use]
    pub fn current_page_items(&self) -> &[CountryView] {
        self.paginate(self.current_page)
    }

    /// Returns the color under the palette cursor and advances it.
    pub fn next_color(&mut self) -> HighlightColor {
        self.cursor.next_color()
    }

    /// Display background for an item at `position_in_page` on the current page.
    ///
    /// Selected items use their assigned color. Unselected items at the 10th
    /// or last position of the current view still get a color: their retained
    /// one, or a palette pick drawn when the view was built. Everything else
    /// is transparent (`None`).
    #[must_use]
    pub fn background_for(&self, item: &CountryView, position_in_page: usize) -> Option<HighlightColor> {
        if item.is_selected {
            return item.highlight;
        }

        let index = self.current_page.saturating_sub(1) * PAGE_SIZE + position_in_page;
        self.boundary_fallback(index)
            .map(|fallback| item.highlight.unwrap_or(fallback))
    }

    fn boundary_fallback(&self, index: usize) -> Option<HighlightColor> {
        let last = self.view.len().checked_sub(1)?;
        if index == AUTO_SELECT_INDEX && index <= last {
            Some(self.boundary_colors.0)
        } else if index == last {
            Some(self.boundary_colors.1)
        } else {
            None
        }
    }

    /// Number of pages for the current view (`ceil(len / 15)`).
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.view.len().div_ceil(PAGE_SIZE)
    }

    /// Page numbers offered to the user (`1..=total_pages`).
    pub fn page_numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.total_pages()
    }

    /// Current view list.
    #[must_use]
    pub fn view(&self) -> &[CountryView] {
        &self.view
    }

    /// Number of countries in the base list.
    #[must_use]
    pub fn base_len(&self) -> usize {
        self.base.len()
    }

    /// Current status title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Current page (1-based).
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }
}

/// Currency bucket key for countries without a currency.
///
/// Lower-case, so the bucket sorts after every upper-case currency code.
pub const MISSING_CURRENCY_KEY: &str = "null";

/// Bucket key for a country under a grouping keyword.
#[must_use]
pub fn group_key(country: &Country, key: GroupKey) -> String {
    match key {
        GroupKey::Continent => country.continent.name.to_lowercase(),
        GroupKey::Currency => country
            .currency
            .as_deref()
            .unwrap_or(MISSING_CURRENCY_KEY)
            .to_string(),
        GroupKey::Language => country.languages_display().to_lowercase(),
    }
}

/// Concatenates buckets in ascending key order, keeping in-bucket order.
fn group_by(view: Vec<CountryView>, key: GroupKey) -> Vec<CountryView> {
    let mut buckets: BTreeMap<String, Vec<CountryView>> = BTreeMap::new();
    for item in view {
        buckets
            .entry(group_key(item.country(), key))
            .or_default()
            .push(item);
    }
    buckets.into_values().flatten().collect()
}
