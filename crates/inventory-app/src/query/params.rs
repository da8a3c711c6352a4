//! The active filter / sort / pagination parameters of the product table.

use serde::{Deserialize, Serialize};

/// Price ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSort {
    /// Collection order.
    #[default]
    None,
    /// Low to high.
    Ascending,
    /// High to low.
    Descending,
}

/// Rows per page. Only these sizes are offered by the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    Twenty,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::Twenty];

    pub fn get(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(PageSize::Five),
            10 => Ok(PageSize::Ten),
            20 => Ok(PageSize::Twenty),
            other => Err(format!("unsupported page size {other}, expected 5, 10 or 20")),
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

/// Query parameters for [`render`](super::render).
///
/// Fields are private so that every filter change goes through a setter, and every setter
/// except [`QuerySpec::set_page`] moves back to page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    category: Option<String>,
    in_stock_only: bool,
    search: String,
    price_sort: PriceSort,
    page: usize,
    page_size: PageSize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl QuerySpec {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            category: None,
            in_stock_only: false,
            search: String::new(),
            price_sort: PriceSort::None,
            page: 1,
            page_size,
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn in_stock_only(&self) -> bool {
        self.in_stock_only
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn price_sort(&self) -> PriceSort {
        self.price_sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Exact category match. `None` or an empty label clears the filter.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.filter(|c| !c.is_empty());
        self.page = 1;
    }

    pub fn set_in_stock_only(&mut self, in_stock_only: bool) {
        self.in_stock_only = in_stock_only;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_price_sort(&mut self, price_sort: PriceSort) {
        self.price_sort = price_sort;
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = 1;
    }

    /// Jumps to a page. Pages past the end simply render empty.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// "Next" button: never moves past `total_pages` (or below 1).
    pub fn next_page(&mut self, total_pages: usize) {
        self.page = self.page.saturating_add(1).min(total_pages).max(1);
    }

    /// "Previous" button: never moves below page 1.
    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Drops category, stock, search and sort, keeping the page size.
    pub fn clear_filters(&mut self) {
        *self = Self::new(self.page_size);
    }

    /// Whether any filter narrows the result.
    pub fn has_filters(&self) -> bool {
        self.category.is_some() || self.in_stock_only || !self.search.is_empty()
    }
}
