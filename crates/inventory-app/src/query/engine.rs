//! Filtering, sorting and pagination over a product collection.

use super::params::{PriceSort, QuerySpec};
use crate::model::Product;

/// One rendered page of the product table.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    /// Visible rows, at most `page_size`.
    pub items: Vec<&'a Product>,
    /// Rows passing all filters.
    pub total_matched: usize,
    /// `ceil(total_matched / page_size)`.
    pub total_pages: usize,
    /// Size of the whole collection.
    pub total_items: usize,
    pub page: usize,
    pub page_size: usize,
}

impl PageView<'_> {
    /// Share of the collection that passes the filters, rounded up. `0` for an empty collection.
    pub fn percent_shown(&self) -> usize {
        if self.total_items == 0 {
            return 0;
        }
        (self.total_matched * 100).div_ceil(self.total_items)
    }

    /// 1-based inclusive row numbers of the visible slice, `(0, 0)` when nothing is visible.
    pub fn range(&self) -> (usize, usize) {
        if self.items.is_empty() {
            return (0, 0);
        }
        let first = (self.page - 1) * self.page_size + 1;
        (first, first + self.items.len() - 1)
    }

    /// Whether the filters hide part of the collection.
    pub fn is_filtered(&self) -> bool {
        self.total_matched != self.total_items
    }

    /// Copies the visible rows out of the borrowed collection.
    pub fn to_owned_items(&self) -> Vec<Product> {
        self.items.iter().map(|p| (*p).clone()).collect()
    }
}

/// An owned [`PageView`], for handing a page across a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub items: Vec<Product>,
    pub total_matched: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page: usize,
    pub page_size: usize,
    pub percent_shown: usize,
    pub range: (usize, usize),
}

impl From<PageView<'_>> for RenderedPage {
    fn from(view: PageView<'_>) -> Self {
        Self {
            items: view.to_owned_items(),
            total_matched: view.total_matched,
            total_pages: view.total_pages,
            total_items: view.total_items,
            page: view.page,
            page_size: view.page_size,
            percent_shown: view.percent_shown(),
            range: view.range(),
        }
    }
}

/// Whether `product` passes the conjunction of the active filters.
pub fn matches(product: &Product, query: &QuerySpec) -> bool {
    let matches_category = query.category().map_or(true, |c| product.category == c);
    let matches_in_stock = !query.in_stock_only() || product.in_stock;
    let matches_search = query.search().is_empty() || {
        let term = query.search().to_lowercase();
        product.name.to_lowercase().contains(&term)
            || product
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    };

    matches_category && matches_in_stock && matches_search
}

/// Computes the visible page of `collection` for `query`.
///
/// Sorting is stable in both directions: products with equal prices keep their
/// collection order whether the sort is ascending or descending.
pub fn render<'a>(collection: &'a [Product], query: &QuerySpec) -> PageView<'a> {
    let mut filtered: Vec<&Product> = collection.iter().filter(|p| matches(p, query)).collect();

    match query.price_sort() {
        PriceSort::None => {}
        PriceSort::Ascending => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        PriceSort::Descending => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    let page_size = query.page_size().get();
    let total_matched = filtered.len();
    let total_pages = total_matched.div_ceil(page_size);

    let items = match query.page().checked_sub(1) {
        Some(index) => filtered
            .into_iter()
            .skip(index.saturating_mul(page_size))
            .take(page_size)
            .collect(),
        None => Vec::new(),
    };

    PageView {
        items,
        total_matched,
        total_pages,
        total_items: collection.len(),
        page: query.page(),
        page_size,
    }
}

/// Distinct non-empty categories in first-seen order.
pub fn categories(collection: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in collection {
        if !product.category.is_empty() && !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::bootstrap::sample_products;
    use crate::model::ProductDraft;
    use crate::query::PageSize;

    fn product(id: &str, name: &str, price: f64, category: &str) -> Product {
        Product::new(id.into(), ProductDraft::new(name, price, category, 1, true))
    }

    fn names(view: &PageView<'_>) -> Vec<String> {
        view.items.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_electronics_filter_on_sample_set() {
        let products = sample_products();
        let mut query = QuerySpec::new(PageSize::Five);
        query.set_category(Some("Electronics".into()));

        let view = render(&products, &query);
        assert_eq!(view.total_matched, 4);
        assert_eq!(view.total_pages, 1);
        assert_eq!(
            names(&view),
            vec!["Laptop", "Wireless Headphones", "Smartphone", "Tablet"]
        );
        assert_eq!(view.percent_shown(), 40);
        assert_eq!(view.range(), (1, 4));
        assert!(view.is_filtered());
    }

    #[test]
    fn test_search_is_case_insensitive_and_ignores_stock_filter() {
        let products = sample_products();
        let mut query = QuerySpec::default();
        query.set_search("ORGANIC");
        let view = render(&products, &query);
        assert_eq!(names(&view), vec!["Organic Apples", "Organic Bananas"]);

        // Organic Apples is out of stock, so the stock filter narrows the result.
        query.set_in_stock_only(true);
        let view = render(&products, &query);
        assert_eq!(names(&view), vec!["Organic Bananas"]);
    }

    #[test]
    fn test_search_matches_description_but_not_missing_one() {
        let mut with_description = product("a", "Widget", 1.0, "Tools");
        with_description.description = Some("Great for Smoothies".into());
        let without_description = product("b", "Gadget", 2.0, "Tools");
        let products = vec![with_description, without_description];

        let mut query = QuerySpec::default();
        query.set_search("smoothie");
        assert_eq!(names(&render(&products, &query)), vec!["Widget"]);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let products = sample_products();
        let mut query = QuerySpec::default();
        query.set_category(Some("Furniture".into()));

        let view = render(&products, &query);
        assert_eq!(view.total_matched, 0);
        assert_eq!(view.total_pages, 0);
        assert!(view.items.is_empty());
        assert_eq!(view.range(), (0, 0));
    }

    #[test]
    fn test_pagination_slices_and_out_of_range_is_empty() {
        let products = sample_products();
        let mut query = QuerySpec::default();

        let first = render(&products, &query);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items.len(), 5);
        assert_eq!(first.range(), (1, 5));

        query.set_page(2);
        let second = render(&products, &query);
        assert_eq!(names(&second)[0], "Organic Bananas");
        assert_eq!(second.range(), (6, 10));

        query.set_page(3);
        assert!(render(&products, &query).items.is_empty());

        query.set_page(0);
        assert!(render(&products, &query).items.is_empty());

        query.set_page(usize::MAX);
        assert!(render(&products, &query).items.is_empty());
    }

    #[test]
    fn test_sort_directions_are_stable() {
        let products = vec![
            product("1", "b-first", 5.0, "x"),
            product("2", "cheap", 1.0, "x"),
            product("3", "b-second", 5.0, "x"),
            product("4", "dear", 9.0, "x"),
        ];
        let mut query = QuerySpec::new(PageSize::Ten);

        query.set_price_sort(PriceSort::Ascending);
        assert_eq!(
            names(&render(&products, &query)),
            vec!["cheap", "b-first", "b-second", "dear"]
        );

        query.set_price_sort(PriceSort::Descending);
        assert_eq!(
            names(&render(&products, &query)),
            vec!["dear", "b-first", "b-second", "cheap"]
        );

        query.set_price_sort(PriceSort::None);
        assert_eq!(
            names(&render(&products, &query)),
            vec!["b-first", "cheap", "b-second", "dear"]
        );
    }

    #[test]
    fn test_empty_collection() {
        let mut query = QuerySpec::default();
        query.set_search("anything");
        let view = render(&[], &query);

        assert_eq!(view.total_matched, 0);
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.percent_shown(), 0);
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_visible_rows_never_exceed_page_size_or_matches() {
        let products = sample_products();
        for size in PageSize::ALL {
            for page in 0..5 {
                for in_stock_only in [false, true] {
                    let mut query = QuerySpec::new(size);
                    query.set_in_stock_only(in_stock_only);
                    query.set_page(page);
                    let view = render(&products, &query);
                    assert!(view.items.len() <= size.get());
                    assert!(view.items.len() <= view.total_matched);
                }
            }
        }
    }

    #[test]
    fn test_categories_first_seen_order() {
        let mut products = sample_products();
        products.push(product("x", "Blank", 1.0, ""));
        assert_eq!(categories(&products), vec!["Electronics", "Apparel", "Grocery"]);
    }
}
