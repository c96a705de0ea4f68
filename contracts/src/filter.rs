use crate::catalog::CaseStudy;

/// Label of the catch-all selection shown first in the filter bar.
pub const ALL_LABEL: &str = "All";

/// The category a list page is currently showing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategorySelection {
    #[default]
    All,
    Category(String),
}

impl CategorySelection {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_LABEL {
            Self::All
        } else {
            Self::Category(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Category(category) => category,
        }
    }

    pub fn matches(&self, record: &CaseStudy) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => record.category == *category,
        }
    }
}

/// Distinct categories in first-seen order, without the "All" sentinel.
pub fn available_categories<'a, I>(records: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a CaseStudy>,
{
    let mut categories: Vec<&str> = Vec::new();
    for record in records {
        if !categories.contains(&record.category.as_str()) {
            categories.push(&record.category);
        }
    }
    categories
}

/// Filter bar options: "All" followed by every category in the catalog.
pub fn selection_options<'a, I>(records: I) -> Vec<CategorySelection>
where
    I: IntoIterator<Item = &'a CaseStudy>,
{
    std::iter::once(CategorySelection::All)
        .chain(
            available_categories(records)
                .into_iter()
                .map(|c| CategorySelection::Category(c.to_string())),
        )
        .collect()
}

/// Order-preserving subsequence of `records` matching `selection`.
pub fn filter<'a, I>(records: I, selection: &CategorySelection) -> Vec<&'a CaseStudy>
where
    I: IntoIterator<Item = &'a CaseStudy>,
{
    records.into_iter().filter(|r| selection.matches(r)).collect()
}

/// What a list page renders: cards, or the explicit "no items" state.
#[derive(Debug, PartialEq)]
pub enum FilteredView<'a> {
    Items(Vec<&'a CaseStudy>),
    Empty,
}

pub fn filtered_view<'a, I>(records: I, selection: &CategorySelection) -> FilteredView<'a>
where
    I: IntoIterator<Item = &'a CaseStudy>,
{
    let items = filter(records, selection);
    if items.is_empty() {
        FilteredView::Empty
    } else {
        FilteredView::Items(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::record;
    use crate::catalog::{portfolio, Catalog};

    fn six() -> Catalog {
        Catalog::new(vec![
            record("a", "Web Development"),
            record("b", "Paid Ads"),
            record("c", "Web Development"),
            record("d", "Social Media"),
            record("e", "Paid Ads"),
            record("f", "Web Development"),
        ])
        .unwrap()
    }

    fn slugs(records: &[&CaseStudy]) -> Vec<String> {
        records.iter().map(|r| r.slug.clone()).collect()
    }

    #[test]
    fn test_all_returns_catalog_unchanged() {
        let catalog = six();
        let all = filter(catalog.get_all(), &CategorySelection::All);
        assert_eq!(all.len(), catalog.len());
        assert!(all.iter().zip(catalog.get_all()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_paid_ads_keeps_relative_order() {
        let catalog = six();
        let paid = filter(catalog.get_all(), &CategorySelection::from_label("Paid Ads"));
        assert_eq!(slugs(&paid), vec!["b", "e"]);
    }

    #[test]
    fn test_category_count_matches() {
        let catalog = six();
        for category in available_categories(catalog.get_all()) {
            let selection = CategorySelection::from_label(category);
            let filtered = filter(catalog.get_all(), &selection);
            let expected = catalog.get_all().iter().filter(|r| r.category == category).count();
            assert_eq!(filtered.len(), expected);
            assert!(filtered.iter().all(|r| r.category == category));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = six();
        let selection = CategorySelection::from_label("Web Development");
        let once = filter(catalog.get_all(), &selection);
        let twice = filter(once.iter().copied(), &selection);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let catalog = six();
        assert_eq!(
            available_categories(catalog.get_all()),
            vec!["Web Development", "Paid Ads", "Social Media"]
        );
        let options = selection_options(catalog.get_all());
        assert_eq!(options[0], CategorySelection::All);
        assert_eq!(options.len(), 4);
    }

    #[test]
    fn test_unknown_category_is_explicitly_empty() {
        let catalog = six();
        let view = filtered_view(catalog.get_all(), &CategorySelection::from_label("Print"));
        assert_eq!(view, FilteredView::Empty);
    }

    #[test]
    fn test_every_offered_category_has_items() {
        // The filter bar is derived from the catalog, so no option may come up empty.
        let catalog = portfolio();
        for option in selection_options(catalog.get_all()) {
            assert!(matches!(filtered_view(catalog.get_all(), &option), FilteredView::Items(_)));
        }
    }

    #[test]
    fn test_all_label_round_trips() {
        assert_eq!(CategorySelection::from_label("All"), CategorySelection::All);
        assert_eq!(CategorySelection::All.label(), "All");
        assert_eq!(CategorySelection::from_label("Paid Ads").label(), "Paid Ads");
    }
}
