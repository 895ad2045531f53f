//! Catalog filter/sort pipeline.
//!
//! Every change to the search box, a filter checkbox, or the sort dropdown
//! re-runs [`apply`] over the full inventory: substring search, then the
//! multi-select filters, then a sort keyed by [`SortKey`]. There is no
//! memoization; the inventory is six courses.

use serde::Deserialize;

use super::course::Course;

/// Demo pagination stops after this page, matching the original
/// "infinite scroll" cap.
pub const MAX_PAGE: u32 = 2;

/// Sort order for catalog results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// No-op comparator; fixture order.
    #[default]
    Relevance,
    Popularity,
    Rating,
    Newest,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    /// Query-string value for this key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Popularity => "popularity",
            Self::Rating => "rating",
            Self::Newest => "newest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
        }
    }

    /// Dropdown label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Most Relevant",
            Self::Popularity => "Most Popular",
            Self::Rating => "Highest Rated",
            Self::Newest => "Newest",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
        }
    }

    /// All options, in dropdown order.
    #[must_use]
    pub fn all() -> [Self; 6] {
        [
            Self::Relevance,
            Self::Popularity,
            Self::Rating,
            Self::Newest,
            Self::PriceLow,
            Self::PriceHigh,
        ]
    }
}

/// Decoded catalog query string. Repeated keys accumulate into the vectors
/// (`?category=design&category=marketing`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    pub search: String,
    pub category: Vec<String>,
    pub price: Vec<String>,
    pub level: Vec<String>,
    pub rating: Vec<String>,
    pub sort: SortKey,
    pub page: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: Vec::new(),
            price: Vec::new(),
            level: Vec::new(),
            rating: Vec::new(),
            sort: SortKey::Relevance,
            page: 1,
        }
    }
}

impl CatalogQuery {
    /// Whether any filter (not search/sort) is selected.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.category.is_empty()
            || !self.price.is_empty()
            || !self.level.is_empty()
            || !self.rating.is_empty()
    }

    /// Copy of this query with one filter value removed (chip dismissal).
    #[must_use]
    pub fn without(&self, kind: &str, value: &str) -> Self {
        let mut next = self.clone();
        let list = match kind {
            "category" => &mut next.category,
            "price" => &mut next.price,
            "level" => &mut next.level,
            "rating" => &mut next.rating,
            _ => return next,
        };
        list.retain(|v| v != value);
        next
    }

    /// Copy of this query with every filter cleared.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self {
            search: self.search.clone(),
            sort: self.sort,
            ..Self::default()
        }
    }

    /// Re-encode as a query string (no leading `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        for v in &self.category {
            pairs.push(("category", v.clone()));
        }
        for v in &self.price {
            pairs.push(("price", v.clone()));
        }
        for v in &self.level {
            pairs.push(("level", v.clone()));
        }
        for v in &self.rating {
            pairs.push(("rating", v.clone()));
        }
        if self.sort != SortKey::Relevance {
            pairs.push(("sort", self.sort.as_str().to_string()));
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        pairs
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Minimal percent-encoding for query values we generate ourselves.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// An active-filter chip derived from the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    /// Filter group the value belongs to (`category`, `price`, ...).
    pub kind: &'static str,
    /// Raw query value.
    pub value: String,
    /// Group label ("Category").
    pub label: &'static str,
    /// Capitalized value for display.
    pub display: String,
}

/// Chips for every selected filter value, in group order.
#[must_use]
pub fn active_chips(query: &CatalogQuery) -> Vec<FilterChip> {
    let mut chips = Vec::new();
    let groups: [(&'static str, &'static str, &Vec<String>); 4] = [
        ("category", "Category", &query.category),
        ("price", "Price", &query.price),
        ("level", "Level", &query.level),
        ("rating", "Rating", &query.rating),
    ];
    for (kind, label, values) in groups {
        for value in values {
            chips.push(FilterChip {
                kind,
                value: value.clone(),
                label,
                display: capitalize(value),
            });
        }
    }
    chips
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Run the filter/sort pipeline over the inventory.
#[must_use]
pub fn apply(courses: &[Course], query: &CatalogQuery) -> Vec<Course> {
    let mut filtered: Vec<Course> = courses
        .iter()
        .filter(|course| matches_search(course, &query.search))
        .filter(|course| {
            query.category.is_empty() || query.category.iter().any(|c| c == course.category)
        })
        .filter(|course| matches_price(course, &query.price))
        .filter(|course| {
            query.level.is_empty() || query.level.iter().any(|l| l == course.level.slug())
        })
        .filter(|course| matches_rating(course, &query.rating))
        .cloned()
        .collect();

    match query.sort {
        SortKey::Relevance => {}
        SortKey::Popularity => {
            filtered.sort_by(|a, b| b.enrollment_count.cmp(&a.enrollment_count));
        }
        SortKey::Rating => {
            filtered.sort_by(|a, b| {
                b.rating
                    .partial_cmp(&a.rating)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortKey::Newest => filtered.sort_by(|a, b| b.id.cmp(&a.id)),
        SortKey::PriceLow => {
            filtered.sort_by(|a, b| {
                a.price
                    .partial_cmp(&b.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
        SortKey::PriceHigh => {
            filtered.sort_by(|a, b| {
                b.price
                    .partial_cmp(&a.price)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        }
    }

    filtered
}

fn matches_search(course: &Course, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    course.title.to_lowercase().contains(&needle)
        || course.instructor.name.to_lowercase().contains(&needle)
}

fn matches_price(course: &Course, price: &[String]) -> bool {
    if price.is_empty() {
        return true;
    }
    (price.iter().any(|p| p == "free") && course.is_free())
        || (price.iter().any(|p| p == "paid") && course.price > 0.0)
}

/// At least one selected threshold must be satisfied. Values that fail to
/// parse are ignored, like the original's `parseFloat` producing NaN.
fn matches_rating(course: &Course, rating: &[String]) -> bool {
    if rating.is_empty() {
        return true;
    }
    rating
        .iter()
        .filter_map(|r| r.parse::<f32>().ok())
        .any(|threshold| course.rating >= threshold)
}

/// Whether more demo pages remain after `page`.
#[must_use]
pub fn has_more(page: u32) -> bool {
    page < MAX_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::course::mock_courses;

    fn query() -> CatalogQuery {
        CatalogQuery::default()
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let courses = mock_courses();
        assert_eq!(apply(&courses, &query()).len(), courses.len());
    }

    #[test]
    fn test_category_filter() {
        let courses = mock_courses();
        let mut q = query();
        q.category = vec!["data-science".to_string()];

        let results = apply(&courses, &q);
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].title,
            "Python for Data Science and Machine Learning"
        );
    }

    #[test]
    fn test_free_price_filter() {
        let courses = mock_courses();
        let mut q = query();
        q.price = vec!["free".to_string()];

        let results = apply(&courses, &q);
        assert!(!results.is_empty());
        assert!(results.iter().all(|c| c.price == 0.0));
    }

    #[test]
    fn test_paid_and_free_together() {
        let courses = mock_courses();
        let mut q = query();
        q.price = vec!["free".to_string(), "paid".to_string()];
        assert_eq!(apply(&courses, &q).len(), courses.len());
    }

    #[test]
    fn test_search_matches_instructor() {
        let courses = mock_courses();
        let mut q = query();
        q.search = "chen".to_string();

        let results = apply(&courses, &q);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].instructor.name, "Dr. Michael Chen");
    }

    #[test]
    fn test_price_low_sort_is_non_decreasing() {
        let courses = mock_courses();
        let mut q = query();
        q.sort = SortKey::PriceLow;

        let results = apply(&courses, &q);
        for pair in results.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn test_rating_threshold_any_of() {
        let courses = mock_courses();
        let mut q = query();
        q.rating = vec!["4.8".to_string()];

        let results = apply(&courses, &q);
        assert!(results.iter().all(|c| c.rating >= 4.8));
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_relevance_preserves_fixture_order() {
        let courses = mock_courses();
        let ids: Vec<u32> = apply(&courses, &query()).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_chip_derivation_and_removal() {
        let mut q = query();
        q.category = vec!["design".to_string()];
        q.level = vec!["beginner".to_string()];

        let chips = active_chips(&q);
        assert_eq!(chips.len(), 2);
        assert_eq!(chips[0].label, "Category");
        assert_eq!(chips[0].display, "Design");

        let next = q.without("category", "design");
        assert!(next.category.is_empty());
        assert_eq!(next.level, vec!["beginner".to_string()]);
    }

    #[test]
    fn test_query_string_round_trip_shape() {
        let mut q = query();
        q.search = "react hooks".to_string();
        q.price = vec!["paid".to_string()];
        q.sort = SortKey::PriceHigh;

        let qs = q.to_query_string();
        assert!(qs.contains("search=react+hooks"));
        assert!(qs.contains("price=paid"));
        assert!(qs.contains("sort=price-high"));
    }

    #[test]
    fn test_demo_page_cap() {
        assert!(has_more(1));
        assert!(!has_more(2));
        assert!(!has_more(3));
    }
}
