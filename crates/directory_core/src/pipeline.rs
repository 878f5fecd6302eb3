//! Filter → sort → paginate derivation over the loaded records.
//!
//! Every function here is pure: the same records and query always produce
//! the same output, and the input slice is never reordered.

use std::cmp::Ordering;

use shared::domain::{AgeBracket, GenderFilter, SearchField, SortKey, UserRecord};

pub const PAGE_SIZE: usize = 12;

/// Current values of the search, filter, and sort controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub search_text: String,
    pub search_field: SearchField,
    pub gender: GenderFilter,
    pub age: AgeBracket,
    pub sort: SortKey,
}

impl Query {
    pub fn matches(&self, record: &UserRecord) -> bool {
        self.matches_search(record)
            && self.gender.matches(record.gender)
            && self.age.contains(record.age)
    }

    fn matches_search(&self, record: &UserRecord) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        record
            .search_text(self.search_field)
            .to_lowercase()
            .contains(&needle)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageSlice<'a> {
    pub items: Vec<&'a UserRecord>,
    /// Effective 1-based page after clamping.
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
}

pub fn filter<'a>(records: &'a [UserRecord], query: &Query) -> Vec<&'a UserRecord> {
    records.iter().filter(|record| query.matches(record)).collect()
}

/// Stable ascending sort by the selected key.
pub fn sort(records: &mut [&UserRecord], key: SortKey) {
    records.sort_by(|a, b| compare(a, b, key));
}

pub fn compare(a: &UserRecord, b: &UserRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => collate(&a.full_name(), &b.full_name()),
        SortKey::Age => a.age.cmp(&b.age),
        SortKey::Location => collate(&a.location.country, &b.location.country),
    }
}

/// Case-insensitive text order with the raw text as tie-break.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// At least one page, even when nothing matches.
pub fn total_pages(matches: usize, page_size: usize) -> usize {
    matches.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

pub fn paginate(sorted: Vec<&UserRecord>, page: usize, page_size: usize) -> PageSlice<'_> {
    let page_size = page_size.max(1);
    let total_matches = sorted.len();
    let total_pages = total_pages(total_matches, page_size);
    let page = clamp_page(page, total_pages);
    let start = (page - 1) * page_size;
    let items = sorted.into_iter().skip(start).take(page_size).collect();

    PageSlice {
        items,
        page,
        total_pages,
        total_matches,
    }
}

pub fn derive<'a>(
    records: &'a [UserRecord],
    query: &Query,
    page: usize,
    page_size: usize,
) -> PageSlice<'a> {
    let mut matched = filter(records, query);
    sort(&mut matched, query.sort);
    paginate(matched, page, page_size)
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
