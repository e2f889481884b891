//! # List state shared by the admin collection screens
//!
//! Every collection screen follows the same lifecycle: fetch everything,
//! filter by a text query, page through the result, and refetch after each
//! mutation. [`ResourceList`] holds that state once, generically, so the
//! pages only contribute their match predicate and their table markup.
//!
//! ## Fetch tickets
//!
//! Fetches are asynchronous and nothing cancels an in-flight request, so
//! responses can arrive out of order. [`begin_fetch`](ResourceList::begin_fetch)
//! hands out a monotonically increasing ticket and
//! [`apply`](ResourceList::apply) only accepts the collection presented with
//! the latest ticket; anything older is discarded. A failed fetch keeps the
//! previous collection visible.

/// Rows per page on the collection screens.
pub const PAGE_SIZE: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct ResourceList<T> {
    items: Vec<T>,
    query: String,
    page: usize,
    page_size: usize,
    issued: u64,
    loading: bool,
}

/// One page of a filtered collection, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_len: usize,
}

impl<T: Clone> ResourceList<T> {
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        assert!(page_size > 0);
        Self {
            items: Vec::new(),
            query: String::new(),
            page: 1,
            page_size,
            issued: 0,
            loading: false,
        }
    }

    /// Start a fetch, returning the ticket the response must present.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued += 1;
        self.loading = true;
        self.issued
    }

    /// Replace the collection wholesale, unless a newer fetch has been
    /// issued since `ticket`. Returns whether the response was applied.
    pub fn apply(&mut self, ticket: u64, items: Vec<T>) -> bool {
        if ticket != self.issued {
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }

    /// Record a failed fetch. The previously displayed collection stays.
    pub fn fail(&mut self, ticket: u64) {
        if ticket == self.issued {
            self.loading = false;
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Update the filter text; the view snaps back to the first page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// The filtered collection. An empty or whitespace query returns every
    /// item; otherwise `matches` decides per item against the lowercased
    /// query.
    pub fn filtered<F>(&self, matches: F) -> Vec<T>
    where
        F: Fn(&T, &str) -> bool,
    {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|item| matches(item, &query))
            .cloned()
            .collect()
    }

    /// The current page of the filtered collection. The page number is
    /// clamped into range, so a shrinking collection can never leave the
    /// view stranded past the last page.
    pub fn page_view<F>(&self, matches: F) -> PageView<T>
    where
        F: Fn(&T, &str) -> bool,
    {
        let filtered = self.filtered(matches);
        let filtered_len = filtered.len();
        let total_pages = filtered_len.div_ceil(self.page_size).max(1);
        let page = self.page.clamp(1, total_pages);
        let start = (page - 1) * self.page_size;
        let items = filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();
        PageView {
            items,
            page,
            total_pages,
            filtered_len,
        }
    }
}

impl<T: Clone> Default for ResourceList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive substring match for filter predicates. The query side
/// is already lowercased by [`ResourceList::filtered`].
pub fn field_contains(field: &str, query: &str) -> bool {
    field.to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(names: &[&str]) -> ResourceList<String> {
        let mut list = ResourceList::with_page_size(3);
        let ticket = list.begin_fetch();
        list.apply(ticket, names.iter().map(|n| n.to_string()).collect());
        list
    }

    fn by_name(item: &String, query: &str) -> bool {
        field_contains(item, query)
    }

    #[test]
    fn test_empty_query_returns_full_collection() {
        let list = loaded(&["Alice", "Bob", "Carol"]);
        assert_eq!(list.filtered(by_name).len(), 3);

        let mut list = list;
        list.set_query("   ");
        assert_eq!(list.filtered(by_name).len(), 3);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut list = loaded(&["Alice", "Bob", "alfred", "Carol"]);
        list.set_query("AL");
        let hits = list.filtered(by_name);
        assert_eq!(hits, vec!["Alice".to_string(), "alfred".to_string()]);
    }

    #[test]
    fn test_pages_concatenate_to_filtered_collection() {
        let names: Vec<String> = (0..8).map(|i| format!("user-{i}")).collect();
        let mut list = ResourceList::with_page_size(3);
        let ticket = list.begin_fetch();
        list.apply(ticket, names.clone());

        let mut seen = Vec::new();
        let total_pages = list.page_view(by_name).total_pages;
        assert_eq!(total_pages, 3);
        for page in 1..=total_pages {
            list.set_page(page);
            let view = list.page_view(by_name);
            assert!(view.items.len() <= 3);
            seen.extend(view.items);
        }
        assert_eq!(seen, names);
    }

    #[test]
    fn test_empty_collection_still_has_one_page() {
        let list = ResourceList::<String>::new();
        let view = list.page_view(by_name);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_page_clamps_when_collection_shrinks() {
        let mut list = loaded(&["a", "b", "c", "d", "e", "f", "g"]);
        list.set_page(3);
        assert_eq!(list.page_view(by_name).page, 3);

        let ticket = list.begin_fetch();
        list.apply(ticket, vec!["a".to_string(), "b".to_string()]);
        let view = list.page_view(by_name);
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page, 1);
        assert_eq!(view.items.len(), 2);
    }

    #[test]
    fn test_set_query_resets_to_first_page() {
        let mut list = loaded(&["a", "b", "c", "d"]);
        list.set_page(2);
        list.set_query("a");
        assert_eq!(list.page(), 1);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut list = ResourceList::<String>::new();
        let first = list.begin_fetch();
        let second = list.begin_fetch();

        // The older response loses even though it arrives later.
        assert!(list.apply(second, vec!["new".to_string()]));
        assert!(!list.apply(first, vec!["old".to_string()]));
        assert_eq!(list.items(), ["new".to_string()]);
        assert!(!list.is_loading());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_items() {
        let mut list = loaded(&["a", "b"]);
        let ticket = list.begin_fetch();
        assert!(list.is_loading());
        list.fail(ticket);
        assert!(!list.is_loading());
        assert_eq!(list.items().len(), 2);
    }

    #[test]
    fn test_stale_failure_does_not_clear_loading() {
        let mut list = ResourceList::<String>::new();
        let first = list.begin_fetch();
        let second = list.begin_fetch();
        list.fail(first);
        assert!(list.is_loading());
        assert!(list.apply(second, vec![]));
        assert!(!list.is_loading());
    }
}
