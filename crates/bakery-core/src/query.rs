use crate::error::Result;
use crate::filter::OrderFilter;
use crate::order::Order;
use crate::page::{Page, PageRequest, SortOrder};
use crate::store::OrderStore;
use crate::types::SortField;
use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// OrderQueryService
// ---------------------------------------------------------------------------

/// Adapter between a UI filter event and the order store: computes the
/// "show previous" date cutoff, applies the default sort when the caller has
/// no explicit one, and shapes results as a full list or a [`Page`].
///
/// The store is an injected dependency; the service holds no other state and
/// performs no caching, so every call reflects the store at that moment.
pub struct OrderQueryService<S> {
    store: S,
    default_sort: Vec<SortOrder>,
    page_observer: Option<Box<dyn Fn(&Page<Order>) + Send + Sync>>,
}

impl<S: OrderStore> OrderQueryService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            // Due date first, then id so ties break deterministically
            default_sort: vec![
                SortOrder::asc(SortField::DueDate),
                SortOrder::asc(SortField::Id),
            ],
            page_observer: None,
        }
    }

    pub fn with_default_sort(mut self, sort: Vec<SortOrder>) -> Self {
        self.default_sort = sort;
        self
    }

    /// Register a callback invoked with every fetched page. This is a
    /// non-authoritative notification for UI state such as "no results"
    /// messaging, not part of the data contract.
    pub fn set_page_observer(&mut self, observer: impl Fn(&Page<Order>) + Send + Sync + 'static) {
        self.page_observer = Some(Box::new(observer));
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The due-date cutoff for a filter: none when past orders are requested,
    /// otherwise yesterday. The store's strictly-after comparison then drops
    /// exactly the orders due before today.
    pub fn cutoff(show_previous: bool, today: NaiveDate) -> Option<NaiveDate> {
        if show_previous {
            None
        } else {
            today.pred_opt()
        }
    }

    fn resolve_sort<'a>(&'a self, sort: &'a [SortOrder]) -> &'a [SortOrder] {
        if sort.is_empty() {
            &self.default_sort
        } else {
            sort
        }
    }

    /// Fetch one page of matching orders plus the total match count.
    /// An empty `sort` means the default sort.
    pub fn fetch_page(
        &self,
        filter: &OrderFilter,
        today: NaiveDate,
        req: &PageRequest,
        sort: &[SortOrder],
    ) -> Result<Page<Order>> {
        let due_after = Self::cutoff(filter.show_previous(), today);
        let items =
            self.store
                .find_matching(filter.text(), due_after, self.resolve_sort(sort), Some(req))?;
        let total = self.store.count_matching(filter.text(), due_after)?;
        let page = Page {
            items,
            total,
            page: req.page,
            size: req.size,
        };
        if let Some(observer) = &self.page_observer {
            observer(&page);
        }
        Ok(page)
    }

    /// Fetch all matching orders in default sort order, for the bucketed
    /// storefront view.
    pub fn fetch_all(&self, filter: &OrderFilter, today: NaiveDate) -> Result<Vec<Order>> {
        let due_after = Self::cutoff(filter.show_previous(), today);
        self.store
            .find_matching(filter.text(), due_after, &self.default_sort, None)
    }

    pub fn count(&self, filter: &OrderFilter, today: NaiveDate) -> Result<u64> {
        let due_after = Self::cutoff(filter.show_previous(), today);
        self.store.count_matching(filter.text(), due_after)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
