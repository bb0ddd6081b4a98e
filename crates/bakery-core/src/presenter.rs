use crate::bucketing::{bucket_by_due_date, OrderGroup};
use crate::error::Result;
use crate::filter::{FilterChanged, OrderFilter};
use crate::order::Order;
use crate::page::{Page, PageRequest, SortOrder};
use crate::paths;
use crate::query::OrderQueryService;
use crate::store::OrderStore;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicU64, Ordering};

// ---------------------------------------------------------------------------
// Storefront
// ---------------------------------------------------------------------------

/// Identity of one issued fetch, used to discard stale results.
pub type RequestId = u64;

/// UI-agnostic presentation adapter for the storefront. Any rendering
/// technology drives it through three capabilities, `on_filter_changed`
/// (bucketed list), `on_page_requested` (paged grid), and
/// `on_order_selected`, and receives plain values back.
///
/// Hosts that can interleave fetches compare the returned [`RequestId`]
/// against [`Storefront::is_current`] and drop results that a newer request
/// has superseded. Hosts that serialize UI events never observe staleness.
pub struct Storefront<S> {
    query: OrderQueryService<S>,
    seq: AtomicU64,
}

impl<S: OrderStore> Storefront<S> {
    pub fn new(query: OrderQueryService<S>) -> Self {
        Self {
            query,
            seq: AtomicU64::new(0),
        }
    }

    pub fn query(&self) -> &OrderQueryService<S> {
        &self.query
    }

    fn begin(&self) -> RequestId {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True while no newer request has been issued.
    pub fn is_current(&self, request: RequestId) -> bool {
        self.seq.load(Ordering::SeqCst) == request
    }

    /// Fetch all matching orders and bucket them into storefront sections.
    pub fn on_filter_changed(
        &self,
        event: &FilterChanged,
        today: NaiveDate,
    ) -> Result<(RequestId, Vec<OrderGroup>)> {
        let request = self.begin();
        let filter = OrderFilter::from(event);
        let orders = self.query.fetch_all(&filter, today)?;
        Ok((request, bucket_by_due_date(orders, today)))
    }

    /// Fetch one page of matching orders for the grid. An empty `sort` means
    /// the query service's default sort.
    pub fn on_page_requested(
        &self,
        event: &FilterChanged,
        today: NaiveDate,
        req: &PageRequest,
        sort: &[SortOrder],
    ) -> Result<(RequestId, Page<Order>)> {
        let request = self.begin();
        let filter = OrderFilter::from(event);
        let page = self.query.fetch_page(&filter, today, req, sort)?;
        Ok((request, page))
    }

    /// Interpret a raw order id from a navigation event. Malformed input
    /// means "no order selected", never an error.
    pub fn on_order_selected(&self, raw: &str) -> Option<u64> {
        paths::parse_order_id(raw).ok()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
