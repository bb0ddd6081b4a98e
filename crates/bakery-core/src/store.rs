use crate::error::{BakeryError, Result};
use crate::io;
use crate::order::{Customer, Order, OrderItem};
use crate::page::{PageRequest, SortOrder};
use crate::paths;
use crate::types::{SortDirection, SortField};
use crate::validate::validate_order;
use chrono::{NaiveDate, Utc};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// OrderStore
// ---------------------------------------------------------------------------

/// Read side of the order data-access collaborator.
///
/// `text` absent or empty matches every order; otherwise it is a
/// case-insensitive substring match (see [`Order::matches`]). `due_after`
/// absent includes all orders regardless of date; when present, only orders
/// due strictly after that date are eligible. `sort` is applied in the given
/// key sequence; ties keep insertion order (the sort is stable). `page`
/// absent returns the full match list.
///
/// Store errors propagate unmodified: no retry, no translation.
pub trait OrderStore: Send + Sync {
    fn find_matching(
        &self,
        text: Option<&str>,
        due_after: Option<NaiveDate>,
        sort: &[SortOrder],
        page: Option<&PageRequest>,
    ) -> Result<Vec<Order>>;

    fn count_matching(&self, text: Option<&str>, due_after: Option<NaiveDate>) -> Result<u64>;

    fn load(&self, id: u64) -> Result<Order>;
}

// ---------------------------------------------------------------------------
// Matching, sorting, and paging helpers
// ---------------------------------------------------------------------------

fn is_eligible(order: &Order, text: Option<&str>, due_after: Option<NaiveDate>) -> bool {
    let after_cutoff = due_after.is_none_or(|cutoff| order.due_date > cutoff);
    let text_match = text.is_none_or(|needle| order.matches(needle));
    after_cutoff && text_match
}

fn compare(a: &Order, b: &Order, sort: &[SortOrder]) -> Ordering {
    for order in sort {
        let by_key = match order.field {
            SortField::DueDate => a.due_date.cmp(&b.due_date),
            SortField::Id => a.id.cmp(&b.id),
            SortField::Customer => a
                .customer
                .full_name
                .to_lowercase()
                .cmp(&b.customer.full_name.to_lowercase()),
            SortField::State => a.state.as_str().cmp(b.state.as_str()),
        };
        let directed = match order.direction {
            SortDirection::Asc => by_key,
            SortDirection::Desc => by_key.reverse(),
        };
        if directed != Ordering::Equal {
            return directed;
        }
    }
    Ordering::Equal
}

fn select(
    mut orders: Vec<Order>,
    sort: &[SortOrder],
    page: Option<&PageRequest>,
) -> Vec<Order> {
    // sort_by is stable, so equal keys keep their relative order
    orders.sort_by(|a, b| compare(a, b, sort));
    match page {
        None => orders,
        Some(req) => orders
            .into_iter()
            .skip(req.offset())
            .take(req.size)
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// FileOrderStore
// ---------------------------------------------------------------------------

/// Orders persisted as one YAML file per order under `.bakery/orders/`.
/// Reads are plain directory scans; writes are atomic. This is the store the
/// CLI and HTTP server run against.
#[derive(Debug, Clone)]
pub struct FileOrderStore {
    root: PathBuf,
}

impl FileOrderStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn list_all(&self) -> Result<Vec<Order>> {
        let dir = paths::orders_dir(&self.root);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut orders = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                orders.push(io::read_yaml(&path)?);
            }
        }
        // Directory iteration order is not defined; normalize by id
        orders.sort_by_key(|o: &Order| o.id);
        Ok(orders)
    }

    fn next_id(&self) -> Result<u64> {
        let max = self.list_all()?.iter().map(|o| o.id).max().unwrap_or(0);
        Ok(max + 1)
    }

    pub fn save(&self, order: &Order) -> Result<()> {
        io::write_yaml(&paths::order_file(&self.root, order.id), order)
    }

    /// Validate and persist a new order, allocating the next free id.
    pub fn create(
        &self,
        due_date: NaiveDate,
        customer: Customer,
        items: Vec<OrderItem>,
    ) -> Result<Order> {
        let order = Order::new(self.next_id()?, due_date, customer, items);
        validate_order(&order)?;
        self.save(&order)?;
        Ok(order)
    }

    /// Validate and persist changes to an existing order.
    pub fn update(&self, mut order: Order) -> Result<Order> {
        validate_order(&order)?;
        // Reject updates to orders that were never created
        self.load(order.id)?;
        order.updated_at = Utc::now();
        self.save(&order)?;
        Ok(order)
    }
}

impl OrderStore for FileOrderStore {
    fn find_matching(
        &self,
        text: Option<&str>,
        due_after: Option<NaiveDate>,
        sort: &[SortOrder],
        page: Option<&PageRequest>,
    ) -> Result<Vec<Order>> {
        let mut orders = self.list_all()?;
        orders.retain(|o| is_eligible(o, text, due_after));
        Ok(select(orders, sort, page))
    }

    fn count_matching(&self, text: Option<&str>, due_after: Option<NaiveDate>) -> Result<u64> {
        let orders = self.list_all()?;
        Ok(orders
            .iter()
            .filter(|o| is_eligible(o, text, due_after))
            .count() as u64)
    }

    fn load(&self, id: u64) -> Result<Order> {
        let path = paths::order_file(&self.root, id);
        if !path.exists() {
            return Err(BakeryError::OrderNotFound(id));
        }
        io::read_yaml(&path)
    }
}

// ---------------------------------------------------------------------------
// MemoryOrderStore
// ---------------------------------------------------------------------------

/// In-memory store for tests and embedders that bring their own persistence.
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    orders: Vec<Order>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn insert(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl OrderStore for MemoryOrderStore {
    fn find_matching(
        &self,
        text: Option<&str>,
        due_after: Option<NaiveDate>,
        sort: &[SortOrder],
        page: Option<&PageRequest>,
    ) -> Result<Vec<Order>> {
        let orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| is_eligible(o, text, due_after))
            .cloned()
            .collect();
        Ok(select(orders, sort, page))
    }

    fn count_matching(&self, text: Option<&str>, due_after: Option<NaiveDate>) -> Result<u64> {
        Ok(self
            .orders
            .iter()
            .filter(|o| is_eligible(o, text, due_after))
            .count() as u64)
    }

    fn load(&self, id: u64) -> Result<Order> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(BakeryError::OrderNotFound(id))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(id: u64, name: &str, due: NaiveDate) -> Order {
        Order::new(
            id,
            due,
            Customer::new(name, "+1 555 010 2233"),
            vec![OrderItem::new("Strawberry Bun", 1)],
        )
    }

    fn memory_store() -> MemoryOrderStore {
        MemoryOrderStore::with_orders(vec![
            order(1, "Ann Smith", date(2024, 3, 5)),
            order(2, "Bob Jones", date(2024, 3, 6)),
            order(3, "Carla Diaz", date(2024, 3, 8)),
            order(4, "Dave Smith", date(2024, 3, 6)),
        ])
    }

    const NO_SORT: &[SortOrder] = &[];

    #[test]
    fn find_without_constraints_returns_all() {
        let store = memory_store();
        let found = store.find_matching(None, None, NO_SORT, None).unwrap();
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn due_after_is_strictly_after() {
        let store = memory_store();
        let found = store
            .find_matching(None, Some(date(2024, 3, 5)), NO_SORT, None)
            .unwrap();
        let ids: Vec<u64> = found.iter().map(|o| o.id).collect();
        // The order due on the cutoff date itself is excluded
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn text_filter_matches_subset() {
        let store = memory_store();
        let found = store
            .find_matching(Some("smith"), None, NO_SORT, None)
            .unwrap();
        let ids: Vec<u64> = found.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn count_equals_unpaged_find_len() {
        let store = memory_store();
        for (text, cutoff) in [
            (None, None),
            (Some("smith"), None),
            (None, Some(date(2024, 3, 5))),
            (Some("ann"), Some(date(2024, 3, 7))),
        ] {
            let found = store.find_matching(text, cutoff, NO_SORT, None).unwrap();
            let count = store.count_matching(text, cutoff).unwrap();
            assert_eq!(count as usize, found.len());
        }
    }

    #[test]
    fn sort_by_due_date_then_id_is_deterministic() {
        let store = memory_store();
        let sort = [SortOrder::asc(SortField::DueDate), SortOrder::asc(SortField::Id)];
        let first = store.find_matching(None, None, &sort, None).unwrap();
        let second = store.find_matching(None, None, &sort, None).unwrap();
        let ids: Vec<u64> = first.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 3]);
        assert_eq!(
            ids,
            second.iter().map(|o| o.id).collect::<Vec<_>>(),
            "same inputs must produce the same order"
        );
    }

    #[test]
    fn sort_descending_reverses() {
        let store = memory_store();
        let sort = [SortOrder::desc(SortField::Id)];
        let found = store.find_matching(None, None, &sort, None).unwrap();
        let ids: Vec<u64> = found.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn paging_window() {
        let store = memory_store();
        let sort = [SortOrder::asc(SortField::Id)];
        let req = PageRequest::new(1, 2);
        let found = store
            .find_matching(None, None, &sort, Some(&req))
            .unwrap();
        let ids: Vec<u64> = found.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn paging_past_the_end_is_empty() {
        let store = memory_store();
        let req = PageRequest::new(9, 10);
        let found = store
            .find_matching(None, None, NO_SORT, Some(&req))
            .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn memory_load_by_id() {
        let store = memory_store();
        assert_eq!(store.load(2).unwrap().customer.full_name, "Bob Jones");
        assert!(matches!(
            store.load(99),
            Err(BakeryError::OrderNotFound(99))
        ));
    }

    // -----------------------------------------------------------------------
    // FileOrderStore
    // -----------------------------------------------------------------------

    #[test]
    fn file_store_create_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path());

        let created = store
            .create(
                date(2024, 3, 6),
                Customer::new("Ann Smith", "+1 555 010 2233"),
                vec![OrderItem::new("Strawberry Bun", 2)],
            )
            .unwrap();
        assert_eq!(created.id, 1);

        let loaded = store.load(1).unwrap();
        assert_eq!(loaded.customer.full_name, "Ann Smith");
        assert_eq!(loaded.due_date, date(2024, 3, 6));
    }

    #[test]
    fn file_store_allocates_increasing_ids() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path());

        for i in 1..=3 {
            let created = store
                .create(
                    date(2024, 3, 6),
                    Customer::new("Ann", "+1 555 010 2233"),
                    vec![OrderItem::new("Bun", 1)],
                )
                .unwrap();
            assert_eq!(created.id, i);
        }
    }

    #[test]
    fn file_store_create_rejects_invalid() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path());

        let result = store.create(date(2024, 3, 6), Customer::new("", ""), vec![]);
        assert!(matches!(result, Err(BakeryError::Validation(_))));
        // Nothing was written
        assert_eq!(store.count_matching(None, None).unwrap(), 0);
    }

    #[test]
    fn file_store_update_unknown_order_fails() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path());

        let ghost = order(42, "Ghost", date(2024, 3, 6));
        assert!(matches!(
            store.update(ghost),
            Err(BakeryError::OrderNotFound(42))
        ));
    }

    #[test]
    fn file_store_update_persists_changes() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path());

        let mut created = store
            .create(
                date(2024, 3, 6),
                Customer::new("Ann", "+1 555 010 2233"),
                vec![OrderItem::new("Bun", 1)],
            )
            .unwrap();
        created.set_due_date(date(2024, 3, 8));
        store.update(created).unwrap();

        assert_eq!(store.load(1).unwrap().due_date, date(2024, 3, 8));
    }

    #[test]
    fn file_store_empty_root_finds_nothing() {
        let dir = TempDir::new().unwrap();
        let store = FileOrderStore::new(dir.path());
        assert!(store.find_matching(None, None, NO_SORT, None).unwrap().is_empty());
        assert_eq!(store.count_matching(None, None).unwrap(), 0);
    }
}
