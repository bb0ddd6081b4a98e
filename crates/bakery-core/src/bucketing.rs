use crate::order::Order;
use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

// ---------------------------------------------------------------------------
// OrderGroup
// ---------------------------------------------------------------------------

/// One storefront section: a title, a human-readable date range, and the
/// orders that fall into it. Groups are derived per render and never
/// persisted.
#[derive(Debug, Clone, Serialize)]
pub struct OrderGroup {
    pub title: String,
    pub subtitle: String,
    pub orders: Vec<Order>,
}

// ---------------------------------------------------------------------------
// Bucketing
// ---------------------------------------------------------------------------

/// Short weekday + month + day, e.g. "Wed, Mar 06".
pub const GROUP_DATE_FORMAT: &str = "%a, %b %d";

fn format_date(date: NaiveDate) -> String {
    date.format(GROUP_DATE_FORMAT).to_string()
}

/// The closest Monday strictly after `today`. When `today` is itself a
/// Monday, the boundary is seven days out, not zero.
pub fn next_monday_after(today: NaiveDate) -> NaiveDate {
    let days_ahead = 7 - u64::from(today.weekday().num_days_from_monday());
    today
        .checked_add_days(Days::new(days_ahead))
        .unwrap_or(NaiveDate::MAX)
}

/// Partition orders into the four storefront sections relative to `today`:
/// Previous (due before today), Today, This week (tomorrow through the day
/// before the next Monday), and Upcoming (the next Monday onward).
///
/// The partition is stable (orders keep the relative order they arrived in)
/// and only non-empty groups are emitted, in that fixed sequence.
pub fn bucket_by_due_date(orders: Vec<Order>, today: NaiveDate) -> Vec<OrderGroup> {
    let tomorrow = today.succ_opt().unwrap_or(NaiveDate::MAX);
    let next_monday = next_monday_after(today);
    let week_end = next_monday.pred_opt().unwrap_or(next_monday);

    let mut previous = Vec::new();
    let mut due_today = Vec::new();
    let mut this_week = Vec::new();
    let mut upcoming = Vec::new();

    for order in orders {
        let due = order.due_date;
        if due < today {
            previous.push(order);
        } else if due < tomorrow {
            due_today.push(order);
        } else if due < next_monday {
            this_week.push(order);
        } else {
            upcoming.push(order);
        }
    }

    let mut groups = Vec::new();
    if !previous.is_empty() {
        groups.push(OrderGroup {
            title: "Previous".to_string(),
            subtitle: "Yesterday and earlier".to_string(),
            orders: previous,
        });
    }
    if !due_today.is_empty() {
        groups.push(OrderGroup {
            title: "Today".to_string(),
            subtitle: format_date(today),
            orders: due_today,
        });
    }
    if !this_week.is_empty() {
        groups.push(OrderGroup {
            title: "This week".to_string(),
            subtitle: format!("{} – {}", format_date(tomorrow), format_date(week_end)),
            orders: this_week,
        });
    }
    if !upcoming.is_empty() {
        groups.push(OrderGroup {
            title: "Upcoming".to_string(),
            subtitle: "After this week".to_string(),
            orders: upcoming,
        });
    }
    groups
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Customer, OrderItem};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order(id: u64, due: NaiveDate) -> Order {
        Order::new(
            id,
            due,
            Customer::new("Ann Smith", "+1 555 010 2233"),
            vec![OrderItem::new("Strawberry Bun", 1)],
        )
    }

    fn titles(groups: &[OrderGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.title.as_str()).collect()
    }

    fn ids(group: &OrderGroup) -> Vec<u64> {
        group.orders.iter().map(|o| o.id).collect()
    }

    #[test]
    fn next_monday_from_each_weekday() {
        // 2024-03-04 is a Monday
        assert_eq!(next_monday_after(date(2024, 3, 4)), date(2024, 3, 11));
        assert_eq!(next_monday_after(date(2024, 3, 5)), date(2024, 3, 11));
        assert_eq!(next_monday_after(date(2024, 3, 6)), date(2024, 3, 11));
        assert_eq!(next_monday_after(date(2024, 3, 9)), date(2024, 3, 11));
        assert_eq!(next_monday_after(date(2024, 3, 10)), date(2024, 3, 11));
    }

    #[test]
    fn midweek_scenario_fills_all_four_groups() {
        // today = Wednesday 2024-03-06
        let today = date(2024, 3, 6);
        let groups = bucket_by_due_date(
            vec![
                order(1, date(2024, 3, 5)),
                order(2, date(2024, 3, 6)),
                order(3, date(2024, 3, 8)),
                order(4, date(2024, 3, 11)),
            ],
            today,
        );

        assert_eq!(titles(&groups), vec!["Previous", "Today", "This week", "Upcoming"]);
        assert_eq!(ids(&groups[0]), vec![1]);
        assert_eq!(ids(&groups[1]), vec![2]);
        assert_eq!(ids(&groups[2]), vec![3]);
        assert_eq!(ids(&groups[3]), vec![4]);
    }

    #[test]
    fn due_today_is_today_never_previous() {
        let today = date(2024, 3, 4); // Monday
        let groups = bucket_by_due_date(vec![order(1, today)], today);
        assert_eq!(titles(&groups), vec!["Today"]);
    }

    #[test]
    fn monday_boundary_goes_to_upcoming() {
        // today is Monday; an order due the following Monday is Upcoming,
        // not This week
        let today = date(2024, 3, 4);
        let groups = bucket_by_due_date(vec![order(1, date(2024, 3, 11))], today);
        assert_eq!(titles(&groups), vec!["Upcoming"]);
    }

    #[test]
    fn day_before_monday_boundary_is_this_week() {
        let today = date(2024, 3, 4);
        let groups = bucket_by_due_date(vec![order(1, date(2024, 3, 10))], today);
        assert_eq!(titles(&groups), vec!["This week"]);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = bucket_by_due_date(Vec::new(), date(2024, 3, 6));
        assert!(groups.is_empty());
    }

    #[test]
    fn empty_groups_are_not_emitted() {
        let today = date(2024, 3, 6);
        let groups = bucket_by_due_date(vec![order(1, date(2024, 3, 20))], today);
        assert_eq!(titles(&groups), vec!["Upcoming"]);
    }

    #[test]
    fn partition_is_stable_within_groups() {
        let today = date(2024, 3, 6);
        let groups = bucket_by_due_date(
            vec![
                order(10, date(2024, 3, 8)),
                order(5, date(2024, 3, 7)),
                order(7, date(2024, 3, 9)),
            ],
            today,
        );
        assert_eq!(titles(&groups), vec!["This week"]);
        assert_eq!(ids(&groups[0]), vec![10, 5, 7], "input order preserved");
    }

    #[test]
    fn subtitles_are_deterministic() {
        let today = date(2024, 3, 6);
        let groups = bucket_by_due_date(
            vec![order(1, date(2024, 3, 6)), order(2, date(2024, 3, 8))],
            today,
        );
        assert_eq!(groups[0].subtitle, "Wed, Mar 06");
        assert_eq!(groups[1].subtitle, "Thu, Mar 07 – Sun, Mar 10");
    }

    #[test]
    fn fixed_subtitles_for_open_ended_groups() {
        let today = date(2024, 3, 6);
        let groups = bucket_by_due_date(
            vec![order(1, date(2024, 3, 1)), order(2, date(2024, 4, 1))],
            today,
        );
        assert_eq!(groups[0].subtitle, "Yesterday and earlier");
        assert_eq!(groups[1].subtitle, "After this week");
    }
}
