use crate::order::{Customer, Order, OrderItem};
use crate::types::OrderState;
use chrono::{Days, NaiveDate};

/// Deterministic demo orders spread around `today`: two in the past, two due
/// today, two later this calendar week, two further out. Which storefront
/// bucket the mid-range ones land in depends on the weekday of `today`.
pub fn sample_orders(today: NaiveDate) -> Vec<Order> {
    let day = |offset: i64| {
        let days = Days::new(offset.unsigned_abs());
        let shifted = if offset < 0 {
            today.checked_sub_days(days)
        } else {
            today.checked_add_days(days)
        };
        shifted.unwrap_or(today)
    };

    let mut orders = vec![
        Order::new(
            1,
            day(-3),
            Customer::new("Ann Smith", "+1 555 010 1111").with_details("birthday candles"),
            vec![
                OrderItem::new("Blueberry Cheese Cake", 1),
                OrderItem::new("Vanilla Cracker", 12),
            ],
        ),
        Order::new(
            2,
            day(-1),
            Customer::new("Bob Jones", "+1 555 010 2222"),
            vec![OrderItem::new("Strawberry Bun", 6)],
        ),
        Order::new(
            3,
            day(0),
            Customer::new("Carla Diaz", "+1 555 010 3333"),
            vec![OrderItem::new("Almond Croissant", 4)],
        ),
        Order::new(
            4,
            day(0),
            Customer::new("Dave Novak", "+1 555 010 4444").with_details("pickup at noon"),
            vec![
                OrderItem::new("Rye Bread", 2),
                OrderItem::new("Strawberry Bun", 3),
            ],
        ),
        Order::new(
            5,
            day(1),
            Customer::new("Erin Walsh", "+1 555 010 5555"),
            vec![OrderItem::new("Bacon Tart", 2)],
        ),
        Order::new(
            6,
            day(2),
            Customer::new("Farid Khan", "+1 555 010 6666"),
            vec![OrderItem::new("Vanilla Cracker", 24)],
        ),
        Order::new(
            7,
            day(7),
            Customer::new("Grace Liu", "+1 555 010 7777").with_details("wedding order"),
            vec![OrderItem::new("Blueberry Cheese Cake", 3)],
        ),
        Order::new(
            8,
            day(10),
            Customer::new("Hugo Mariani", "+1 555 010 8888"),
            vec![OrderItem::new("Almond Croissant", 10)],
        ),
    ];

    // Past orders are done, the rest still in flight
    orders[0].set_state(OrderState::Delivered);
    orders[1].set_state(OrderState::Delivered);
    orders[2].set_state(OrderState::Ready);
    orders[3].set_state(OrderState::Confirmed);

    orders
}
