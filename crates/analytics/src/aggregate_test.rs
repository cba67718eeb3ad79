//! Tests for dashboard metric aggregation

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use stockdeck_catalog::ProductSnapshot;

use crate::aggregate::{DashboardMetrics, StockBreakdown};
use crate::weekly::WEEKS_TRACKED;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
}

fn product(name: &str, price: Decimal, quantity: u32) -> ProductSnapshot {
    ProductSnapshot::new(name, price, quantity, now())
}

#[test]
fn test_empty_collection_yields_zeroed_metrics() {
    let metrics = DashboardMetrics::from_products(&[], now());

    assert!(metrics.is_empty());
    assert_eq!(metrics.total_products, 0);
    assert_eq!(metrics.total_value, dec!(0));
    assert_eq!(metrics.stock.out_of_stock_percent, 0);
    assert_eq!(metrics.stock.low_stock_percent, 0);
    assert_eq!(metrics.stock.in_stock_percent, 0);
    assert_eq!(metrics.weekly.len(), WEEKS_TRACKED);
    assert!(metrics.weekly.iter().all(|b| b.count == 0));
    assert_eq!(metrics.weekly[0].label, "03/30");
}

#[test]
fn test_total_value_is_exact_decimal() {
    // Ten-cent items must sum without binary float drift
    let products = vec![product("Washer", dec!(0.10), 3)];
    let metrics = DashboardMetrics::from_products(&products, now());

    assert_eq!(metrics.total_value, dec!(0.30));
}

#[test]
fn test_total_value_sums_line_values() {
    let products = vec![
        product("Desk", dec!(149.50), 2),
        product("Lamp", dec!(24.90), 3),
    ];
    let metrics = DashboardMetrics::from_products(&products, now());

    assert_eq!(metrics.total_value, dec!(373.70));
    assert_eq!(metrics.rounded_total_value(), dec!(374));
}

#[test]
fn test_rounded_total_value_rounds_half_away_from_zero() {
    let products = vec![product("Washer", dec!(0.50), 1)];
    let metrics = DashboardMetrics::from_products(&products, now());

    assert_eq!(metrics.rounded_total_value(), dec!(1));
}

#[test]
fn test_negative_price_flows_through() {
    // Degenerate input stays a defined output, never a panic
    let products = vec![product("Refund line", dec!(-4.50), 2)];
    let metrics = DashboardMetrics::from_products(&products, now());

    assert_eq!(metrics.total_value, dec!(-9.00));
}

#[test]
fn test_total_value_saturates_at_the_decimal_ceiling() {
    // Prices at the numeric ceiling must degrade to a saturated total,
    // not abort the aggregation: the first product overflows the line
    // multiply, the second overflows the running sum.
    let products = vec![
        product("Bullion", Decimal::MAX, 2),
        product("Reserve", Decimal::MAX, 1),
    ];
    let metrics = DashboardMetrics::from_products(&products, now());

    assert_eq!(metrics.total_value, Decimal::MAX);
    assert_eq!(metrics.rounded_total_value(), Decimal::MAX);
}

#[test]
fn test_stock_breakdown_counts() {
    let products = vec![
        product("Gone", dec!(1.00), 0),
        product("Low", dec!(1.00), 5),
        product("Fine", dec!(1.00), 6),
    ];
    let metrics = DashboardMetrics::from_products(&products, now());

    assert_eq!(metrics.stock.out_of_stock, 1);
    assert_eq!(metrics.stock.low_stock, 1);
    assert_eq!(metrics.stock.in_stock, 1);
    assert_eq!(metrics.stock.total(), metrics.total_products);
}

#[test]
fn test_percentages_round_half_up() {
    // 1/8 is 12.5%, which rounds up to 13
    let breakdown = StockBreakdown::from_counts(1, 3, 4);

    assert_eq!(breakdown.out_of_stock_percent, 13);
    assert_eq!(breakdown.low_stock_percent, 38);
    assert_eq!(breakdown.in_stock_percent, 50);
}

#[test]
fn test_percentages_are_rounded_independently() {
    // Each level rounds on its own, so the displayed percentages can
    // overshoot 100 in aggregate.
    let breakdown = StockBreakdown::from_counts(1, 3, 4);
    let sum = breakdown.out_of_stock_percent
        + breakdown.low_stock_percent
        + breakdown.in_stock_percent;

    assert_eq!(sum, 101);
}

#[test]
fn test_aggregation_is_deterministic() {
    let products = vec![
        product("Desk", dec!(149.50), 2),
        product("Lamp", dec!(24.90), 0),
    ];

    let first = DashboardMetrics::from_products(&products, now());
    let second = DashboardMetrics::from_products(&products, now());

    assert_eq!(first, second);
}

#[test]
fn test_metrics_serialize_to_json() {
    let products = vec![product("Desk", dec!(10.00), 2)];
    let metrics = DashboardMetrics::from_products(&products, now());

    let json = serde_json::to_string(&metrics).unwrap();
    let parsed: DashboardMetrics = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, metrics);
}

proptest! {
    #[test]
    fn prop_level_counts_partition_the_collection(
        quantities in proptest::collection::vec(any::<u32>(), 0..50),
    ) {
        let products: Vec<ProductSnapshot> = quantities
            .iter()
            .map(|&q| product("Widget", dec!(1.00), q))
            .collect();

        let metrics = DashboardMetrics::from_products(&products, now());

        prop_assert_eq!(metrics.stock.total(), metrics.total_products);
        prop_assert!(metrics.stock.out_of_stock_percent <= 100);
        prop_assert!(metrics.stock.low_stock_percent <= 100);
        prop_assert!(metrics.stock.in_stock_percent <= 100);
    }
}
