use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{RecordId, RecordKind};
use stockbook_inventory::InventoryItem;
use stockbook_invoicing::Invoice;
use stockbook_returns::ReturnRecord;

/// The activity feed keeps the 20 most recent entries.
pub const ACTIVITY_FEED_LIMIT: usize = 20;

/// The collapsed feed view shows the first 5 of those.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Aggregate counters shown on the dashboard stat tiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_items: usize,
    pub total_stock: u64,
    pub total_stock_sold: u64,
    pub total_returned_stock: u64,
}

/// One row of the recent-activity log, projected from an invoice or return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: RecordId,
    pub kind: RecordKind,
    pub customer_name: String,
    pub date: DateTime<Utc>,
}

/// Compute the dashboard counters from the current collections.
///
/// Only invoices tagged `sale` contribute to `total_stock_sold` and only
/// records tagged `return` contribute to `total_returned_stock`. Sums
/// saturate rather than fail.
pub fn dashboard_metrics(
    inventory: &[InventoryItem],
    invoices: &[Invoice],
    returns: &[ReturnRecord],
) -> DashboardMetrics {
    let total_stock = inventory
        .iter()
        .fold(0u64, |acc, item| acc.saturating_add(item.qty));

    let total_stock_sold = invoices
        .iter()
        .filter(|inv| inv.kind == RecordKind::Sale)
        .flat_map(|inv| inv.items.iter())
        .fold(0u64, |acc, line| acc.saturating_add(line.ordered_qty));

    let total_returned_stock = returns
        .iter()
        .filter(|ret| ret.kind == RecordKind::Return)
        .flat_map(|ret| ret.items.iter())
        .fold(0u64, |acc, line| acc.saturating_add(line.returned_qty));

    DashboardMetrics {
        total_items: inventory.len(),
        total_stock,
        total_stock_sold,
        total_returned_stock,
    }
}

/// Merge invoices and returns into one date-descending activity log.
///
/// The sort is stable, so entries with equal dates keep merge order
/// (invoices before returns, each in collection order). The result is capped
/// at [`ACTIVITY_FEED_LIMIT`] entries.
pub fn activity_feed(invoices: &[Invoice], returns: &[ReturnRecord]) -> Vec<ActivityEntry> {
    let mut feed: Vec<ActivityEntry> = invoices
        .iter()
        .map(|inv| ActivityEntry {
            id: inv.id,
            kind: inv.kind,
            customer_name: inv.customer_name.clone(),
            date: inv.date,
        })
        .chain(returns.iter().map(|ret| ActivityEntry {
            id: ret.id,
            kind: ret.kind,
            customer_name: ret.customer_name.clone(),
            date: ret.date,
        }))
        .collect();

    feed.sort_by(|a, b| b.date.cmp(&a.date));
    feed.truncate(ACTIVITY_FEED_LIMIT);
    feed
}

/// The collapsed view: the first [`RECENT_ACTIVITY_LIMIT`] feed entries.
pub fn recent_activity(feed: &[ActivityEntry]) -> &[ActivityEntry] {
    &feed[..feed.len().min(RECENT_ACTIVITY_LIMIT)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stockbook_invoicing::InvoiceLine;
    use stockbook_returns::ReturnLine;

    fn date(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn item(qty: u64) -> InventoryItem {
        InventoryItem::new(RecordId::new(), "Widget", qty).unwrap()
    }

    fn sale(customer: &str, at: DateTime<Utc>, quantities: &[u64]) -> Invoice {
        let items = quantities
            .iter()
            .map(|&q| InvoiceLine {
                product_ref: RecordId::new(),
                ordered_qty: q,
            })
            .collect();
        Invoice::sale(RecordId::new(), customer, at, items).unwrap()
    }

    fn ret(customer: &str, at: DateTime<Utc>, quantities: &[u64]) -> ReturnRecord {
        let items = quantities
            .iter()
            .map(|&q| ReturnLine {
                product_ref: RecordId::new(),
                returned_qty: q,
            })
            .collect();
        ReturnRecord::new(RecordId::new(), customer, at, items).unwrap()
    }

    #[test]
    fn empty_collections_yield_zero_metrics_and_empty_feed() {
        let m = dashboard_metrics(&[], &[], &[]);
        assert_eq!(m, DashboardMetrics::default());
        assert!(activity_feed(&[], &[]).is_empty());
    }

    #[test]
    fn totals_sum_inventory() {
        let inventory = vec![item(10), item(5), item(0)];
        let m = dashboard_metrics(&inventory, &[], &[]);
        assert_eq!(m.total_items, 3);
        assert_eq!(m.total_stock, 15);
    }

    #[test]
    fn sold_counts_only_sale_invoices() {
        let mut other = sale("Acme", date(10), &[4]);
        other.kind = RecordKind::Return; // mistagged record must not count
        let invoices = vec![sale("Acme", date(20), &[3, 2]), other];
        let m = dashboard_metrics(&[], &invoices, &[]);
        assert_eq!(m.total_stock_sold, 5);
    }

    #[test]
    fn returned_counts_only_return_records() {
        let mut other = ret("Acme", date(10), &[7]);
        other.kind = RecordKind::Sale;
        let returns = vec![ret("Acme", date(20), &[2]), other];
        let m = dashboard_metrics(&[], &[], &returns);
        assert_eq!(m.total_returned_stock, 2);
    }

    #[test]
    fn feed_is_date_descending_and_merged() {
        let invoices = vec![sale("A", date(100), &[1]), sale("B", date(300), &[1])];
        let returns = vec![ret("C", date(200), &[1])];
        let feed = activity_feed(&invoices, &returns);
        let customers: Vec<_> = feed.iter().map(|e| e.customer_name.as_str()).collect();
        assert_eq!(customers, ["B", "C", "A"]);
    }

    #[test]
    fn feed_ties_keep_invoices_before_returns() {
        let invoices = vec![sale("inv", date(100), &[1])];
        let returns = vec![ret("ret", date(100), &[1])];
        let feed = activity_feed(&invoices, &returns);
        assert_eq!(feed[0].customer_name, "inv");
        assert_eq!(feed[1].customer_name, "ret");
    }

    #[test]
    fn feed_caps_at_twenty_and_keeps_newest() {
        let invoices: Vec<_> = (0..30).map(|i| sale("A", date(i), &[1])).collect();
        let feed = activity_feed(&invoices, &[]);
        assert_eq!(feed.len(), ACTIVITY_FEED_LIMIT);
        // Newest first: timestamps 29 down to 10.
        assert_eq!(feed[0].date, date(29));
        assert_eq!(feed[19].date, date(10));
    }

    #[test]
    fn recent_view_is_first_five() {
        let invoices: Vec<_> = (0..8).map(|i| sale("A", date(i), &[1])).collect();
        let feed = activity_feed(&invoices, &[]);
        let recent = recent_activity(&feed);
        assert_eq!(recent.len(), RECENT_ACTIVITY_LIMIT);
        assert_eq!(recent, &feed[..5]);
    }

    #[test]
    fn recent_view_of_short_feed_is_whole_feed() {
        let invoices = vec![sale("A", date(1), &[1])];
        let feed = activity_feed(&invoices, &[]);
        assert_eq!(recent_activity(&feed).len(), 1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: total_stock is the plain sum of quantities and
            /// total_items the list length, for any inventory.
            #[test]
            fn stock_totals_match_sums(quantities in prop::collection::vec(0u64..10_000, 0..50)) {
                let inventory: Vec<_> = quantities.iter().map(|&q| item(q)).collect();
                let m = dashboard_metrics(&inventory, &[], &[]);
                prop_assert_eq!(m.total_items, quantities.len());
                prop_assert_eq!(m.total_stock, quantities.iter().sum::<u64>());
            }

            /// Property: the feed is the merged union, sorted descending,
            /// and never longer than the cap.
            #[test]
            fn feed_sorted_and_capped(
                invoice_dates in prop::collection::vec(0i64..1_000_000, 0..30),
                return_dates in prop::collection::vec(0i64..1_000_000, 0..30),
            ) {
                let invoices: Vec<_> = invoice_dates.iter().map(|&d| sale("A", date(d), &[1])).collect();
                let returns: Vec<_> = return_dates.iter().map(|&d| ret("B", date(d), &[1])).collect();
                let feed = activity_feed(&invoices, &returns);

                prop_assert!(feed.len() <= ACTIVITY_FEED_LIMIT);
                prop_assert!(feed.windows(2).all(|w| w[0].date >= w[1].date));

                let expected = (invoice_dates.len() + return_dates.len()).min(ACTIVITY_FEED_LIMIT);
                prop_assert_eq!(feed.len(), expected);
            }

            /// Property: sold/returned totals are the sums over line items,
            /// regardless of how lines are split across records.
            #[test]
            fn sold_and_returned_sum_line_items(
                sold in prop::collection::vec(prop::collection::vec(1u64..100, 1..5), 0..10),
                returned in prop::collection::vec(prop::collection::vec(1u64..100, 1..5), 0..10),
            ) {
                let invoices: Vec<_> = sold.iter().map(|qs| sale("A", date(0), qs)).collect();
                let returns: Vec<_> = returned.iter().map(|qs| ret("B", date(0), qs)).collect();
                let m = dashboard_metrics(&[], &invoices, &returns);
                prop_assert_eq!(m.total_stock_sold, sold.iter().flatten().sum::<u64>());
                prop_assert_eq!(m.total_returned_stock, returned.iter().flatten().sum::<u64>());
            }
        }
    }
}
