//! Derived dashboard state.
//!
//! Pure, deterministic functions over the three in-memory collections. The
//! engine never fails: absent optional fields count as zero and empty
//! collections produce all-zero metrics and an empty feed.

pub mod dashboard;

pub use dashboard::{
    ACTIVITY_FEED_LIMIT, ActivityEntry, DashboardMetrics, RECENT_ACTIVITY_LIMIT, activity_feed,
    dashboard_metrics, recent_activity,
};
