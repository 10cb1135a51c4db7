//! Dashboard UI components

pub mod footer;
pub mod header;
pub mod logs;
pub mod my_courses;
pub mod recent_activity;
pub mod site_feeds;
pub mod stats;
