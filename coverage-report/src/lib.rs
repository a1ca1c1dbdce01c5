//! Route coverage reporting.
//!
//! Answers "how much of each highway system, region and county has this
//! traveler documented?" by matching travel logs against canonical route
//! inventories, then ranks and colors the results into static HTML and
//! JSON reports with a cross-traveler leaderboard.

pub mod config;
pub mod coverage;
pub mod domain;
pub mod inventory;
pub mod leaderboard;
pub mod ranking;
pub mod report;
pub mod travel_log;
