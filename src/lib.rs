#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod check;
pub mod config;
pub mod model;
pub mod storage;
pub mod telemetry;
pub mod tui;
