//! Household tax, mortgage, and net-worth projection engine behind a small
//! HTTP API.

pub mod api;
pub mod core;
