//! metricdash: a terminal dashboard that polls a remote metrics API for one
//! host and shows the latest sample as a bar chart and a detail table.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod logging;
pub mod poller;
pub mod state;
pub mod types;
pub mod ui;
