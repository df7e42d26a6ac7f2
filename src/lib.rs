//! Yad2 rental feed watcher.
//!
//! Polls a Yad2 search API URL once per invocation, diffs the returned
//! listings against a persisted set of previously seen ids, and sends a
//! Telegram notification for anything new.

pub mod cli;
pub mod config;
pub mod crawler;
pub mod diff;
pub mod notifier;
pub mod service;
pub mod storage;
