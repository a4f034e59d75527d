//! revfilter-cli library
//!
//! This module exports the configuration and command runners of the
//! `revfilter` binary for use in integration tests.

pub mod commands;
pub mod config;
