// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # colette-cmdr
//!
//! The `colette` command line tool, a thin shell around the [`colette`] crate.
//!
//! ```text
//! colette to256 "#ff8000"          # 208
//! colette to16 21                  # 12
//! colette to-rgb 120               # #87ff87
//! colette join 200 200 200         # 0xc8c8c8
//! colette split 0xc8c8c8           # 200 200 200
//! colette degrade 255,0,0 -d ansi16
//! colette palette --format json
//! ```
//!
//! Logging is off by default. Pass `--enable-logging` to write a log file (see
//! `--log-file` and `--log-level`).

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod app;
pub mod clap_config;
pub mod common;
pub mod log;
pub mod palette_report;

// Re-export.
pub use app::*;
pub use clap_config::*;
pub use common::*;
pub use log::*;
pub use palette_report::*;
