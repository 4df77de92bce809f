//! Locsheet - `.strings` <-> `.xlsx` translation sheets
//!
//! Locsheet is a CLI tool and library that moves localization strings between
//! Apple-style `.strings` files and spreadsheets handed to translators. Each
//! language lives on its own sheet with a key column and a value column.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (`init`, `patch`, `restore`)
//! - `config`: Configuration file loading and parsing
//! - `lang`: Supported language codes and sheet header labels
//! - `logging`: Diagnostic `tracing` output
//! - `merge`: Applying a patch table to an existing table
//! - `record`: Records and translation tables
//! - `source`: Patch source detection by file suffix
//! - `strings`: `.strings` reader and writer
//! - `workbook`: `.xlsx` sheet reader and writer
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod lang;
pub mod logging;
pub mod merge;
pub mod record;
pub mod source;
pub mod strings;
pub mod utils;
pub mod workbook;
