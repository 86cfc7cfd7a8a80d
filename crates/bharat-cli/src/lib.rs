//! bharat-cli
//! ==========
//!
//! Command-line interface for the `bharat-core` location flattener.
//!
//! This crate primarily provides a binary (`bharat`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install bharat-cli
//! bharat build -i public/india_locations.json -o public/api
//! bharat search bandra
//! ```
//!
//! Configuration is read from `bharat.toml` and `BHARAT_*` environment
//! variables; command-line flags take precedence. For programmatic access
//! use the [`bharat-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
