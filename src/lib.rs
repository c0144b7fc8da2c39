//! NWIS data compilation tools for RKRM analysis.
//!
//! The [`datasets`] module exposes bundled reference data through a caching
//! [`datasets::DataLoader`]. The [`cli`] module holds the `nwis` command tree
//! and its handlers.

pub mod cli;
pub mod datasets;
