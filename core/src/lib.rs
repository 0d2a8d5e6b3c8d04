//! UMAP Explorer core
//!
//! Tracks which category/keyword tags a user has switched on and
//! partitions every point of a two-dimensional embedding into exactly one
//! display group, together with the legend that colors those groups.
//!
//! Data flows one way: a [`Dataset`] is loaded, a [`FilterState`] is
//! initialized from its membership map, toggles produce new filter states,
//! and each new state is turned into [`ActiveFilter`]s, which both the
//! point [`classify`]er and the [`derive_legend`] step consume.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod classify;
pub mod config;
pub mod data;
pub mod error;
pub mod filter;
pub mod legend;
pub mod session;

pub use self::classify::{classify, ClassifiedPoint, Label};
pub use self::config::ExplorerConfig;
pub use self::data::{Dataset, Entity, MembershipMap, OrderedMap};
pub use self::error::{DataIntegrityError, ExplorerError};
pub use self::filter::{active_filters, reduce, ActiveFilter, FilterAction, FilterState};
pub use self::legend::{derive_legend, Color, LegendEntry, Palette};
pub use self::session::{ExplorerSession, Snapshot};

/// Crate version as recorded in Cargo metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
