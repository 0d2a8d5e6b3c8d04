//! Filter-state store, active-filter extraction and user actions

pub mod action;
pub mod active;
pub mod state;

pub use self::action::{reduce, FilterAction};
pub use self::active::{active_filters, ActiveFilter};
pub use self::state::FilterState;
