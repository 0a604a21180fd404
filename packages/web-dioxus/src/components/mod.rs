//! Reusable UI components

mod dashboard_layout;
mod dashboard_nav;
mod draft_table;
mod pagination;

pub use dashboard_layout::*;
pub use dashboard_nav::*;
pub use draft_table::*;
pub use pagination::*;
