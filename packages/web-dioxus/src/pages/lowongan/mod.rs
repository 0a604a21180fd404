//! Job listing ("lowongan") pages

mod drafts;

pub use drafts::*;
