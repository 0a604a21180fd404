//! Application pages

pub mod lowongan;
