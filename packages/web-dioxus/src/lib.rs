//! Draft job listings ("draft lowongan") dashboard built with Dioxus fullstack.
//!
//! The table fetches the current company's draft listings once through a
//! server function, paginates them client-side and links each row to its
//! detail and edit pages (or hands the id to the embedding parent).

#![allow(non_snake_case)]

pub mod actions;
pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;
pub mod summary;
pub mod types;
