//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::DashboardLayout;
use crate::pages::lowongan::{DraftLowonganDetail, DraftLowonganEdit, UploadLowongan};
use crate::types::ListingId;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::UploadLowongan {})]

    #[layout(DashboardLayout)]
        #[route("/upload-lowongan")]
        UploadLowongan {},

        #[route("/upload-lowongan/detail/:id")]
        DraftLowonganDetail { id: ListingId },

        #[route("/upload-lowongan/edit/draft/:id")]
        DraftLowonganEdit { id: ListingId },
}
