//! Draft listing pages

use dioxus::prelude::*;

use crate::components::TableDraftLowongan;
use crate::routes::Route;
use crate::types::ListingId;

/// Draft listings page; rows link to their own detail and edit pages
#[component]
pub fn UploadLowongan() -> Element {
    rsx! {
        div {
            class: "bg-white rounded-xl shadow-sm border border-gray-200 p-6",
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "Draft Lowongan" }
            TableDraftLowongan {}
        }
    }
}

/// Draft listing detail page
#[component]
pub fn DraftLowonganDetail(id: ListingId) -> Element {
    rsx! {
        DraftPlaceholder { title: "Detail Lowongan", id }
    }
}

/// Draft listing edit page
#[component]
pub fn DraftLowonganEdit(id: ListingId) -> Element {
    rsx! {
        DraftPlaceholder { title: "Edit Draft Lowongan", id }
    }
}

#[component]
fn DraftPlaceholder(title: &'static str, id: ListingId) -> Element {
    rsx! {
        div {
            h1 { class: "text-2xl font-bold text-gray-900 mb-6", "{title}" }
            p { class: "text-gray-600 mb-4", "ID Lowongan: {id}" }
            Link {
                to: Route::UploadLowongan {},
                class: "text-[#0F67B1] hover:underline text-sm",
                "Kembali ke daftar draft"
            }
        }
    }
}
