//! Draft listings table

use dioxus::prelude::*;

use super::Pagination;
use crate::actions::{ActionProvider, RowActions};
use crate::api::{fetch_draft_lowongan, server_error_message};
use crate::state::{DraftTableState, MountGuard, TableView, PER_PAGE_OPTIONS};
use crate::summary::summarize;
use crate::types::{ListingId, Lowongan};

/// Column headers, in display order.
pub const TABLE_HEADERS: [&str; 12] = [
    "NO",
    "POSISI",
    "DESKRIPSI",
    "KUOTA",
    "TANGGAL PENUTUPAN",
    "PERIODE MULAI MAGANG",
    "PERIODE SELESAI MAGANG",
    "LOKASI PENEMPATAN",
    "TUGAS & TANGGUNG JAWAB",
    "PERSYARATAN",
    "KEUNTUNGAN",
    "AKSI",
];

#[derive(Props, Clone, PartialEq)]
pub struct TableDraftLowonganProps {
    /// Called with the listing id instead of linking to the detail page
    on_detail: Option<EventHandler<ListingId>>,
    /// Called with the listing id instead of linking to the edit page
    on_edit: Option<EventHandler<ListingId>>,
}

/// Paginated table of the current company's draft listings.
///
/// Fetches once on mount. Row actions either call the supplied handlers or,
/// when a handler is missing, link to the detail/edit pages.
#[component]
pub fn TableDraftLowongan(props: TableDraftLowonganProps) -> Element {
    let actions = use_hook(|| RowActions::new(props.on_detail, props.on_edit));
    let mut state = use_signal(DraftTableState::new);
    let guard = use_hook(MountGuard::default);

    use_drop({
        let guard = guard.clone();
        move || guard.cancel()
    });

    // Load the listings once per mount
    use_effect(move || {
        let guard = guard.clone();
        spawn(async move {
            let result = fetch_draft_lowongan()
                .await
                .map_err(|e| server_error_message(&e));

            if guard.is_cancelled() {
                tracing::debug!("Table unmounted before draft listings arrived");
                return;
            }
            state.write().resolve(result);
        });
    });

    let current = use_memo(move || state.read().visible_rows().to_vec());

    let paginator = state.read().paginator();
    let total_pages = state.read().total_pages();

    let body = match state.read().view() {
        TableView::Loading => loading_row(),
        TableView::Error(message) => error_row(message),
        TableView::Empty => empty_row(),
        TableView::Rows { offset, .. } => rsx! {
            for (idx, item) in current.read().iter().enumerate() {
                DraftRow {
                    key: "{item.id}",
                    number: offset + idx + 1,
                    item: item.clone(),
                    actions: actions.clone()
                }
            }
        },
    };

    rsx! {
        div {
            class: "rounded-xl",
            div {
                class: "-mx-6 overflow-x-auto",
                div {
                    class: "min-w-[1900px] px-6",
                    table {
                        class: "w-full text-xs",
                        thead {
                            class: "bg-[#0F67B1] text-white",
                            tr {
                                for (i, header) in TABLE_HEADERS.iter().enumerate() {
                                    th {
                                        key: "{header}",
                                        class: format!("px-4 py-3 font-semibold text-center {}", header_corner(i)),
                                        "{header}"
                                    }
                                }
                            }
                        }
                        tbody { {body} }
                    }
                }
            }

            Pagination {
                page: paginator.page(),
                total_pages,
                per_page: paginator.per_page(),
                per_page_options: PER_PAGE_OPTIONS.to_vec(),
                on_page_change: move |page| state.write().set_page(page),
                on_per_page_change: move |per_page| {
                    state.write().set_per_page(per_page);
                }
            }
        }
    }
}

fn header_corner(index: usize) -> &'static str {
    if index == 0 {
        "rounded-tl-lg"
    } else if index == TABLE_HEADERS.len() - 1 {
        "rounded-tr-lg"
    } else {
        ""
    }
}

fn loading_row() -> Element {
    rsx! {
        StatusRow { class: "bg-white", "Memuat…" }
    }
}

fn error_row(message: &str) -> Element {
    rsx! {
        StatusRow { class: "bg-white text-red-600", "{message}" }
    }
}

fn empty_row() -> Element {
    rsx! {
        StatusRow {
            class: "bg-white text-gray-500",
            "Belum ada draft lowongan. Klik "
            b { "Buat Lowongan Baru" }
            " untuk menambah data."
        }
    }
}

/// A single cell spanning the whole table, used for loading/error/empty
#[component]
fn StatusRow(class: &'static str, children: Element) -> Element {
    let colspan = TABLE_HEADERS.len();

    rsx! {
        tr {
            td {
                colspan: "{colspan}",
                class: "px-4 py-10 text-center {class}",
                {children}
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DraftRowProps {
    number: usize,
    item: Lowongan,
    actions: RowActions,
}

#[component]
fn DraftRow(props: DraftRowProps) -> Element {
    let item = &props.item;
    let duties = summarize(&item.duties);
    let requirements = summarize(&item.requirements);
    let benefits = summarize(&item.benefits);

    rsx! {
        tr {
            class: "border-t border-gray-100 hover:bg-gray-50",
            td { class: "px-4 py-3 text-center", "{props.number}" }
            td { class: "px-4 py-3 font-medium", "{item.position}" }
            td { class: "px-4 py-3 max-w-[360px] truncate", "{item.description}" }
            td { class: "px-4 py-3 text-center", "{item.quota}" }
            td { class: "px-4 py-3 text-center", "{item.application_deadline}" }
            td { class: "px-4 py-3 text-center", "{item.internship_start}" }
            td { class: "px-4 py-3 text-center", "{item.internship_end}" }
            td { class: "px-4 py-3", "{item.placement_location}" }
            td { class: "px-4 py-3 max-w-[320px] truncate", "{duties}" }
            td { class: "px-4 py-3 max-w-[320px] truncate", "{requirements}" }
            td { class: "px-4 py-3 max-w-[320px] truncate", "{benefits}" }
            td {
                class: "px-4 py-3",
                div {
                    class: "flex justify-center items-center gap-3",
                    DetailAction { provider: props.actions.detail.clone(), id: item.id }
                    EditAction { provider: props.actions.edit.clone(), id: item.id }
                }
            }
        }
    }
}

const DETAIL_CLASS: &str = "inline-flex items-center justify-center h-8 px-3 rounded-[5px] bg-[#0F67B1] text-white text-xs font-medium hover:bg-[#0c599b] transition";
const EDIT_CLASS: &str = "text-[#0F67B1] hover:opacity-80";

#[component]
fn DetailAction(provider: ActionProvider, id: ListingId) -> Element {
    match provider {
        ActionProvider::Controlled(handler) => rsx! {
            button {
                class: DETAIL_CLASS,
                onclick: move |_| handler.call(id),
                "Detail"
            }
        },
        ActionProvider::Navigate(template) => rsx! {
            Link { to: template.href(id), class: DETAIL_CLASS, "Detail" }
        },
    }
}

#[component]
fn EditAction(provider: ActionProvider, id: ListingId) -> Element {
    match provider {
        ActionProvider::Controlled(handler) => rsx! {
            button {
                aria_label: "Edit",
                class: EDIT_CLASS,
                onclick: move |_| handler.call(id),
                EditIcon {}
            }
        },
        ActionProvider::Navigate(template) => rsx! {
            Link { to: template.href(id), class: EDIT_CLASS, EditIcon {} }
        },
    }
}

/// Pencil-on-square icon
#[component]
fn EditIcon() -> Element {
    rsx! {
        svg {
            width: "18",
            height: "18",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7" }
            path { d: "M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z" }
        }
    }
}
