//! Page controls for client-side paginated tables

use dioxus::prelude::*;

use crate::state::page_window;

/// Number of page buttons shown at once
const PAGE_BUTTONS: usize = 5;

#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    /// Current page, 1-based
    page: usize,
    total_pages: usize,
    per_page: usize,
    per_page_options: Vec<usize>,
    on_page_change: EventHandler<usize>,
    on_per_page_change: EventHandler<usize>,
}

/// Page-size selector, "Halaman X dari Y" label, prev/next and page buttons
#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let page = props.page;
    let total_pages = props.total_pages.max(1);
    let on_page_change = props.on_page_change;
    let on_per_page_change = props.on_per_page_change;

    let handle_per_page = move |evt: FormEvent| match evt.value().parse::<usize>() {
        Ok(per_page) => on_per_page_change.call(per_page),
        Err(_) => tracing::warn!(value = %evt.value(), "Unparseable page size"),
    };

    rsx! {
        div {
            class: "flex flex-wrap items-center justify-between gap-4 mt-4 text-sm text-gray-600",

            div {
                class: "flex items-center gap-2",
                span { "Tampilkan" }
                select {
                    class: "border border-gray-300 rounded px-2 py-1 bg-white",
                    onchange: handle_per_page,
                    for size in props.per_page_options.iter().copied() {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == props.per_page,
                            "{size}"
                        }
                    }
                }
                span { "data per halaman" }
            }

            div {
                class: "flex items-center gap-1",
                span { class: "mr-2", "Halaman {page} dari {total_pages}" }
                button {
                    class: "px-3 py-1 rounded border border-gray-300 disabled:opacity-40",
                    disabled: page <= 1,
                    onclick: move |_| on_page_change.call(page - 1),
                    "‹"
                }
                for n in page_window(page, total_pages, PAGE_BUTTONS) {
                    button {
                        key: "{n}",
                        class: if n == page {
                            "px-3 py-1 rounded bg-[#0F67B1] text-white"
                        } else {
                            "px-3 py-1 rounded border border-gray-300 hover:bg-gray-100"
                        },
                        onclick: move |_| on_page_change.call(n),
                        "{n}"
                    }
                }
                button {
                    class: "px-3 py-1 rounded border border-gray-300 disabled:opacity-40",
                    disabled: page >= total_pages,
                    onclick: move |_| on_page_change.call(page + 1),
                    "›"
                }
            }
        }
    }
}
