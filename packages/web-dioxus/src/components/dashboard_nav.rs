//! Dashboard navigation component

use dioxus::prelude::*;

use crate::routes::Route;

/// Dashboard navigation bar
#[component]
pub fn DashboardNav() -> Element {
    rsx! {
        nav {
            class: "bg-white border-b border-gray-200 px-6 py-3",
            div {
                class: "flex items-center gap-6",
                Link {
                    to: Route::UploadLowongan {},
                    class: "text-xl font-bold text-[#0F67B1]",
                    "Dashboard Perusahaan"
                }

                div {
                    class: "hidden md:flex items-center gap-1",
                    NavLink { to: Route::UploadLowongan {}, label: "Upload Lowongan" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct NavLinkProps {
    to: Route,
    label: &'static str,
}

#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let route = use_route::<Route>();
    let is_active = route == props.to;

    rsx! {
        Link {
            to: props.to.clone(),
            class: if is_active {
                "px-3 py-2 rounded-md text-sm font-medium bg-blue-50 text-[#0F67B1]"
            } else {
                "px-3 py-2 rounded-md text-sm font-medium text-gray-600 hover:bg-gray-100 hover:text-gray-900"
            },
            "{props.label}"
        }
    }
}
