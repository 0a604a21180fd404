//! Dashboard layout wrapper

use dioxus::prelude::*;

use super::DashboardNav;
use crate::routes::Route;

/// Dashboard layout component that provides navigation around every page
#[component]
pub fn DashboardLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-100",

            DashboardNav {}

            main {
                class: "p-6",
                Outlet::<Route> {}
            }
        }
    }
}
