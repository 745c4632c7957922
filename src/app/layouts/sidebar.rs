use dioxus::prelude::*;

use crate::domain::models::{IconId, Role};
use crate::shared::hooks::use_sidebar;

/// Collapsible role sidebar.
///
/// One component for both roles; the menu comes from the role's `RoleConfig`.
/// Below the drawer breakpoint the sidebar floats over the page and every
/// navigation dismisses it.
#[component]
pub fn Sidebar(role: Role, current_path: String, route_param: Option<String>) -> Element {
    let sidebar = use_sidebar(role, &current_path);

    // Re-sync on every route change
    use_effect(use_reactive((&current_path, &route_param), move |(path, param)| {
        sidebar.sync_route(&path, param.as_deref());
    }));

    let controller = sidebar.controller.read();
    let is_open = controller.is_open();
    let logging_out = controller.is_logging_out();
    let title = controller.role().title.clone();
    let element_id = controller.role().element_id();
    let entries: Vec<(usize, &'static str, &'static str, String)> = controller
        .menu_entries()
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let class = if entry.active { "menu-item active" } else { "menu-item" };
            (index, class, entry.item.icon.glyph(), entry.item.label)
        })
        .collect();
    drop(controller);

    let aside_class = if is_open { "sidebar is-open" } else { "sidebar is-closed" };
    let overlay_class = if is_open { "sidebar-overlay show" } else { "sidebar-overlay" };

    rsx! {
        if !is_open {
            div {
                button {
                    class: "sidebar-topbar-btn",
                    r#type: "button",
                    "aria-label": "Abrir menú",
                    "aria-controls": "{element_id}",
                    "aria-expanded": "{is_open}",
                    onclick: move |_| sidebar.open(),
                    "☰"
                }
            }
        }

        aside {
            id: "{element_id}",
            class: "{aside_class}",

            div { class: "sidebar-header",
                div { class: "logo",
                    img { src: "/ipn.png", alt: "Logo", class: "logo-img" }
                    span { "{title}" }
                }
                button {
                    class: "sidebar-close",
                    "aria-label": "Cerrar menú",
                    onclick: move |_| sidebar.close(),
                    {IconId::Times.glyph()}
                }
            }

            nav { class: "menu",
                for (index, class, icon, label) in entries {
                    button {
                        key: "{index}",
                        class: "{class}",
                        onclick: move |_| sidebar.activate(index),
                        span { class: "icon", "{icon}" }
                        span { class: "label", "{label}" }
                    }
                }
            }

            button {
                class: "logout",
                disabled: logging_out,
                onclick: move |_| sidebar.logout(),
                span { class: "icon", {IconId::SignOut.glyph()} }
                span { class: "label", "Cerrar sesión" }
            }
        }

        button {
            class: "{overlay_class}",
            "aria-hidden": "true",
            onclick: move |_| sidebar.close(),
        }
    }
}
