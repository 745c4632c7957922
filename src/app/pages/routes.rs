use dioxus::prelude::*;

use crate::app::layouts::Sidebar;
use crate::app::navigation::NavigationSlot;
use crate::config::SidebarSettings;
use crate::domain::models::Role;
use crate::shared::constants::{FROM_SIDEBAR_KEY, PERIOD_KEY};
use crate::shared::hooks::use_navigation_state;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},

    #[layout(AdminLayout)]
        #[route("/administrador")]
        AdminHome {},
        #[route("/administrador/:section")]
        AdminSection { section: String },
        #[route("/administrador/:section/:record")]
        AdminRecord { section: String, record: String },
    #[end_layout]

    #[layout(ProfesorLayout)]
        #[route("/profesor")]
        ProfesorLanding {},
        #[route("/profesor/Chat")]
        ProfesorChat {},
        #[route("/profesor/informacionPersonal/:id")]
        ProfesorInfo { id: String },
        #[route("/profesor/:id")]
        ProfesorHome { id: String },
        #[route("/profesor/:id/:section")]
        ProfesorSection { id: String, section: String },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Identifier carried in the path of profesor routes
    pub fn route_param(&self) -> Option<String> {
        match self {
            Route::ProfesorInfo { id }
            | Route::ProfesorHome { id }
            | Route::ProfesorSection { id, .. } => Some(id.clone()),
            _ => None,
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| NavigationSlot(Signal::new(None)));
    use_context_provider(SidebarSettings::from_build_env);

    use_effect(|| {
        tracing::info!("SAES-R sidebar app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn AdminLayout() -> Element {
    rsx! {
        RoleShell { role: Role::Admin }
    }
}

#[component]
fn ProfesorLayout() -> Element {
    rsx! {
        RoleShell { role: Role::Profesor }
    }
}

/// Sidebar plus routed content for one role
#[component]
fn RoleShell(role: Role) -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    let route = use_route::<Route>();

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        div { class: "c-layout",
            Sidebar {
                role,
                current_path: route.to_string(),
                route_param: route.route_param(),
            }
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Title and, when present, the context the sidebar navigation carried
#[component]
fn PageFrame(title: String) -> Element {
    let state = use_navigation_state();
    let from_sidebar = state.as_ref().is_some_and(|s| s.is_from_sidebar());
    let period = state.as_ref().and_then(|s| s.get_str(PERIOD_KEY));

    rsx! {
        section { class: "c-page",
            h1 { "{title}" }
            if from_sidebar {
                p { class: "c-page__hint", "data-origin": FROM_SIDEBAR_KEY, "Abierto desde el menú" }
            }
            if let Some(period) = period {
                p { class: "c-page__period", "Periodo {period}" }
            }
        }
    }
}

#[component]
fn Landing() -> Element {
    rsx! {
        section { class: "c-page c-page--landing",
            h1 { "SAES-R" }
            nav {
                Link { to: Route::AdminHome {}, "Administrador" }
                Link { to: Route::ProfesorLanding {}, "Profesor" }
            }
        }
    }
}

#[component]
fn AdminHome() -> Element {
    rsx! { PageFrame { title: "Inicio".to_string() } }
}

#[component]
fn AdminSection(section: String) -> Element {
    rsx! { PageFrame { title: section } }
}

#[component]
fn AdminRecord(section: String, record: String) -> Element {
    rsx! { PageFrame { title: format!("{section} · {record}") } }
}

#[component]
fn ProfesorLanding() -> Element {
    rsx! { PageFrame { title: "Profesor".to_string() } }
}

#[component]
fn ProfesorChat() -> Element {
    rsx! { PageFrame { title: "Asistente de Chat".to_string() } }
}

#[component]
fn ProfesorInfo(id: String) -> Element {
    rsx! { PageFrame { title: format!("Información Personal · {id}") } }
}

#[component]
fn ProfesorHome(id: String) -> Element {
    rsx! { PageFrame { title: format!("Profesor {id}") } }
}

#[component]
fn ProfesorSection(id: String, section: String) -> Element {
    rsx! { PageFrame { title: format!("{section} · {id}") } }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        section { class: "c-page c-page--missing",
            h1 { "Página no encontrada" }
            p { "/{path}" }
            Link { to: Route::Landing {}, "Volver al inicio" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_targets_parse() {
        let targets = [
            "/administrador",
            "/administrador/gestionarAlumnos",
            "/administrador/SituacionesEspeciales",
            "/profesor",
            "/profesor/42",
            "/profesor/42/clases",
            "/profesor/Chat",
            "/profesor/informacionPersonal/42",
        ];
        for target in targets {
            let route: Route = target.parse().unwrap();
            assert!(!matches!(route, Route::NotFound { .. }), "{target}");
        }
    }

    #[test]
    fn test_static_segments_win() {
        assert_eq!("/profesor/Chat".parse::<Route>().unwrap(), Route::ProfesorChat {});
        assert_eq!(
            "/profesor/informacionPersonal/7".parse::<Route>().unwrap(),
            Route::ProfesorInfo { id: "7".to_string() }
        );
    }

    #[test]
    fn test_route_param() {
        let route: Route = "/profesor/42/ets".parse().unwrap();
        assert_eq!(route.route_param().as_deref(), Some("42"));
        assert_eq!(Route::AdminHome {}.route_param(), None);
    }

    #[test]
    fn test_route_display_round_trips_path() {
        let route = Route::ProfesorSection { id: "42".to_string(), section: "evaluacion".to_string() };
        assert_eq!(route.to_string(), "/profesor/42/evaluacion");
    }
}
