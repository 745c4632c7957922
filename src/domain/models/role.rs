use serde::{Deserialize, Serialize};

use super::menu::{IconId, MatchMode, MenuItem};
use crate::shared::constants::{PROFESSOR_ID_KEY, sidebar_open_key};

/// Roles with a sidebar in the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Profesor,
}

impl Role {
    /// Key used in persistent storage (`sidebar_<key>_open`)
    pub fn key(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Profesor => "profe",
        }
    }

    pub fn config(&self) -> RoleConfig {
        match self {
            Role::Admin => RoleConfig::admin(),
            Role::Profesor => RoleConfig::profesor(),
        }
    }
}

/// Data-driven definition of one role's sidebar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleConfig {
    pub key: String,
    pub title: String,
    /// Landing route, also the fallback when an identifier is missing.
    pub root_path: String,
    /// Navigation-state and storage key of the role's identifier, if any.
    pub identifier_key: Option<String>,
    /// Keep the academic period from navigation state in storage.
    #[serde(default)]
    pub tracks_period: bool,
    pub items: Vec<MenuItem>,
}

impl RoleConfig {
    pub fn admin() -> Self {
        let section = |label: &str, icon: IconId, path: &str| {
            MenuItem::new(label, icon, path, MatchMode::Prefix)
        };

        Self {
            key: Role::Admin.key().to_string(),
            title: "SAES-R".to_string(),
            root_path: "/administrador".to_string(),
            identifier_key: None,
            tracks_period: false,
            items: vec![
                // Exact, or every admin sub-route would light up home.
                MenuItem::new("Inicio", IconId::Home, "/administrador", MatchMode::Exact),
                section("Gestionar Alumnos", IconId::UserGraduate, "/administrador/gestionarAlumnos"),
                section("Gestionar Profesores", IconId::ChalkboardTeacher, "/administrador/gestionarProfesores"),
                section("Gestionar Cursos", IconId::Book, "/administrador/gestionarCursos"),
                section("ETS", IconId::FileAlt, "/administrador/ETS"),
                section("Publicar Noticia", IconId::Newspaper, "/administrador/publicarNoticia"),
                section("Carreras", IconId::University, "/administrador/carreras"),
                section("Unidades", IconId::ListAlt, "/administrador/unidades"),
                section("Configuración de Fechas", IconId::CalendarAlt, "/administrador/Fechas"),
                section("Situaciones Especiales", IconId::ExclamationTriangle, "/administrador/SituacionesEspeciales"),
            ],
        }
    }

    pub fn profesor() -> Self {
        let section = |label: &str, icon: IconId, path: &str, segment: &str| {
            MenuItem::new(label, icon, path, MatchMode::Contains).with_match_path(segment)
        };

        Self {
            key: Role::Profesor.key().to_string(),
            title: "SAES-R".to_string(),
            root_path: "/profesor".to_string(),
            identifier_key: Some(PROFESSOR_ID_KEY.to_string()),
            tracks_period: true,
            items: vec![
                MenuItem::new("Inicio", IconId::Home, "/profesor/:id", MatchMode::Exact)
                    .with_alias("/profesor"),
                section("Clases Impartidas", IconId::ChalkboardTeacher, "/profesor/:id/clases", "/clases"),
                section("ETS", IconId::FileAlt, "/profesor/:id/ets", "/ets"),
                section("Asistente de Chat", IconId::Robot, "/profesor/Chat", "/Chat")
                    .with_state("tipo_usuario", "profesor"),
                section("Información Personal", IconId::User, "/profesor/informacionPersonal/:id", "/informacionPersonal"),
                section("Evaluación Docente", IconId::Star, "/profesor/:id/evaluacion", "/evaluacion"),
            ],
        }
    }

    pub fn storage_key(&self) -> String {
        sidebar_open_key(&self.key)
    }

    /// DOM id of the rendered `aside`
    pub fn element_id(&self) -> String {
        format!("saesr-{}-sidebar", self.key)
    }
}
