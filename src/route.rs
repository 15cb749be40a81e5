use gloo::console::warn;
use gloo_storage::{SessionStorage, Storage};

use crate::catalog::Catalog;
use crate::config::ROUTE_STORAGE_KEY;

/// Top-level views. Only one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Landing,
    Aplausos,
    Dinamicas,
    Juegos,
    Nosotros,
}

impl Route {
    /// Entries of the navigation bar, in order.
    pub const NAV: [Route; 4] = [Route::Aplausos, Route::Dinamicas, Route::Juegos, Route::Nosotros];

    pub fn key(self) -> &'static str {
        match self {
            Route::Landing => "landing",
            Route::Aplausos => "aplausos",
            Route::Dinamicas => "dinamicas",
            Route::Juegos => "juegos",
            Route::Nosotros => "nosotros",
        }
    }

    pub fn parse(key: &str) -> Option<Route> {
        match key.trim() {
            "landing" => Some(Route::Landing),
            "aplausos" => Some(Route::Aplausos),
            "dinamicas" => Some(Route::Dinamicas),
            "juegos" => Some(Route::Juegos),
            "nosotros" => Some(Route::Nosotros),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self.catalog() {
            Some(catalog) => catalog.label(),
            None if self == Route::Nosotros => "Nosotros",
            None => "Inicio",
        }
    }

    pub fn icon(self) -> &'static str {
        match self.catalog() {
            Some(catalog) => catalog.icon(),
            None if self == Route::Nosotros => "👥",
            None => "📖",
        }
    }

    pub fn catalog(self) -> Option<Catalog> {
        match self {
            Route::Aplausos => Some(Catalog::Aplausos),
            Route::Dinamicas => Some(Catalog::Dinamicas),
            Route::Juegos => Some(Catalog::Juegos),
            Route::Landing | Route::Nosotros => None,
        }
    }
}

impl From<Catalog> for Route {
    fn from(catalog: Catalog) -> Self {
        match catalog {
            Catalog::Aplausos => Route::Aplausos,
            Catalog::Dinamicas => Route::Dinamicas,
            Catalog::Juegos => Route::Juegos,
        }
    }
}

/// Last view of this tab's session, or the landing page.
pub fn load_route() -> Route {
    SessionStorage::raw()
        .get_item(ROUTE_STORAGE_KEY)
        .ok()
        .flatten()
        .and_then(|stored| parse_stored(&stored))
        .unwrap_or_default()
}

/// Stored as the bare key (`aplausos`); JSON-quoted values (`"aplausos"`) are read too.
pub fn parse_stored(stored: &str) -> Option<Route> {
    Route::parse(stored).or_else(|| {
        serde_json::from_str::<String>(stored)
            .ok()
            .and_then(|key| Route::parse(&key))
    })
}

pub fn save_route(route: Route) {
    if let Err(e) = SessionStorage::raw().set_item(ROUTE_STORAGE_KEY, route.key()) {
        warn!(format!("⚠️ Failed to save route to SessionStorage: {e:?}"));
    }
}
