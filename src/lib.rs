//! Bitácora Ramo Deportivo: a browsable logbook of group-recreation activities
//! (aplausos, dinámicas, juegos) built with Yew.
//!
//! The catalog logic (tag sanitizing, search filtering, modal selection and
//! video link resolution) is plain Rust and lives outside the components.

pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod filter;
pub mod media;
pub mod model;
pub mod route;
pub mod selection;
pub mod site;
pub mod tags;

pub use app::App;
pub use catalog::Catalog;
pub use error::ContentError;
pub use filter::filter;
pub use media::{resolve, Playable};
pub use model::{ActivityRecord, SiteInfo, TeamMember};
pub use route::Route;
pub use selection::Selection;
pub use tags::{sanitize, sanitize_tags, Tag};
