//! Route handlers
//!
//! All HTTP request handlers organized by domain. Plain resources share the
//! generic handlers of [`resource`].

pub mod archivos;
pub mod auth;
pub mod bitacoras;
pub mod health;
pub mod menu;
pub mod personas;
pub mod resource;
pub mod tareas;
pub mod usuarios;
