//! Backend de costos y lucro para motoristas de aplicativo
//!
//! Registra motoristas, costos operativos y registros diarios, y calcula el
//! lucro de un día. El almacenamiento es SQLite o PostgreSQL según la
//! configuración.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
