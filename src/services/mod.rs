//! Services module
//!
//! Lógica de negocio sin acceso al almacenamiento.

pub mod profit_service;

pub use profit_service::compute_profit_report;
