//! Modelo de Driver
//!
//! Un motorista registrado. Mapea a la tabla `motoristas`; los nombres
//! serializados están en portugués.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Driver principal - fila de la tabla motoristas
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Driver {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    #[serde(rename = "modelo_carro")]
    pub car_model: String,
    #[serde(rename = "consumo_medio")]
    pub avg_consumption: f64,
    #[serde(rename = "criado_em")]
    pub created_at: Option<NaiveDateTime>,
}

/// Datos de registro de un motorista, ya validados
#[derive(Debug, Clone, PartialEq)]
pub struct NewDriver {
    pub name: String,
    pub phone: String,
    pub car_model: String,
    pub avg_consumption: f64,
}
