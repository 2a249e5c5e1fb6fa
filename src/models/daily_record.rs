//! Modelo de DailyRecord
//!
//! Actividad y ganancias de un día para un motorista. La tabla
//! `registros_diarios` no impone unicidad sobre (motorista, fecha).

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use sqlx::FromRow;

/// Registro diario - fila de la tabla registros_diarios
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct DailyRecord {
    pub id: i64,
    #[serde(rename = "motorista_id")]
    pub driver_id: i64,
    #[serde(rename = "data_registro")]
    pub date: NaiveDate,
    #[serde(rename = "horas_online")]
    pub hours_online: f64,
    #[serde(rename = "km_rodados")]
    pub km_driven: f64,
    #[serde(rename = "ganho_bruto")]
    pub gross_earnings: f64,
    #[serde(rename = "combustivel_gasto")]
    pub fuel_spent: f64,
    #[serde(rename = "outras_despesas")]
    pub other_expenses: Option<f64>,
    #[serde(rename = "criado_em")]
    pub created_at: Option<NaiveDateTime>,
}

/// Datos de un nuevo registro diario, ya validados
#[derive(Debug, Clone, PartialEq)]
pub struct NewDailyRecord {
    pub date: NaiveDate,
    pub hours_online: f64,
    pub km_driven: f64,
    pub gross_earnings: f64,
    pub fuel_spent: f64,
    pub other_expenses: Option<f64>,
}
