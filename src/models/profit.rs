//! Reporte de lucro de un día

use serde::Serialize;

/// Métricas derivadas de un DailyRecord.
///
/// Los ratios se entregan como texto con dos decimales; un divisor cero
/// produce `"Infinity"`, `"-Infinity"` o `"NaN"` tal cual.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitReport {
    #[serde(rename = "ganho_bruto")]
    pub gross_earnings: f64,
    #[serde(rename = "combustivel_gasto")]
    pub fuel_spent: f64,
    #[serde(rename = "outras_despesas")]
    pub other_expenses: f64,
    #[serde(rename = "lucro_liquido")]
    pub net_profit: f64,
    #[serde(rename = "horas_online")]
    pub hours_online: f64,
    #[serde(rename = "km_rodados")]
    pub km_driven: f64,
    #[serde(rename = "ganho_por_hora")]
    pub profit_per_hour: String,
    #[serde(rename = "ganho_por_km")]
    pub profit_per_km: String,
}
