//! Cálculo de lucro diario
//!
//! Función pura sobre un `DailyRecord`; no accede al almacenamiento.

use crate::models::{DailyRecord, ProfitReport};

/// Derivar lucro líquido y ratios por hora / por km de un registro.
///
/// No hay guardas para divisores cero: horas o km en cero producen un ratio
/// no finito que se devuelve tal cual.
pub fn compute_profit_report(record: &DailyRecord) -> ProfitReport {
    let other_expenses = record.other_expenses.unwrap_or(0.0);
    let net_profit = record.gross_earnings - record.fuel_spent - other_expenses;

    ProfitReport {
        gross_earnings: record.gross_earnings,
        fuel_spent: record.fuel_spent,
        other_expenses,
        net_profit,
        hours_online: record.hours_online,
        km_driven: record.km_driven,
        profit_per_hour: to_fixed_2(net_profit / record.hours_online),
        profit_per_km: to_fixed_2(net_profit / record.km_driven),
    }
}

/// Dos decimales fijos; los valores no finitos usan la forma textual
/// `Infinity` / `-Infinity` / `NaN` que ya consumen los clientes.
///
/// Las mitades exactas se redondean alejándose de cero (`0.125` -> `0.13`)
/// y el cero negativo se escribe `0.00`.
pub fn to_fixed_2(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0.00".to_string()
    } else {
        format!("{:.2}", round_half_away_from_zero(value))
    }
}

// Un f64 cae exactamente a mitad de dos centésimos solo si value * 8 es un
// entero impar (x.125, x.375, x.625, x.875).
fn round_half_away_from_zero(value: f64) -> f64 {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        (value * 100.0).round() / 100.0
    } else {
        value
    }
}
