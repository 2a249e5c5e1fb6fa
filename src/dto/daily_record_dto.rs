use serde::Deserialize;
use validator::Validate;

use crate::models::NewDailyRecord;
use crate::utils::errors::AppResult;
use crate::utils::validation::parse_date;

// Request para registrar ganancias y gastos de un día
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RecordDailyEntryRequest {
    #[serde(alias = "date")]
    #[validate(required, length(min = 1))]
    pub data_registro: Option<String>,

    #[serde(alias = "hours", alias = "hoursOnline")]
    #[validate(required)]
    pub horas_online: Option<f64>,

    #[serde(alias = "km", alias = "kmDriven")]
    #[validate(required)]
    pub km_rodados: Option<f64>,

    #[serde(alias = "gross", alias = "grossEarnings")]
    #[validate(required)]
    pub ganho_bruto: Option<f64>,

    #[serde(alias = "fuelSpent")]
    #[validate(required)]
    pub combustivel_gasto: Option<f64>,

    #[serde(alias = "otherExpenses")]
    pub outras_despesas: Option<f64>,
}

impl RecordDailyEntryRequest {
    /// Convertir a modelo de dominio. Debe llamarse después de `validate()`;
    /// sólo la fecha puede fallar aquí.
    pub fn into_new_record(self) -> AppResult<NewDailyRecord> {
        let date = parse_date(self.data_registro.as_deref().unwrap_or_default())?;

        Ok(NewDailyRecord {
            date,
            hours_online: self.horas_online.unwrap_or_default(),
            km_driven: self.km_rodados.unwrap_or_default(),
            gross_earnings: self.ganho_bruto.unwrap_or_default(),
            fuel_spent: self.combustivel_gasto.unwrap_or_default(),
            other_expenses: self.outras_despesas,
        })
    }
}
