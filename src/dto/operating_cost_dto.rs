use serde::Deserialize;

use crate::models::OperatingCost;

// Request para registrar costos operativos; todos los campos son opcionales
#[derive(Debug, Default, Deserialize)]
pub struct RecordOperatingCostRequest {
    #[serde(alias = "fuelPricePerKm")]
    pub combustivel_preco_km: Option<f64>,
    #[serde(alias = "monthlyMaintenance")]
    pub manutencao_mensal: Option<f64>,
    #[serde(alias = "insurance")]
    pub seguro: Option<f64>,
    #[serde(alias = "annualVehicleTax")]
    pub ipva: Option<f64>,
    #[serde(alias = "rental")]
    pub aluguel_carro: Option<f64>,
    #[serde(alias = "financingInstallment")]
    pub parcela_financiamento: Option<f64>,
    #[serde(alias = "otherCosts")]
    pub outros_custos: Option<f64>,
}

impl From<RecordOperatingCostRequest> for OperatingCost {
    fn from(request: RecordOperatingCostRequest) -> Self {
        Self {
            fuel_price_per_km: request.combustivel_preco_km,
            monthly_maintenance: request.manutencao_mensal,
            insurance: request.seguro,
            annual_vehicle_tax: request.ipva,
            rental: request.aluguel_carro,
            financing_installment: request.parcela_financiamento,
            other_costs: request.outros_custos,
        }
    }
}
