//! Modelo de OperatingCost
//!
//! Costos fijos/recurrentes del vehículo de un motorista. Cada envío crea
//! una fila nueva en `custos_operacionais`; no hay versiones ni updates.

/// Campos de costo enviados por el motorista, todos opcionales
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperatingCost {
    pub fuel_price_per_km: Option<f64>,
    pub monthly_maintenance: Option<f64>,
    pub insurance: Option<f64>,
    pub annual_vehicle_tax: Option<f64>,
    pub rental: Option<f64>,
    pub financing_installment: Option<f64>,
    pub other_costs: Option<f64>,
}
