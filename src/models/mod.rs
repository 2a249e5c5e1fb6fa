//! Modelos del sistema
//!
//! Este módulo contiene los modelos de dominio que mapean a las tablas
//! `motoristas`, `custos_operacionais` y `registros_diarios`.

pub mod daily_record;
pub mod driver;
pub mod operating_cost;
pub mod profit;

pub use daily_record::{DailyRecord, NewDailyRecord};
pub use driver::{Driver, NewDriver};
pub use operating_cost::OperatingCost;
pub use profit::ProfitReport;
