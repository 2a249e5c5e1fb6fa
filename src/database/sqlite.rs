//! Implementación SQLite del gateway
//!
//! Base de datos embebida en archivo (o en memoria para tests). Las claves
//! foráneas se activan en cada conexión del pool.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::gateway::{
    daily_record_not_found, driver_not_found, map_child_insert_error, map_driver_insert_error,
    DriverGateway, GatewayResult,
};
use super::schema::sqlite as sql;
use crate::config::{DatabaseConfig, StorageBackend};
use crate::models::{DailyRecord, Driver, NewDailyRecord, NewDriver, OperatingCost};

pub struct SqliteGateway {
    pool: SqlitePool,
}

impl SqliteGateway {
    /// Abrir (o crear) la base y asegurar el schema
    pub async fn connect(config: &DatabaseConfig) -> GatewayResult<Self> {
        let pool = config.create_sqlite_pool().await?;
        Self::from_pool(pool).await
    }

    /// Base en memoria, aislada por instancia
    pub async fn in_memory() -> GatewayResult<Self> {
        Self::connect(&DatabaseConfig::in_memory()).await
    }

    pub async fn from_pool(pool: SqlitePool) -> GatewayResult<Self> {
        for statement in sql::CREATE_TABLES {
            sqlx::query(statement).execute(&pool).await?;
        }
        info!("✅ Schema SQLite verificado");
        Ok(Self { pool })
    }
}

#[async_trait]
impl DriverGateway for SqliteGateway {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Sqlite
    }

    async fn ping(&self) -> GatewayResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_driver(&self, driver: &NewDriver) -> GatewayResult<i64> {
        let result = sqlx::query(sql::INSERT_DRIVER)
            .bind(&driver.name)
            .bind(&driver.phone)
            .bind(&driver.car_model)
            .bind(driver.avg_consumption)
            .execute(&self.pool)
            .await
            .map_err(|e| map_driver_insert_error(e, &driver.phone))?;

        let id = result.last_insert_rowid();
        debug!("🆕 Motorista {} insertado en SQLite", id);
        Ok(id)
    }

    async fn list_drivers(&self) -> GatewayResult<Vec<Driver>> {
        let drivers = sqlx::query_as::<_, Driver>(sql::SELECT_DRIVERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(drivers)
    }

    async fn get_driver(&self, id: i64) -> GatewayResult<Driver> {
        sqlx::query_as::<_, Driver>(sql::SELECT_DRIVER_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| driver_not_found(id))
    }

    async fn record_operating_cost(&self, driver_id: i64, cost: &OperatingCost) -> GatewayResult<()> {
        sqlx::query(sql::INSERT_OPERATING_COST)
            .bind(driver_id)
            .bind(cost.fuel_price_per_km)
            .bind(cost.monthly_maintenance)
            .bind(cost.insurance)
            .bind(cost.annual_vehicle_tax)
            .bind(cost.rental)
            .bind(cost.financing_installment)
            .bind(cost.other_costs)
            .execute(&self.pool)
            .await
            .map_err(|e| map_child_insert_error(e, driver_id))?;
        Ok(())
    }

    async fn record_daily_entry(&self, driver_id: i64, record: &NewDailyRecord) -> GatewayResult<()> {
        sqlx::query(sql::INSERT_DAILY_RECORD)
            .bind(driver_id)
            .bind(record.date)
            .bind(record.hours_online)
            .bind(record.km_driven)
            .bind(record.gross_earnings)
            .bind(record.fuel_spent)
            .bind(record.other_expenses)
            .execute(&self.pool)
            .await
            .map_err(|e| map_child_insert_error(e, driver_id))?;
        Ok(())
    }

    async fn list_daily_records(&self, driver_id: i64) -> GatewayResult<Vec<DailyRecord>> {
        let records = sqlx::query_as::<_, DailyRecord>(sql::SELECT_DAILY_RECORDS_BY_DRIVER)
            .bind(driver_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(records)
    }

    async fn get_daily_record(&self, driver_id: i64, date: NaiveDate) -> GatewayResult<DailyRecord> {
        sqlx::query_as::<_, DailyRecord>(sql::SELECT_DAILY_RECORD_BY_DATE)
            .bind(driver_id)
            .bind(date)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| daily_record_not_found(driver_id, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::GatewayError;

    fn new_driver(phone: &str) -> NewDriver {
        NewDriver {
            name: "Ana Souza".to_string(),
            phone: phone.to_string(),
            car_model: "Onix 1.0".to_string(),
            avg_consumption: 12.5,
        }
    }

    fn entry(date: NaiveDate, gross: f64) -> NewDailyRecord {
        NewDailyRecord {
            date,
            hours_online: 8.0,
            km_driven: 120.0,
            gross_earnings: gross,
            fuel_spent: 45.0,
            other_expenses: None,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_driver() {
        let gateway = SqliteGateway::in_memory().await.unwrap();
        let id = gateway.create_driver(&new_driver("11999990000")).await.unwrap();

        let driver = gateway.get_driver(id).await.unwrap();
        assert_eq!(driver.id, id);
        assert_eq!(driver.name, "Ana Souza");
        assert_eq!(driver.phone, "11999990000");
        assert_eq!(driver.car_model, "Onix 1.0");
        assert_eq!(driver.avg_consumption, 12.5);
        assert!(driver.created_at.is_some());
    }

    #[tokio::test]
    async fn test_get_unknown_driver_is_not_found() {
        let gateway = SqliteGateway::in_memory().await.unwrap();
        let err = gateway.get_driver(99).await.unwrap_err();
        assert!(matches!(err, GatewayError::NotFound { entity: "driver", .. }));
    }

    #[tokio::test]
    async fn test_duplicate_phone_keeps_first_driver() {
        let gateway = SqliteGateway::in_memory().await.unwrap();
        let first = gateway.create_driver(&new_driver("11999990000")).await.unwrap();

        let mut other = new_driver("11999990000");
        other.name = "Bruno Lima".to_string();
        let err = gateway.create_driver(&other).await.unwrap_err();
        assert!(matches!(err, GatewayError::DuplicatePhone(ref p) if p == "11999990000"));

        let drivers = gateway.list_drivers().await.unwrap();
        assert_eq!(drivers.len(), 1);
        assert_eq!(gateway.get_driver(first).await.unwrap().name, "Ana Souza");
    }

    #[tokio::test]
    async fn test_list_drivers_newest_first() {
        let gateway = SqliteGateway::in_memory().await.unwrap();
        let mut ids = Vec::new();
        for phone in ["1", "2", "3", "4"] {
            ids.push(gateway.create_driver(&new_driver(phone)).await.unwrap());
        }

        let listed: Vec<i64> = gateway.list_drivers().await.unwrap().iter().map(|d| d.id).collect();
        ids.reverse();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn test_orphan_rows_are_rejected() {
        let gateway = SqliteGateway::in_memory().await.unwrap();

        let err = gateway
            .record_operating_cost(42, &OperatingCost::default())
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::UnknownDriver(42)));

        let err = gateway.record_daily_entry(42, &entry(day(1), 100.0)).await.unwrap_err();
        assert!(matches!(err, GatewayError::UnknownDriver(42)));
    }

    #[tokio::test]
    async fn test_operating_costs_accumulate() {
        let gateway = SqliteGateway::in_memory().await.unwrap();
        let id = gateway.create_driver(&new_driver("11999990000")).await.unwrap();

        let cost = OperatingCost {
            fuel_price_per_km: Some(0.45),
            insurance: Some(180.0),
            ..Default::default()
        };
        gateway.record_operating_cost(id, &cost).await.unwrap();
        gateway.record_operating_cost(id, &OperatingCost::default()).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM custos_operacionais WHERE motorista_id = ?")
            .bind(id)
            .fetch_one(&gateway.pool)
            .await
            .unwrap();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_daily_record_round_trip() {
        let gateway = SqliteGateway::in_memory().await.unwrap();
        let id = gateway.create_driver(&new_driver("11999990000")).await.unwrap();

        let mut new_record = entry(day(3), 250.5);
        new_record.other_expenses = Some(12.25);
        gateway.record_daily_entry(id, &new_record).await.unwrap();

        let record = gateway.get_daily_record(id, day(3)).await.unwrap();
        assert_eq!(record.driver_id, id);
        assert_eq!(record.date, day(3));
        assert_eq!(record.hours_online, 8.0);
        assert_eq!(record.km_driven, 120.0);
        assert_eq!(record.gross_earnings, 250.5);
        assert_eq!(record.fuel_spent, 45.0);
        assert_eq!(record.other_expenses, Some(12.25));

        let err = gateway.get_daily_record(id, day(4)).await.unwrap_err();
        assert!(matches!(err, GatewayError::NotFound { entity: "daily_record", .. }));
    }

    #[tokio::test]
    async fn test_duplicate_date_returns_latest_insert() {
        let gateway = SqliteGateway::in_memory().await.unwrap();
        let id = gateway.create_driver(&new_driver("11999990000")).await.unwrap();

        gateway.record_daily_entry(id, &entry(day(2), 100.0)).await.unwrap();
        gateway.record_daily_entry(id, &entry(day(2), 180.0)).await.unwrap();

        let record = gateway.get_daily_record(id, day(2)).await.unwrap();
        assert_eq!(record.gross_earnings, 180.0);
    }

    #[tokio::test]
    async fn test_list_daily_records_by_date_desc() {
        let gateway = SqliteGateway::in_memory().await.unwrap();
        let id = gateway.create_driver(&new_driver("11999990000")).await.unwrap();
        let other = gateway.create_driver(&new_driver("21988887777")).await.unwrap();

        for d in [2, 9, 5] {
            gateway.record_daily_entry(id, &entry(day(d), 100.0)).await.unwrap();
        }
        gateway.record_daily_entry(other, &entry(day(7), 100.0)).await.unwrap();

        let dates: Vec<NaiveDate> = gateway
            .list_daily_records(id)
            .await
            .unwrap()
            .iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, vec![day(9), day(5), day(2)]);

        assert!(gateway.list_daily_records(404).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ping() {
        let gateway = SqliteGateway::in_memory().await.unwrap();
        gateway.ping().await.unwrap();
        assert_eq!(gateway.backend(), StorageBackend::Sqlite);
    }
}
