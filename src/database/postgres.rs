//! Implementación PostgreSQL del gateway

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::{debug, info};

use super::gateway::{
    daily_record_not_found, driver_not_found, map_child_insert_error, map_driver_insert_error,
    DriverGateway, GatewayResult,
};
use super::schema::postgres as sql;
use crate::config::{DatabaseConfig, StorageBackend};
use crate::models::{DailyRecord, Driver, NewDailyRecord, NewDriver, OperatingCost};

pub struct PostgresGateway {
    pool: PgPool,
}

impl PostgresGateway {
    pub async fn connect(config: &DatabaseConfig) -> GatewayResult<Self> {
        let pool = config.create_pg_pool().await?;
        Self::from_pool(pool).await
    }

    pub async fn from_pool(pool: PgPool) -> GatewayResult<Self> {
        for statement in sql::CREATE_TABLES {
            sqlx::query(statement).execute(&pool).await?;
        }
        info!("✅ Schema PostgreSQL verificado");
        Ok(Self { pool })
    }
}

#[async_trait]
impl DriverGateway for PostgresGateway {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Postgres
    }

    async fn ping(&self) -> GatewayResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn create_driver(&self, driver: &NewDriver) -> GatewayResult<i64> {
        let (id,): (i64,) = sqlx::query_as(sql::INSERT_DRIVER)
            .bind(&driver.name)
            .bind(&driver.phone)
            .bind(&driver.car_model)
            .bind(driver.avg_consumption)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_driver_insert_error(e, &driver.phone))?;

        debug!("🆕 Motorista {} insertado en PostgreSQL", id);
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
