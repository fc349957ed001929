//! SQL implementation of the booked slot repository
//!
//! This module provides a SQL implementation of the BookedSlotRepository trait.
//! The same type also implements the SlotStore abstraction used by the booking
//! flow, boxing the concrete database errors at that seam.

use crate::error::DbError;
use crate::repositories::booked_slot::BookedSlotRepository;
use crate::DbClient;
use sqlx::Row;
use tracing::{debug, error, info};
use wellbook_common::services::{BoxFuture, BoxedError, SlotStore};

/// SQL implementation of the booked slot repository
#[derive(Debug, Clone)]
pub struct SqlBookedSlotRepository {
    /// The database client
    db_client: DbClient,
}

impl SqlBookedSlotRepository {
    /// Create a new SQL booked slot repository
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

impl BookedSlotRepository for SqlBookedSlotRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing booked slot schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS booked_slots (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                appointment_date TEXT NOT NULL,
                appointment_time TEXT NOT NULL
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Booked slot schema initialized successfully");
        Ok(())
    }

    async fn insert_slot(
        &self,
        appointment_date: &str,
        appointment_time: &str,
    ) -> Result<(), DbError> {
        debug!(
            "Recording booked slot on {} at {}",
            appointment_date, appointment_time
        );

        let query = r#"
            INSERT INTO booked_slots (appointment_date, appointment_time)
            VALUES ($1, $2)
        "#;

        sqlx::query(query)
            .bind(appointment_date)
            .bind(appointment_time)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to record booked slot: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(())
    }

    async fn find_times_by_date(&self, appointment_date: &str) -> Result<Vec<String>, DbError> {
        debug!("Finding booked times on {}", appointment_date);

        let query = r#"
            SELECT appointment_time
            FROM booked_slots
            WHERE appointment_date = $1
        "#;

        let rows = sqlx::query(query)
            .bind(appointment_date)
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list booked slots: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        let times = rows
            .into_iter()
            .map(|row| row.try_get("appointment_time").unwrap_or_default())
            .collect();

        Ok(times)
    }
}

impl SlotStore for SqlBookedSlotRepository {
    type Error = BoxedError;

    fn record_booking(
        &self,
        appointment_date: &str,
        appointment_time: &str,
    ) -> BoxFuture<'_, (), Self::Error> {
        let date = appointment_date.to_string();
        let time = appointment_time.to_string();

        Box::pin(async move {
            self.insert_slot(&date, &time)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }

    fn list_booked_times(
        &self,
        appointment_date: &str,
    ) -> BoxFuture<'_, Vec<String>, Self::Error> {
        let date = appointment_date.to_string();

        Box::pin(async move {
            self.find_times_by_date(&date)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }
}
