// --- File: crates/services/wellbook_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Builds the concrete Zoom, SMTP, and database services once at startup and
//! hands them out as trait objects for the booking routes.
use std::error::Error;
use std::sync::Arc;
use tracing::info;

use wellbook_common::services::{
    BoxedError, MeetingService, NotificationService, ServiceFactory, SlotStore,
};
use wellbook_config::AppConfig;
use wellbook_db::{BookedSlotRepository, DbClient, SqlBookedSlotRepository};
use wellbook_mailer::service::SmtpNotificationService;
use wellbook_zoom::service::ZoomMeetingService;

/// Service factory for the backend binary.
pub struct WellbookServiceFactory {
    /// Configuration the factory was built from. Kept so services added
    /// later can be initialized without changing the constructor shape.
    #[allow(dead_code)]
    config: Arc<AppConfig>,
    meeting_service: Arc<dyn MeetingService<Error = BoxedError>>,
    notification_service: Arc<dyn NotificationService<Error = BoxedError>>,
    slot_store: Arc<dyn SlotStore<Error = BoxedError>>,
}

impl WellbookServiceFactory {
    /// Create the factory, connecting to the database and preparing the
    /// booked slots schema.
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, Box<dyn Error + Send + Sync>> {
        info!("Initializing Zoom meeting service...");
        let meeting_service = Arc::new(ZoomMeetingService::new(config.clone()));

        info!("Initializing SMTP notification service...");
        let notification_service = Arc::new(SmtpNotificationService::new(config.clone())?);

        info!("Connecting to the booked slots database...");
        let db_client = DbClient::new(&config).await?;
        let repository = SqlBookedSlotRepository::new(db_client);
        repository.init_schema().await?;

        Ok(Self {
            config,
            meeting_service,
            notification_service,
            slot_store: Arc::new(repository),
        })
    }
}

impl ServiceFactory for WellbookServiceFactory {
    fn meeting_service(&self) -> Arc<dyn MeetingService<Error = BoxedError>> {
        self.meeting_service.clone()
    }

    fn notification_service(&self) -> Arc<dyn NotificationService<Error = BoxedError>> {
        self.notification_service.clone()
    }

    fn slot_store(&self) -> Arc<dyn SlotStore<Error = BoxedError>> {
        self.slot_store.clone()
    }
}
