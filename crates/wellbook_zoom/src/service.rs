// --- File: crates/wellbook_zoom/src/service.rs ---
//! Zoom meeting service implementation.
//!
//! This module provides an implementation of the MeetingService trait for Zoom.

use std::sync::Arc;

use wellbook_common::services::{
    BoxFuture, BoxedError, MeetingRequest, MeetingService, ScheduledMeeting,
};
use wellbook_config::AppConfig;

use crate::logic;

/// Zoom meeting service implementation.
pub struct ZoomMeetingService {
    config: Arc<AppConfig>,
}

impl ZoomMeetingService {
    /// Create a new Zoom meeting service.
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }
}

impl MeetingService for ZoomMeetingService {
    type Error = BoxedError;

    fn schedule_meeting(
        &self,
        request: MeetingRequest,
    ) -> BoxFuture<'_, ScheduledMeeting, Self::Error> {
        let config = self.config.clone();

        Box::pin(async move {
            logic::schedule_meeting(&config.zoom, &request)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }
}
