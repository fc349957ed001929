// --- File: crates/wellbook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Database Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g. sqlite:wellbook.db, loaded via WELLBOOK__DATABASE__URL
}

// --- Zoom Config ---
// Holds non-secret Zoom config. Secret loaded directly from env var: ZOOM_CLIENT_SECRET
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ZoomConfig {
    pub account_id: String,
    pub client_id: String,
    /// IANA zone appointment times are interpreted in. Defaults to Asia/Kolkata.
    #[serde(default)]
    pub time_zone: Option<String>,
}

// --- SMTP Config ---
// Holds non-secret SMTP config. Password loaded directly from env var: SMTP_PASSWORD
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Sender address on outgoing mail. Defaults to `username`.
    #[serde(default)]
    pub from: Option<String>,
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub zoom: ZoomConfig,
    pub smtp: SmtpConfig,
}
