//! Core Module - Componenti infrastrutturali della libreria
//!
//! Questo modulo contiene tutti i componenti "core":
//! - Controllo dei ruoli
//! - Configurazione
//! - Gestione errori
//! - Logging
//! - Stato del client

pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;

// Re-exports per facilitare l'import
pub use auth::require_operator;
pub use config::Config;
pub use error::{AppError, AppResult, ErrorKind};
pub use logging::init_tracing;
pub use state::ClientState;
