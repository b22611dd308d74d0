//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction. Everything in it
//! is read-only after startup and cheap to clone.

use crate::config::AppConfig;
use crate::services::catalog::Catalog;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Meal and workout catalog
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }

    /// Build state from config, loading the catalog it points at
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let catalog = Catalog::from_config(&config.catalog)?;
        Ok(Self::new(config, catalog))
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the catalog
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
