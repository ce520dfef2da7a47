//! Config module.
//! Reads `ILE_`-prefixed environment variables (and `.env` if present) via envy.
//! Every field has a default, so an empty environment yields a working config.

use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;
use std::time::Duration;

/// Id of the published Google Sheet holding the client list.
const SHEET_ID: &str = "1R34HPr0Co5PmUyio6UA5fH6Ml86_t2zaAaaCLnqlAbc";
const ENV_PREFIX: &str = "ILE_";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// CSV export URL of the sheet
    #[serde(default = "default_sheet_url")]
    pub sheet_url: String,
    /// Clients revealed per basic draw
    #[serde(default = "default_draw_count")]
    pub draw_count: usize,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_sheet_url() -> String {
    format!("https://docs.google.com/spreadsheets/d/{}/export?format=csv", SHEET_ID)
}

fn default_draw_count() -> usize {
    3
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_url: default_sheet_url(),
            draw_count: default_draw_count(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads `.env` if it exists, then deserializes the prefixed environment.
    pub fn load() -> Result<Self> {
        dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .context("Invalid ILE_* configuration")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
