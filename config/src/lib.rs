use std::path::PathBuf;

use anyhow::Result;
use domain::exporting::ExportQuoting;
use domain::formatting::ScoreFormatting;
use envy::Error;
use serde::Deserialize;

pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, Error>;
}

pub trait FromEnvLikeKeyValuePairs: Sized {
    fn from_iter(iter: impl Iterator<Item = (String, String)> + Clone) -> Result<Self, Error>;
}

impl<T: FromEnvLikeKeyValuePairs> FromEnv for T {
    fn from_env() -> Result<Self, Error> {
        // std::env::Vars is not Clone
        Self::from_iter(std::env::vars().collect::<Vec<_>>().into_iter())
    }
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    pub upstream_config: UpstreamConfig,
    pub export_config: ExportConfig,
    pub display_config: DisplayConfig,
}

impl FromEnvLikeKeyValuePairs for AppConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)> + Clone) -> Result<Self, Error> {
        Ok(Self {
            upstream_config: UpstreamConfig::from_iter(iter.clone())?,
            export_config: ExportConfig::from_iter(iter.clone())?,
            display_config: DisplayConfig::from_iter(iter)?,
        })
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct UpstreamConfig {
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint_url() -> String {
    "https://trivia-backend-one.onrender.com/api/players/all".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Deserialize, Debug, Clone)]
pub struct ExportConfig {
    #[serde(default = "default_export_directory")]
    pub directory: PathBuf,
    #[serde(default)]
    pub quoting: ExportQuoting,
}

fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Deserialize, Debug, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_zero_score_is_missing")]
    pub zero_score_is_missing: bool,
}

fn default_zero_score_is_missing() -> bool {
    true
}

impl DisplayConfig {
    pub fn score_formatting(&self) -> ScoreFormatting {
        ScoreFormatting {
            zero_is_missing: self.zero_score_is_missing,
        }
    }
}

impl FromEnvLikeKeyValuePairs for UpstreamConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)>) -> Result<Self, Error> {
        envy::prefixed("DASHBOARD_UPSTREAM_").from_iter(iter)
    }
}

impl FromEnvLikeKeyValuePairs for ExportConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)>) -> Result<Self, Error> {
        envy::prefixed("DASHBOARD_EXPORT_").from_iter(iter)
    }
}

impl FromEnvLikeKeyValuePairs for DisplayConfig {
    fn from_iter(iter: impl Iterator<Item = (String, String)>) -> Result<Self, Error> {
        envy::prefixed("DASHBOARD_DISPLAY_").from_iter(iter)
    }
}
