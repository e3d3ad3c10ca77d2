use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::change::ExclusionList;
use crate::error::{AppError, AppResult};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const SAMPLING_TEMPERATURE: f32 = 0.7;

const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "GOOGLE_GENERATIVE_AI_API_KEY"];
const MODEL_VAR: &str = "SCRIBE_MODEL";
const BASE_URL_VAR: &str = "SCRIBE_GEMINI_BASE_URL";
const TIMEOUT_VAR: &str = "SCRIBE_TIMEOUT_SECS";
const EXCLUDE_VAR: &str = "SCRIBE_EXCLUDE";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub request_timeout: Duration,
    pub temperature: f32,
    pub exclusions: ExclusionList,
    pub workspace_root: PathBuf,
}

impl AppConfig {
    pub fn load(workspace_root: &Path) -> AppResult<Self> {
        Self::from_lookup(workspace_root, |key| env::var(key).ok())
    }

    pub fn from_lookup<F>(workspace_root: &Path, lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let gemini_api_key = API_KEY_VARS.iter().find_map(|key| non_empty(*key));
        let gemini_model = non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let gemini_base_url =
            non_empty(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());

        let timeout_secs = match non_empty(TIMEOUT_VAR) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(AppError::Configuration(format!(
                        "{TIMEOUT_VAR} must be a positive number of seconds, got '{raw}'"
                    )));
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        let extra_exclusions = non_empty(EXCLUDE_VAR)
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|entry| !entry.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        Ok(Self {
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            temperature: SAMPLING_TEMPERATURE,
            exclusions: ExclusionList::default().with_extra(extra_exclusions),
            workspace_root: workspace_root.to_path_buf(),
        })
    }
}
