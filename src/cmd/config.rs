use clap::{Args, Subcommand};

use crate::config::AppConfig;
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the resolved configuration (secrets masked).
    Show,
}

pub fn run(command: ConfigCommand, config: &AppConfig) -> AppResult<()> {
    match command {
        ConfigCommand::Show => {
            for line in render(config) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn render(config: &AppConfig) -> Vec<String> {
    let exclusions = config.exclusions.iter().collect::<Vec<_>>().join(", ");
    vec![
        format!("Workspace root: {}", config.workspace_root.display()),
        format!("Gemini API key: {}", mask_secret(&config.gemini_api_key)),
        format!("Gemini model: {}", config.gemini_model),
        format!("Gemini base URL: {}", config.gemini_base_url),
        format!("Request timeout: {}s", config.request_timeout.as_secs()),
        format!("Temperature: {}", config.temperature),
        format!("Excluded paths: {exclusions}"),
    ]
}

fn mask_secret(value: &Option<String>) -> String {
    let Some(token) = value.as_deref().filter(|token| !token.is_empty()) else {
        return "<not set>".to_string();
    };

    let chars = token.chars().collect::<Vec<_>>();
    if chars.len() > 6 {
        let prefix = chars[..3].iter().collect::<String>();
        let suffix = chars[chars.len() - 3..].iter().collect::<String>();
        format!("{prefix}***{suffix}")
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn masks_secrets() {
        assert_eq!(mask_secret(&Some("AIzaSyExample123".to_string())), "AIz***123");
        assert_eq!(mask_secret(&Some("short".to_string())), "***");
        assert_eq!(mask_secret(&Some(String::new())), "<not set>");
        assert_eq!(mask_secret(&None), "<not set>");
    }

    #[test]
    fn masks_multibyte_secrets_on_char_boundaries() {
        assert_eq!(mask_secret(&Some("ключ-секрет".to_string())), "клю***рет");
        assert_eq!(mask_secret(&Some("aé€😀bc😀".to_string())), "aé€***bc😀");
        assert_eq!(mask_secret(&Some("é€😀".to_string())), "***");
    }

    #[test]
    fn renders_resolved_values_without_raw_key() {
        let config = AppConfig::from_lookup(Path::new("/work"), |key| match key {
            "GEMINI_API_KEY" => Some("AIzaSyExample123".to_string()),
            _ => None,
        })
        .unwrap();

        let lines = render(&config);

        assert!(lines.contains(&"Gemini API key: AIz***123".to_string()));
        assert!(lines.contains(&"Gemini model: gemini-2.5-flash".to_string()));
        assert!(lines.contains(&"Request timeout: 60s".to_string()));
        assert!(lines.iter().all(|line| !line.contains("AIzaSyExample123")));
    }
}
