use crate::error::{AdvisorError, Result};
use crate::models::{Crop, CropStage, IrrigationLevel, SoilType};
use dialoguer::{Confirm, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "farmadvisor";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults used when a command omits a field attribute.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldConfig {
    #[serde(default = "default_soil_type")]
    pub soil_type: String,
    #[serde(default = "default_crop_name")]
    pub crop_name: String,
    #[serde(default = "default_crop_stage")]
    pub crop_stage: String,
    #[serde(default = "default_irrigation_level")]
    pub irrigation_level: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            soil_type: default_soil_type(),
            crop_name: default_crop_name(),
            crop_stage: default_crop_stage(),
            irrigation_level: default_irrigation_level(),
        }
    }
}

fn default_soil_type() -> String {
    "loam".into()
}

fn default_crop_name() -> String {
    "wheat".into()
}

fn default_crop_stage() -> String {
    "vegetative".into()
}

fn default_irrigation_level() -> String {
    "medium".into()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Load configuration from an explicit path or the standard locations.
    ///
    /// An explicit path must exist. Without one, a missing file is not an
    /// error and the built-in defaults apply.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(AdvisorError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!(path = %config_path.display(), "Loading config");

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AdvisorError::Config(format!("Failed to read config: {}", e)))?;

        let config_str = Self::substitute_env_vars(&config_str)?;

        Self::parse(&config_str)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AdvisorError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/farmadvisor/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AdvisorError::Config("Cannot determine config directory".into()))?
            .join(APP_DIR);
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive(target: Option<PathBuf>) -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up your default field.");
        println!();

        let soil_names: Vec<&str> = SoilType::ALL.iter().map(|s| s.as_str()).collect();
        let soil_idx = Select::new()
            .with_prompt("  Soil type")
            .items(&soil_names)
            .default(1)
            .interact()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        let crop_names: Vec<&str> = Crop::ALL.iter().map(|c| c.as_str()).collect();
        let crop_idx = Select::new()
            .with_prompt("  Crop")
            .items(&crop_names)
            .default(1)
            .interact()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        let stage_names: Vec<&str> = CropStage::ALL.iter().map(|s| s.as_str()).collect();
        let stage_idx = Select::new()
            .with_prompt("  Growth stage")
            .items(&stage_names)
            .default(1)
            .interact()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        let level_names: Vec<&str> = IrrigationLevel::ALL.iter().map(|l| l.label()).collect();
        let level_idx = Select::new()
            .with_prompt("  Irrigation level")
            .items(&level_names)
            .default(1)
            .interact()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        println!();

        let json: bool = Confirm::new()
            .with_prompt("  Print JSON by default?")
            .default(false)
            .interact()
            .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;

        let config = Config {
            field: FieldConfig {
                soil_type: SoilType::ALL[soil_idx].as_str().to_lowercase(),
                crop_name: Crop::ALL[crop_idx].as_str().to_lowercase(),
                crop_stage: CropStage::ALL[stage_idx].as_str().to_lowercase(),
                irrigation_level: IrrigationLevel::ALL[level_idx].as_str().to_lowercase(),
            },
            output: OutputConfig {
                format: if json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Text
                },
                pretty: true,
            },
        };

        let config_path = match target {
            Some(p) => p,
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let overwrite = Confirm::new()
                .with_prompt(format!("  Overwrite {}?", config_path.display()))
                .default(false)
                .interact()
                .map_err(|e| AdvisorError::Config(format!("Input error: {}", e)))?;
            if !overwrite {
                return Err(AdvisorError::Config("Setup cancelled".into()));
            }
        }

        config.save(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn save(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;

        let content = format!(
            "# Farm Advisor Configuration\n# Generated by `farmadvisor init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| AdvisorError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            match std::env::var(var_name) {
                Ok(value) => result = result.replace(placeholder, &value),
                Err(_) => tracing::warn!(var = var_name, "Config references unset variable"),
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.field.soil_type, "loam");
        assert_eq!(config.field.irrigation_level, "medium");
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.pretty);
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let yaml = "field:\n  crop_name: rice\noutput:\n  format: json\n";
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.field.crop_name, "rice");
        assert_eq!(config.field.soil_type, "loam");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
    }

    #[test]
    fn invalid_format_is_config_error() {
        let err = Config::parse("output:\n  format: xml\n").unwrap_err();
        assert!(matches!(err, AdvisorError::Config(_)));
    }

    #[test]
    fn substitutes_set_variables_only() {
        std::env::set_var("FARMADVISOR_TEST_CROP", "maize");
        let text = "crop_name: ${FARMADVISOR_TEST_CROP}\nsoil: ${FARMADVISOR_TEST_UNSET_VAR}";
        let out = Config::substitute_env_vars(text).unwrap();
        assert!(out.contains("crop_name: maize"));
        assert!(out.contains("${FARMADVISOR_TEST_UNSET_VAR}"));
    }

    #[test]
    fn missing_override_is_an_error() {
        let path = PathBuf::from("/nonexistent/farmadvisor/config.yaml");
        assert!(Config::load(Some(path)).is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("farmadvisor-test-{}", std::process::id()));
        let path = dir.join("config.yaml");
        let mut config = Config::default();
        config.field.crop_name = "cotton".into();
        config.save(&path).unwrap();

        let loaded = Config::load(Some(path)).unwrap();
        assert_eq!(loaded, config);
        let _ = std::fs::remove_dir_all(dir);
    }
}
