use serde::{Deserialize, Serialize};

/// bakery.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BakeryConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Image-creation endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Tech stack tag preselected when the form opens
    #[serde(default = "default_tech_stack")]
    pub tech_stack: String,
    /// Executable name used when the user leaves the field untouched
    #[serde(default = "default_executable_file")]
    pub executable_file: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            tech_stack: default_tech_stack(),
            executable_file: default_executable_file(),
        }
    }
}

impl BakeryConfig {
    /// Load from bakery.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("bakery.toml");
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_endpoint() -> String {
    "http://127.0.0.1:8000/create_docker_image/".to_owned()
}

fn default_tech_stack() -> String {
    "python:3.8".to_owned()
}

fn default_executable_file() -> String {
    "app.py".to_owned()
}
