use crate::access::AccessGate;

#[derive(serde::Deserialize)]
pub struct StaticConfiguration {
    pub database: DatabaseConfiguration,
    pub application_port: u16,
    pub store: StoreConfiguration,
    #[serde(default)]
    pub access: AccessConfiguration,
    #[serde(default)]
    pub store_backend: StoreBackend,
}

#[derive(serde::Deserialize)]
pub struct DatabaseConfiguration {
    pub username: String,
    pub password: String,
    pub port: u16,
    pub host: String,
    pub database_name: String,
}

impl DatabaseConfiguration {
    pub fn connection_string(&self) -> String {
        format!(
            "mongodb://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port)
    }
}

/// Where resumes live and which field is used for point lookups.
///
/// Both fields are required; handlers receive this through the router state.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct StoreConfiguration {
    pub table_name: String,
    pub primary_key_name: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct AccessConfiguration {
    #[serde(default = "default_groups_claim")]
    pub groups_claim: String,
    #[serde(default = "default_privileged_group")]
    pub privileged_group: String,
}

impl Default for AccessConfiguration {
    fn default() -> Self {
        Self {
            groups_claim: default_groups_claim(),
            privileged_group: default_privileged_group(),
        }
    }
}

impl AccessConfiguration {
    pub fn gate(&self) -> AccessGate {
        AccessGate::new(&self.groups_claim, &self.privileged_group)
    }
}

fn default_groups_claim() -> String {
    String::from(crate::access::GROUPS_CLAIM)
}

fn default_privileged_group() -> String {
    String::from(crate::access::PRIVILEGED_GROUP)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Mongodb,
    Memory,
}

pub fn get_static_configuration() -> Result<StaticConfiguration, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(
            config::File::new("configuration.yaml", config::FileFormat::Yaml)
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
        )
        .build()?;

    settings.try_deserialize::<StaticConfiguration>()
}
