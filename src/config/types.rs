//! Configuration type definitions
//!
//! Defines the console configuration record and its nested sections. The
//! serde field tags mirror the YAML wire format and are authoritative for
//! compatibility with existing configuration files.

use serde::{Deserialize, Serialize};

/// Secret key applied when the configuration file does not set one
pub const DEFAULT_JWT_SECRET_KEY: &str = "polarismesh@2021";

/// Session token lifetime in seconds applied when the file does not set one
pub const DEFAULT_JWT_EXPIRED_SECS: u64 = 1800;

/// Options for the JWT session tokens issued by the console
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Key used to sign and verify session tokens (default: `polarismesh@2021`)
    #[serde(rename = "secretKey", default = "default_jwt_secret_key")]
    pub secret_key: String,

    /// Token lifetime in seconds (default: 1800)
    #[serde(default = "default_jwt_expired_secs")]
    pub expired: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret_key: default_jwt_secret_key(),
            expired: default_jwt_expired_secs(),
        }
    }
}

fn default_jwt_secret_key() -> String {
    DEFAULT_JWT_SECRET_KEY.to_string()
}

fn default_jwt_expired_secs() -> u64 {
    DEFAULT_JWT_EXPIRED_SECS
}

/// Web server section: bind options, downstream service URLs and the static
/// file root served to browsers
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WebServerConfig {
    /// HTTP framework run mode (e.g. `debug` or `release`)
    pub mode: String,

    /// Address the console listens on
    #[serde(rename = "listenIP")]
    pub listen_ip: String,

    /// Port the console listens on
    #[serde(rename = "listenPort")]
    pub listen_port: u16,

    /// Naming v1 API of the control plane
    #[serde(rename = "namingV1URL")]
    pub naming_v1_url: String,

    /// Naming v2 API of the control plane
    #[serde(rename = "namingV2URL")]
    pub naming_v2_url: String,

    /// Authentication API of the control plane
    #[serde(rename = "authURL")]
    pub auth_url: String,

    /// Monitoring query API
    #[serde(rename = "monitorURL")]
    pub monitor_url: String,

    /// Configuration-group API of the control plane
    #[serde(rename = "configURL")]
    pub config_url: String,

    /// Root directory of the static web assets
    #[serde(rename = "webPath")]
    pub web_path: String,

    /// JWT session token options
    pub jwt: JwtConfig,
}

/// Address and access token of the control-plane backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PolarisServerConfig {
    /// Backend host:port
    pub address: String,

    /// Access token presented to the backend
    #[serde(rename = "polarisToken")]
    pub polaris_token: String,
}

/// Address of the monitoring backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MonitorServerConfig {
    /// Monitoring backend host:port
    pub address: String,
}

/// Toggle and token for the internal OA authority system
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OaAuthorityConfig {
    /// Whether OA authentication is enabled
    #[serde(rename = "enableOAAuth")]
    pub enable_oa_auth: bool,

    /// Token presented to the OA authority
    #[serde(rename = "oaToken")]
    pub oa_token: String,
}

/// Endpoints and token for the internal staff/department directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HrDataConfig {
    /// Whether directory lookups are enabled
    #[serde(rename = "enableHrData")]
    pub enable_hr_data: bool,

    /// Base URL of the directory service
    #[serde(rename = "unitAddress")]
    pub unit_address: String,

    /// Department lookup endpoint path
    #[serde(rename = "departmentURL")]
    pub department_url: String,

    /// Staff lookup endpoint path
    #[serde(rename = "staffURL")]
    pub staff_url: String,

    /// Token presented to the directory service
    #[serde(rename = "hrToken")]
    pub hr_token: String,
}

/// Reply shape returned by the staff-directory lookup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StaffDepartment {
    /// Staff member display name
    #[serde(rename = "ChnName")]
    pub name: String,

    /// Full department path of the staff member
    #[serde(rename = "DeptNameString")]
    pub department: String,
}

/// Connection settings for the internal observability system
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ZhiYanConfig {
    /// Reporting endpoint host
    pub host: String,

    /// Reporting token
    pub token: String,

    /// Project name reported alongside metrics
    #[serde(rename = "projectName")]
    pub project_name: String,
}

/// Console configuration record, decoded once at startup and treated as
/// immutable for the remainder of the process lifetime
///
/// # Example
///
/// ```no_run
/// use polaris_console_bootstrap::ConfigLoader;
///
/// # fn main() -> Result<(), polaris_console_bootstrap::ConsoleConfigError> {
/// let config = ConfigLoader::load("polaris-console.yaml")?;
/// println!(
///     "console listening on {}:{}",
///     config.web_server.listen_ip, config.web_server.listen_port
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Opaque options block handed to the logging subsystem, not interpreted
    /// here
    pub logger: serde_yaml::Value,

    /// Web server settings
    #[serde(rename = "webServer")]
    pub web_server: WebServerConfig,

    /// Control-plane backend settings
    #[serde(rename = "polarisServer")]
    pub polaris_server: PolarisServerConfig,

    /// Monitoring backend settings
    #[serde(rename = "monitorServer")]
    pub monitor_server: MonitorServerConfig,

    /// OA authority settings
    #[serde(rename = "oaAuthority")]
    pub oa_authority: OaAuthorityConfig,

    /// Staff/department directory settings
    #[serde(rename = "hrData")]
    pub hr_data: HrDataConfig,

    /// Observability system settings
    #[serde(rename = "zhiYan")]
    pub zhi_yan: ZhiYanConfig,
}
