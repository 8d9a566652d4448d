//! Configuration module
//!
//! Provides the console configuration record and the YAML file loader.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    Config, HrDataConfig, JwtConfig, MonitorServerConfig, OaAuthorityConfig, PolarisServerConfig,
    StaffDepartment, WebServerConfig, ZhiYanConfig, DEFAULT_JWT_EXPIRED_SECS,
    DEFAULT_JWT_SECRET_KEY,
};
