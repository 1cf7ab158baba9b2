use std::path::Path;
use std::sync::Arc;

use config::{Config, File};
use geoclick_ogc::endpoint::ServiceEndpointConfig;
use geoclick_ogc::wfs::WfsClient;
use geoclick_ogc::wms::WmsClient;
use serde::{Deserialize, Serialize};

use super::AppError;
use crate::click::SessionConfig;

/// contents of the application configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub wms: Option<ServiceEndpointConfig>,
    pub wfs: Option<ServiceEndpointConfig>,
    #[serde(default)]
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_file(configuration_file: &str) -> Result<Self, AppError> {
        let filepath = Path::new(configuration_file);
        let config = Config::builder()
            .add_source(File::from(filepath))
            .build()
            .map_err(|e| AppError::Config {
                path: configuration_file.to_string(),
                message: e.to_string(),
            })?;
        config
            .try_deserialize::<AppConfig>()
            .map_err(|e| AppError::Config {
                path: configuration_file.to_string(),
                message: e.to_string(),
            })
    }

    pub fn wms_client(&self) -> Result<Option<WmsClient>, AppError> {
        match &self.wms {
            None => Ok(None),
            Some(conf) => {
                let http = Arc::new(conf.build_client()?);
                Ok(Some(WmsClient::new(conf.build()?, http)))
            }
        }
    }

    pub fn wfs_client(&self) -> Result<Option<WfsClient>, AppError> {
        match &self.wfs {
            None => Ok(None),
            Some(conf) => {
                let http = Arc::new(conf.build_client()?);
                Ok(Some(WfsClient::new(conf.build()?, http)))
            }
        }
    }
}
