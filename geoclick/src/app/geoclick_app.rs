use clap::{Parser, Subcommand};
use geoclick_core::model::{BoundingBox, Coordinate};
use geoclick_ogc::protocol::wms::DEFAULT_TILE_SIZE;
use serde::{Deserialize, Serialize};

use super::{AppConfig, AppError, StdoutSink};
use crate::click::{ClickResolution, ClickResolver};

/// Command line tool for resolving map clicks against OGC WMS/WFS services
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct GeoclickApp {
    #[command(subcommand)]
    pub op: GeoclickOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum GeoclickOperation {
    /// resolve a single click into a feature and print it with its marker
    Click {
        /// configuration file defining the WMS/WFS endpoints and session toggles
        #[arg(short, long)]
        configuration_file: String,

        /// latitude of the click in EPSG:4326 degrees
        #[arg(long, allow_hyphen_values(true))]
        lat: f64,

        /// longitude of the click in EPSG:4326 degrees
        #[arg(long, allow_hyphen_values(true))]
        lng: f64,

        /// query this WFS layer instead of the configured session layer
        #[arg(short, long)]
        layer: Option<String>,

        /// ignore the WFS endpoint and synthesize a test feature at the click
        #[arg(long)]
        test_mode: bool,
    },
    /// list the named layers advertised by the WMS endpoint
    Layers {
        #[arg(short, long)]
        configuration_file: String,
    },
    /// print the WMS GetMap url for a layer overlay
    MapUrl {
        #[arg(short, long)]
        configuration_file: String,

        /// layer to render. defaults to the configured session layer
        #[arg(short, long)]
        layer: Option<String>,

        /// bounding box (format: minLng,minLat,maxLng,maxLat). defaults to the whole world
        #[arg(short, long, allow_hyphen_values(true))]
        bbox: Option<BoundingBox>,

        #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
        width: u32,

        #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
        height: u32,
    },
    /// print the raw WFS capabilities document
    WfsCapabilities {
        #[arg(short, long)]
        configuration_file: String,
    },
}

impl GeoclickOperation {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            GeoclickOperation::Click {
                configuration_file,
                lat,
                lng,
                layer,
                test_mode,
            } => {
                let config = AppConfig::from_file(configuration_file)?;
                let coordinate = Coordinate::try_new(*lat, *lng)?;
                let mut session = config.session.clone();
                if layer.is_some() {
                    session.layer_name = layer.clone();
                }
                if *test_mode {
                    session.wfs_enabled = false;
                }
                let resolver = ClickResolver::new(config.wfs_client()?);
                let resolution = resolver.handle_click(coordinate, &session, &StdoutSink);
                log::info!("click at {coordinate} finished as {resolution}");
                if let ClickResolution::Empty = resolution {
                    eprintln!("no feature found at {coordinate}");
                }
                Ok(())
            }
            GeoclickOperation::Layers { configuration_file } => {
                let config = AppConfig::from_file(configuration_file)?;
                let wms = config.wms_client()?.ok_or(AppError::MissingEndpoint("wms"))?;
                let layers = wms
                    .get_capabilities()
                    .ok_or(AppError::Unavailable("WMS GetCapabilities"))?;
                let out = serde_json::to_string_pretty(&layers)
                    .map_err(|e| AppError::Output(e.to_string()))?;
                println!("{out}");
                Ok(())
            }
            GeoclickOperation::MapUrl {
                configuration_file,
                layer,
                bbox,
                width,
                height,
            } => {
                let config = AppConfig::from_file(configuration_file)?;
                let wms = config.wms_client()?.ok_or(AppError::MissingEndpoint("wms"))?;
                let layer_name = layer
                    .as_deref()
                    .or(config.session.layer_name.as_deref())
                    .ok_or_else(|| {
                        AppError::InvalidInput(
                            "no layer given and no session layer configured".to_string(),
                        )
                    })?;
                if !config.session.wms_enabled {
                    log::warn!("WMS overlay is disabled for this session");
                }
                let bbox = bbox.unwrap_or(BoundingBox::WORLD);
                println!("{}", wms.build_map_url(layer_name, &bbox, *width, *height));
                Ok(())
            }
            GeoclickOperation::WfsCapabilities { configuration_file } => {
                let config = AppConfig::from_file(configuration_file)?;
                let wfs = config.wfs_client()?.ok_or(AppError::MissingEndpoint("wfs"))?;
                let doc = wfs
                    .get_capabilities()
                    .ok_or(AppError::Unavailable("WFS GetCapabilities"))?;
                println!("{doc}");
                Ok(())
            }
        }
    }
}
