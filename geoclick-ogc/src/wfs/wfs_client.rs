use std::sync::Arc;

use geoclick_core::model::feature::FeatureCollection;
use geoclick_core::model::{BoundingBox, Coordinate};
use geojson::GeoJson;

use crate::endpoint::ServiceEndpoint;
use crate::protocol::{wfs, CRS_EPSG_4326};
use crate::transport::HttpClient;
use crate::OgcError;

/// WFS 1.1.0 adapter, the query engine behind map clicks.
///
/// the plain query methods contain every transport and parse failure: they
/// log it and return `None`, which callers must read as "no answer
/// available". an empty collection instead means the server answered and
/// found nothing. no retries are attempted.
#[derive(Clone)]
pub struct WfsClient {
    endpoint: ServiceEndpoint,
    http: Arc<dyn HttpClient>,
}

impl WfsClient {
    pub fn new(endpoint: ServiceEndpoint, http: Arc<dyn HttpClient>) -> Self {
        Self { endpoint, http }
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    /// GetFeature url for a `bbox` filter string, used as given
    pub fn bbox_query_url(&self, bbox: &str, layer_name: &str) -> String {
        self.endpoint.request_url(&[
            ("service", wfs::SERVICE),
            ("version", wfs::VERSION),
            ("request", wfs::GET_FEATURE),
            ("typeName", layer_name),
            ("outputFormat", wfs::OUTPUT_FORMAT_JSON),
            ("bbox", bbox),
            ("srsname", CRS_EPSG_4326),
        ])
    }

    pub fn point_query_url(&self, coordinate: &Coordinate, layer_name: &str, buffer: f64) -> String {
        let bbox = BoundingBox::from_point(coordinate, buffer);
        self.bbox_query_url(&bbox.serialize(), layer_name)
    }

    pub fn capabilities_url(&self) -> String {
        self.endpoint.request_url(&[
            ("service", wfs::SERVICE),
            ("version", wfs::VERSION),
            ("request", wfs::GET_CAPABILITIES),
        ])
    }

    pub fn try_query_by_point(
        &self,
        coordinate: &Coordinate,
        layer_name: &str,
        buffer: f64,
    ) -> Result<FeatureCollection, OgcError> {
        let url = self.point_query_url(coordinate, layer_name, buffer);
        self.fetch_features(&url)
    }

    /// features of `layer_name` within `buffer` degrees of a point
    pub fn query_by_point(
        &self,
        coordinate: &Coordinate,
        layer_name: &str,
        buffer: f64,
    ) -> Option<FeatureCollection> {
        contain(self.try_query_by_point(coordinate, layer_name, buffer))
    }

    /// [`WfsClient::query_by_point`] with the default ~100m tolerance
    pub fn query_at(&self, coordinate: &Coordinate, layer_name: &str) -> Option<FeatureCollection> {
        self.query_by_point(coordinate, layer_name, wfs::DEFAULT_POINT_BUFFER)
    }

    pub fn try_query_by_bbox(
        &self,
        bbox: &str,
        layer_name: &str,
    ) -> Result<FeatureCollection, OgcError> {
        let url = self.bbox_query_url(bbox, layer_name);
        self.fetch_features(&url)
    }

    /// features of `layer_name` within a caller-formatted bbox string
    pub fn query_by_bbox(&self, bbox: &str, layer_name: &str) -> Option<FeatureCollection> {
        contain(self.try_query_by_bbox(bbox, layer_name))
    }

    pub fn try_get_capabilities(&self) -> Result<String, OgcError> {
        let url = self.capabilities_url();
        let body = self.http.get(&url, self.endpoint.credentials())?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// the unparsed capabilities document. bytes that are not UTF-8 (for
    /// example from an ISO-8859-1 document) are replaced, not rejected.
    pub fn get_capabilities(&self) -> Option<String> {
        match self.try_get_capabilities() {
            Ok(doc) => Some(doc),
            Err(e) => {
                log::error!("WFS GetCapabilities error: {e}");
                None
            }
        }
    }

    fn fetch_features(&self, url: &str) -> Result<FeatureCollection, OgcError> {
        let body = self.http.get(url, self.endpoint.credentials())?;
        let parse_err = |message: String| OgcError::Parse {
            document: "WFS GetFeature",
            message,
        };
        let text = std::str::from_utf8(&body)
            .map_err(|e| parse_err(format!("body is not valid UTF-8: {e}")))?;
        match text.parse::<GeoJson>().map_err(|e| parse_err(e.to_string()))? {
            GeoJson::FeatureCollection(collection) => {
                log::debug!("WFS GetFeature returned {} features", collection.features.len());
                Ok(collection)
            }
            _ => Err(parse_err(
                "geojson response must be a FeatureCollection".to_string(),
            )),
        }
    }
}

fn contain(result: Result<FeatureCollection, OgcError>) -> Option<FeatureCollection> {
    match result {
        Ok(collection) => Some(collection),
        Err(e) => {
            log::error!("WFS GetFeature error: {e}");
            None
        }
    }
}
