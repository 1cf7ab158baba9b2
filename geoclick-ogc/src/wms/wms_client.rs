use std::sync::Arc;

use geoclick_core::model::BoundingBox;

use super::{decode_capabilities, parse_capabilities, LayerDescriptor};
use crate::endpoint::ServiceEndpoint;
use crate::protocol::{wms, CRS_EPSG_4326};
use crate::transport::HttpClient;
use crate::OgcError;

/// WMS 1.3.0 adapter. map urls are built without any I/O; only
/// capabilities requests touch the network.
#[derive(Clone)]
pub struct WmsClient {
    endpoint: ServiceEndpoint,
    http: Arc<dyn HttpClient>,
}

impl WmsClient {
    pub fn new(endpoint: ServiceEndpoint, http: Arc<dyn HttpClient>) -> Self {
        Self { endpoint, http }
    }

    pub fn endpoint(&self) -> &ServiceEndpoint {
        &self.endpoint
    }

    /// GetMap url for a transparent PNG of one layer. the layer name is
    /// passed through verbatim apart from url-encoding.
    pub fn build_map_url(
        &self,
        layer_name: &str,
        bbox: &BoundingBox,
        width: u32,
        height: u32,
    ) -> String {
        let width = width.to_string();
        let height = height.to_string();
        let bbox = bbox.serialize();
        self.endpoint.request_url(&[
            ("service", wms::SERVICE),
            ("version", wms::VERSION),
            ("request", wms::GET_MAP),
            ("layers", layer_name),
            ("styles", ""),
            ("format", wms::IMAGE_FORMAT),
            ("transparent", "true"),
            ("width", &width),
            ("height", &height),
            ("crs", CRS_EPSG_4326),
            ("bbox", &bbox),
        ])
    }

    /// [`WmsClient::build_map_url`] at the default 256x256 tile size
    pub fn build_tile_url(&self, layer_name: &str, bbox: &BoundingBox) -> String {
        self.build_map_url(
            layer_name,
            bbox,
            wms::DEFAULT_TILE_SIZE,
            wms::DEFAULT_TILE_SIZE,
        )
    }

    pub fn capabilities_url(&self) -> String {
        self.endpoint.request_url(&[
            ("service", wms::SERVICE),
            ("version", wms::VERSION),
            ("request", wms::GET_CAPABILITIES),
        ])
    }

    pub fn try_get_capabilities(&self) -> Result<Vec<LayerDescriptor>, OgcError> {
        let url = self.capabilities_url();
        let body = self.http.get(&url, self.endpoint.credentials())?;
        let xml = decode_capabilities(&body);
        parse_capabilities(&xml)
    }

    /// the layers offered by the server, or `None` when the server could not
    /// be reached or answered with something unreadable.
    pub fn get_capabilities(&self) -> Option<Vec<LayerDescriptor>> {
        match self.try_get_capabilities() {
            Ok(layers) => {
                log::debug!("WMS capabilities listed {} layers", layers.len());
                Some(layers)
            }
            Err(e) => {
                log::error!("WMS GetCapabilities error: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Credentials;
    use reqwest::Url;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockHttpClient {
        response: Result<Vec<u8>, OgcError>,
        requests: Mutex<Vec<(String, Credentials)>>,
    }

    impl MockHttpClient {
        fn new(response: Result<Vec<u8>, OgcError>) -> Arc<Self> {
            Arc::new(Self {
                response,
                requests: Mutex::new(vec![]),
            })
        }
    }

    impl HttpClient for MockHttpClient {
        fn get(&self, url: &str, credentials: &Credentials) -> Result<Vec<u8>, OgcError> {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), credentials.clone()));
            self.response.clone()
        }
    }

    fn client(http: Arc<MockHttpClient>) -> WmsClient {
        let endpoint = ServiceEndpoint::new(
            "https://example.com/wms",
            Credentials::new("alice", "secret"),
        )
        .unwrap();
        WmsClient::new(endpoint, http)
    }

    fn query_pairs(url: &str) -> Vec<(String, String)> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_map_url_parameters() {
        let wms = client(MockHttpClient::new(Ok(vec![])));
        let bbox = BoundingBox::from_extrema(37.5, 55.7, 37.7, 55.8);
        let url = wms.build_map_url("parcels", &bbox, 512, 512);

        let pairs = query_pairs(&url);
        let params: HashMap<_, _> = pairs.iter().cloned().collect();
        assert_eq!(pairs.len(), params.len(), "duplicated parameter in {url}");
        assert_eq!(params["service"], "WMS");
        assert_eq!(params["version"], "1.3.0");
        assert_eq!(params["request"], "GetMap");
        assert_eq!(params["layers"], "parcels");
        assert_eq!(params["styles"], "");
        assert_eq!(params["format"], "image/png");
        assert_eq!(params["transparent"], "true");
        assert_eq!(params["width"], "512");
        assert_eq!(params["height"], "512");
        assert_eq!(params["crs"], "EPSG:4326");
        assert_eq!(params["bbox"], bbox.serialize());
        assert!(url.starts_with("https://example.com/wms?"));
    }

    #[test]
    fn test_map_url_is_idempotent() {
        let wms = client(MockHttpClient::new(Ok(vec![])));
        let bbox = BoundingBox::WORLD;
        assert_eq!(
            wms.build_map_url("parcels", &bbox, 256, 256),
            wms.build_map_url("parcels", &bbox, 256, 256)
        );
    }

    #[test]
    fn test_map_url_encodes_layer_name() {
        let wms = client(MockHttpClient::new(Ok(vec![])));
        let url = wms.build_tile_url("ws:roads & rails", &BoundingBox::WORLD);
        let params: HashMap<_, _> = query_pairs(&url).into_iter().collect();
        assert_eq!(params["layers"], "ws:roads & rails");
        assert_eq!(params["width"], "256");
        assert_eq!(params["height"], "256");
    }

    #[test]
    fn test_map_url_does_no_io() {
        let http = MockHttpClient::new(Ok(vec![]));
        let wms = client(http.clone());
        let _ = wms.build_tile_url("parcels", &BoundingBox::WORLD);
        assert!(http.requests.lock().unwrap().is_empty());
    }

    #[test]
    fn test_get_capabilities_success() {
        let xml = b"<WMS_Capabilities><Capability>\
            <Layer><Name>roads</Name><Title>Roads</Title></Layer>\
            <Layer><Title>NoName</Title></Layer>\
            </Capability></WMS_Capabilities>";
        let http = MockHttpClient::new(Ok(xml.to_vec()));
        let wms = client(http.clone());

        let layers = wms.get_capabilities().expect("capabilities available");
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].name, "roads");

        let requests = http.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let (url, creds) = &requests[0];
        let params: HashMap<_, _> = query_pairs(url).into_iter().collect();
        assert_eq!(params["request"], "GetCapabilities");
        assert_eq!(params["service"], "WMS");
        assert_eq!(params["version"], "1.3.0");
        assert_eq!(creds, &Credentials::new("alice", "secret"));
    }

    #[test]
    fn test_get_capabilities_http_error_is_unavailable() {
        let http = MockHttpClient::new(Err(OgcError::HttpStatus {
            url: "https://example.com/wms".to_string(),
            status: 503,
        }));
        let wms = client(http);
        assert!(wms.get_capabilities().is_none());
        assert!(matches!(
            wms.try_get_capabilities(),
            Err(OgcError::HttpStatus { status: 503, .. })
        ));
    }

    #[test]
    fn test_get_capabilities_unparseable_is_unavailable() {
        let wms = client(MockHttpClient::new(Ok(b"<not-closed>".to_vec())));
        assert!(wms.get_capabilities().is_none());
    }

    #[test]
    fn test_get_capabilities_latin1_document() {
        let mut xml = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\
            <WMS_Capabilities><Capability>\
            <Layer><Name>streets</Name><Title>Stra".to_vec();
        xml.push(0xdf);
        xml.extend_from_slice(b"en</Title></Layer></Capability></WMS_Capabilities>");
        let wms = client(MockHttpClient::new(Ok(xml)));

        let layers = wms.try_get_capabilities().expect("latin-1 document parses");
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].title, "Stra\u{df}en");
    }
}
