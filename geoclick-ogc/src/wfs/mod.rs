mod wfs_client;

pub use wfs_client::WfsClient;
