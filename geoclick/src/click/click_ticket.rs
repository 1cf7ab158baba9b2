use geoclick_core::model::Coordinate;

/// identifies one click. ids increase monotonically per resolver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickTicket {
    pub id: u64,
    pub coordinate: Coordinate,
}
