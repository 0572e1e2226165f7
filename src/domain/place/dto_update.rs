/// Fields to replace on an existing place.
///
/// The owner cannot be changed, so it has no field here.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlaceDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
