//! Coarse spatial filtering around the requester's position.

use ortelius_dataset::PlaceRecord;

/// Maximum absolute latitude difference admitted, in decimal degrees.
pub const MAX_LATITUDE_DELTA: f64 = 10.0;
/// Maximum absolute longitude difference admitted, in decimal degrees.
pub const MAX_LONGITUDE_DELTA: f64 = 20.0;

/// Predicate admitting records inside a fixed bounding box around the given
/// position.
///
/// With either coordinate missing there is no position to filter around, so
/// every record is admitted. With a full position, a record must have both
/// of its own coordinates inside the box; the comparison is strict, so a
/// record sitting exactly on the boundary is rejected. This is a cheap
/// rectangular test in degrees, not a geodesic distance.
#[must_use]
pub fn close_to(latitude: Option<f64>, longitude: Option<f64>) -> impl Fn(&PlaceRecord) -> bool {
    move |record| {
        let (Some(user_latitude), Some(user_longitude)) = (latitude, longitude) else {
            return true;
        };
        match record.coordinates() {
            Some((record_latitude, record_longitude)) => {
                (record_latitude - user_latitude).abs() < MAX_LATITUDE_DELTA
                    && (record_longitude - user_longitude).abs() < MAX_LONGITUDE_DELTA
            }
            None => false,
        }
    }
}
