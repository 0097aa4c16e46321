use crate::core::types::Point;

/// Converts an angle in degrees to radians. Pure and total.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Converts an angle in radians to degrees. Pure and total.
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Point on a circle of `radius` around `center` at `degrees + rotate`.
///
/// Both arc endpoints of every pie segment go through this one function so
/// rotation is applied identically everywhere.
#[must_use]
pub fn point_on_circle(center: Point, radius: f64, degrees: f64, rotate: f64) -> Point {
    let radians = degrees_to_radians(degrees + rotate);
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}
