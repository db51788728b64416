//! Distance helpers for building A* heuristics
//!
//! A straight line (or great circle) distance never exceeds the length of a
//! route along edges, as long as edge costs are at least the geometric
//! distance between their endpoints. That makes these admissible estimates.

use num_traits::{Float, Num, Signed};


/// Mean earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
{
    (x1 - x2).abs() + (y1 - y2).abs()
}

/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
{
    squared_euclidean(x1, y1, x2, y2).sqrt()
}

/// Squared Euclidean distance
/// Only admissible when edge costs are squared lengths as well
pub fn squared_euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
{
    (x1 - x2).powi(2) + (y1 - y2).powi(2)
}

/// Great circle distance between two (latitude, longitude) pairs in degrees
/// Result is in the unit of `radius`
pub fn haversine<T>(lat1: T, lon1: T, lat2: T, lon2: T, radius: T) -> T
where
    T: Float,
{
    let two = T::one() + T::one();
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / two).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / two).sin().powi(2);
    two * radius * a.sqrt().min(T::one()).asin()
}

/// Great circle distance in kilometres
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine(lat1, lon1, lat2, lon2, EARTH_RADIUS_KM)
}
