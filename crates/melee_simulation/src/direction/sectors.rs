//! Circle partitioning and the sector → canonical direction table.

use super::types::{AttackDirection, DirectionsConfiguration};

/// Lower bounds of `n` equal sectors, starting at `offset` degrees.
///
/// Each bound is `(360/n · i + offset) % 360`. The remainder keeps the sign of
/// the dividend, so a negative offset leaves the first bound negative
/// (`n = 8, offset = -22.5` → `-22.5, 22.5, 67.5, …, 292.5`).
pub fn divide_circle(n: usize, offset: f32) -> Vec<f32> {
    let increment = 360.0 / n as f32;
    (0..n)
        .map(|i| (increment * i as f32 + offset) % 360.0)
        .collect()
}

/// Index of the sector containing `angle` (degrees in `[0, 360)`).
///
/// Sector `i` covers `[bounds[i], bounds[i + 1])`; the last one runs up to 360.
/// `None` only for angles outside every sector (NaN, ≥ 360).
pub fn sector_index(angle: f32, bounds: &[f32]) -> Option<usize> {
    bounds.iter().enumerate().position(|(i, &lower)| {
        let upper = bounds.get(i + 1).copied().unwrap_or(360.0);
        angle >= lower && angle < upper
    })
}

/// Angle in degrees wrapped into `[0, 360)`.
///
/// `rem_euclid` alone can round a tiny negative angle up to exactly 360.0,
/// which no sector covers; that case maps to 0.0. NaN passes through.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Canonical direction for each sector of a resolution.
///
/// Not a uniform stride: each resolution picks visually distinct directions
/// (Square keeps only the four cardinals, Star skips Right and Left).
/// `None` has no table since it never classifies.
pub fn sector_mapping(configuration: DirectionsConfiguration) -> Option<&'static [AttackDirection]> {
    use AttackDirection::*;

    match configuration {
        DirectionsConfiguration::None => Option::None,
        DirectionsConfiguration::TopBottom => Some(&[Top, Bottom]),
        DirectionsConfiguration::Triangle => Some(&[Top, BottomRight, BottomLeft]),
        DirectionsConfiguration::Square => Some(&[Top, Right, Bottom, Left]),
        DirectionsConfiguration::Star => Some(&[Top, TopRight, BottomRight, BottomLeft, TopLeft]),
        DirectionsConfiguration::Eight => Some(&AttackDirection::ALL),
    }
}
