//! SVG `points` attribute codec.
//!
//! Format: whitespace-separated `x,y` pairs, e.g. `150,150 350,150 325,300 175,300`.

use nalgebra::Vector2;
use thiserror::Error;

use super::types::Polygon;

#[derive(Debug, Error, PartialEq)]
pub enum PointsError {
    #[error("pair {index} ({token:?}) is not of the form x,y")]
    MalformedPair { index: usize, token: String },
    #[error("pair {index} has a non-numeric coordinate {token:?}")]
    BadNumber { index: usize, token: String },
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },
}

/// Parse a `points` attribute into a polygon.
pub fn parse_points(s: &str) -> Result<Polygon, PointsError> {
    let mut verts = Vec::new();
    for (index, token) in s.split_whitespace().enumerate() {
        let (xs, ys) = token
            .split_once(',')
            .filter(|(_, ys)| !ys.contains(','))
            .ok_or_else(|| PointsError::MalformedPair {
                index,
                token: token.to_string(),
            })?;
        let x = parse_coord(index, xs)?;
        let y = parse_coord(index, ys)?;
        verts.push(Vector2::new(x, y));
    }
    let count = verts.len();
    Polygon::new(verts).ok_or(PointsError::TooFewVertices { count })
}

fn parse_coord(index: usize, s: &str) -> Result<f64, PointsError> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PointsError::BadNumber {
            index,
            token: s.to_string(),
        })
}

/// Format a polygon back into a `points` attribute.
pub fn format_points(poly: &Polygon) -> String {
    poly.vertices()
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
