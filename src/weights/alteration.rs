use crate::network::CompoundGraph;

use super::WeightMap;

const CUBIC_A: f64 = 0.000230926;
const CUBIC_B: f64 = -0.0182175;
const CUBIC_C: f64 = 0.511788;

/// Alteration weight in [0, 100]: the fraction of altered samples scaled to a
/// percentage, zero when a node carries no genomic data.
pub fn alteration_weights(graph: &CompoundGraph) -> WeightMap {
    graph
        .nodes()
        .map(|node| {
            let weight = node.percent_altered.map(|fraction| fraction * 100.0);
            (node.id.clone(), weight.unwrap_or(0.0))
        })
        .collect()
}

pub fn max_alteration(weights: &WeightMap) -> f64 {
    weights.max_weight()
}

/// Maps a slider position in [0, 100] onto a threshold curve that is flat at
/// the low end, so small moves near zero do not drop most of the network.
pub fn slider_transform(position: f64) -> f64 {
    let value = CUBIC_A * position.powi(3) + CUBIC_B * position.powi(2) + CUBIC_C * position;
    value.clamp(0.0, 100.0)
}

/// Inverse of [`slider_transform`]: the slider position producing `value`.
pub fn reverse_slider_transform(value: f64) -> f64 {
    solve_cubic(CUBIC_A, CUBIC_B, CUBIC_C, -value)
}

// Real root of ax^3 + bx^2 + cx + d = 0; the slider curve has exactly one.
fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> f64 {
    let p = -b / (3.0 * a);
    let q = p.powi(3) + (b * c - 3.0 * a * d) / (6.0 * a.powi(2));
    let r = c / (3.0 * a);

    let root = (q * q + (r - p * p).powi(3)).sqrt();
    (q + root).cbrt() + (q - root).cbrt() + p
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: Self = Self(0.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::DEFAULT
        } else {
            Self(value.clamp(0.0, 100.0))
        }
    }

    /// Threshold selected by a slider at `position`, scaled so the far end of
    /// the slider matches the most altered node in the network.
    pub fn from_slider(position: f64, max_alteration: f64) -> Self {
        Self::new(slider_transform(position) * (max_alteration / 100.0))
    }

    pub fn from_input(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(value) => Self::new(value),
            Err(_) => Self::DEFAULT,
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn slider_position(self, max_alteration: f64) -> f64 {
        if max_alteration <= 0.0 {
            return 0.0;
        }
        reverse_slider_transform(self.0 / (max_alteration / 100.0))
    }
}
