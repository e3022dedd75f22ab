//! Engine configuration.
//!
//! This module provides the tunables for the quadtree index and the
//! cluster resolver. Defaults match the behavior of the shipping directory
//! app; every setter validates its input and panics on nonsense values.

use serde::{Deserialize, Serialize};

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of points a quadtree node holds before subdividing
    #[serde(default = "Config::default_node_capacity")]
    pub node_capacity: usize,

    /// Fraction of the query region's own span added on every side before
    /// querying, so clusters straddling the viewport edge are not clipped
    #[serde(default = "Config::default_padding_factor")]
    pub padding_factor: f64,

    /// Divisor applied to the smaller viewport span to derive the minimum
    /// non-clustered span for a viewport event
    #[serde(default = "Config::default_span_divisor")]
    pub span_divisor: f64,
}

impl Config {
    const fn default_node_capacity() -> usize {
        4
    }

    const fn default_padding_factor() -> f64 {
        1.0
    }

    const fn default_span_divisor() -> f64 {
        5.0
    }

    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Node capacity must be greater than zero");
        self.node_capacity = capacity;
        self
    }

    pub fn with_padding_factor(mut self, factor: f64) -> Self {
        assert!(
            factor >= 0.0 && factor.is_finite(),
            "Padding factor must be finite and non-negative"
        );
        self.padding_factor = factor;
        self
    }

    pub fn with_span_divisor(mut self, divisor: f64) -> Self {
        assert!(
            divisor > 0.0 && divisor.is_finite(),
            "Span divisor must be finite and positive"
        );
        self.span_divisor = divisor;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_capacity: Self::default_node_capacity(),
            padding_factor: Self::default_padding_factor(),
            span_divisor: Self::default_span_divisor(),
        }
    }
}
