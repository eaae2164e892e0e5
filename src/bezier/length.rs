use super::basis::*;
use super::curve::*;
use super::derivative::*;
use super::super::consts::*;
use super::super::coordinate::*;

/// Five point Gauss-Legendre abscissae on [-1, 1]
const GAUSS_ABSCISSAE: [f64; 5] = [
    0.0,
    -0.538_469_310_105_683_1,
    0.538_469_310_105_683_1,
    -0.906_179_845_938_664,
    0.906_179_845_938_664,
];

/// Five point Gauss-Legendre weights matching `GAUSS_ABSCISSAE`
const GAUSS_WEIGHTS: [f64; 5] = [
    0.568_888_888_888_888_9,
    0.478_628_670_499_366_5,
    0.478_628_670_499_366_5,
    0.236_926_885_056_189_1,
    0.236_926_885_056_189_1,
];

impl<Coord: Coordinate> Curve<Coord> {
    ///
    /// Computes the length of this curve by integrating the magnitude of its derivative
    ///
    /// Lines have an exact length. Other curves are integrated with Gauss-Legendre quadrature.
    ///
    pub fn length(&self) -> f64 {
        match self.degree() {
            0 => 0.0,
            1 => self.start_point().distance_to(&self.end_point()),
            _ => {
                let first_deriv = derivative_nodes(self.nodes());
                let panel_width = 1.0 / (LENGTH_PANELS as f64);

                (0..LENGTH_PANELS)
                    .map(|panel| {
                        let mid_point = (panel as f64 + 0.5) * panel_width;

                        GAUSS_ABSCISSAE.iter()
                            .zip(GAUSS_WEIGHTS.iter())
                            .map(|(x, weight)| {
                                let s = mid_point + x * panel_width * 0.5;
                                weight * evaluate_nodes(&first_deriv, s).magnitude()
                            })
                            .sum::<f64>() * panel_width * 0.5
                    })
                    .sum()
            }
        }
    }
}
