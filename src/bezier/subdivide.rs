use super::super::consts::*;
use super::super::coordinate::*;

use smallvec::*;
use std::borrow::Cow;

/// Matrix with one row per generated node, each row holding the weights of the original nodes
pub type SubdivisionMatrix = Vec<Vec<f64>>;

lazy_static! {
    /// The subdivision matrices for the low-degree curves, which are the ones that get subdivided most often
    static ref SUBDIVISION_MATRICES: Vec<SubdivisionMatrix> = (0..=MAX_CACHED_SUBDIVISION_DEGREE)
        .map(build_subdivision_matrix)
        .collect();
}

///
/// Builds the matrix used to split a curve of the specified degree at s = 0.5
///
/// The result has `2*degree + 1` rows: rows `0..=degree` are the nodes of the left half and rows
/// `degree..=2*degree` are the nodes of the right half (the middle row is the point both halves share).
/// Each row is a convex combination of the original nodes.
///
pub fn build_subdivision_matrix(degree: usize) -> SubdivisionMatrix {
    let num_rows        = 2*degree + 1;
    let mut result      = vec![vec![0.0; degree+1]; num_rows];

    result[0][0]                = 1.0;
    result[num_rows-1][degree]  = 1.0;

    for row in 1..=degree {
        // Each row is the average of two shifted copies of the row above (one round of de Casteljau at 0.5)
        let half_prev = result[row-1][0..row].iter().map(|weight| weight * 0.5).collect::<SmallVec<[f64; 8]>>();

        for (col, weight) in half_prev.iter().enumerate() {
            result[row][col]    += weight;
            result[row][col+1]  += weight;
        }

        // The right half mirrors the left half
        let complement  = num_rows - row - 1;
        let mirrored    = result[row][0..=row].to_vec();
        for (offset, weight) in mirrored.into_iter().enumerate() {
            result[complement][degree - row + offset] = weight;
        }
    }

    result
}

///
/// Retrieves the subdivision matrix for a particular degree
///
pub fn subdivision_matrix(degree: usize) -> Cow<'static, [Vec<f64>]> {
    let matrices: &'static Vec<SubdivisionMatrix> = &SUBDIVISION_MATRICES;

    if degree < matrices.len() {
        Cow::Borrowed(&matrices[degree][..])
    } else {
        Cow::Owned(build_subdivision_matrix(degree))
    }
}

///
/// Applies a matrix to a set of nodes: each row of the matrix produces one new node
///
pub fn apply_node_matrix<Point: Coordinate, Row: AsRef<[f64]>>(matrix: &[Row], nodes: &[Point]) -> Vec<Point> {
    matrix.iter()
        .map(|row| {
            row.as_ref().iter()
                .zip(nodes.iter())
                .filter(|(weight, _)| **weight != 0.0)
                .fold(Point::origin(), |point, (weight, node)| point + (*node * *weight))
        })
        .collect()
}

///
/// Splits the nodes of a curve into the nodes for the curves covering `[0, 0.5]` and `[0.5, 1]`
///
pub fn subdivide_nodes<Point: Coordinate>(nodes: &[Point]) -> (SmallVec<[Point; 4]>, SmallVec<[Point; 4]>) {
    let degree      = nodes.len().saturating_sub(1);
    let matrix      = subdivision_matrix(degree);
    let new_nodes   = apply_node_matrix(&*matrix, nodes);

    let left        = new_nodes[0..=degree].iter().cloned().collect();
    let right       = new_nodes[degree..].iter().cloned().collect();

    (left, right)
}
