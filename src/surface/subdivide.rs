use super::super::bezier::*;
use super::super::error::*;
use super::super::coordinate::*;

use smallvec::*;

/// Maps the 3 nodes of a linear triangle onto the 6 nodes of its subdivision
const LINEAR_SUBDIVIDE: [[f64; 3]; 6] = [
    [1.0, 0.0, 0.0],
    [0.5, 0.5, 0.0],
    [0.0, 1.0, 0.0],
    [0.5, 0.0, 0.5],
    [0.0, 0.5, 0.5],
    [0.0, 0.0, 1.0],
];

/// Maps the 6 nodes of a quadratic triangle onto the 15 nodes of its subdivision
const QUADRATIC_SUBDIVIDE: [[f64; 6]; 15] = [
    [1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.5, 0.5, 0.0, 0.0, 0.0, 0.0],
    [0.25, 0.5, 0.25, 0.0, 0.0, 0.0],
    [0.0, 0.5, 0.5, 0.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
    [0.5, 0.0, 0.0, 0.5, 0.0, 0.0],
    [0.25, 0.25, 0.0, 0.25, 0.25, 0.0],
    [0.0, 0.25, 0.25, 0.25, 0.25, 0.0],
    [0.0, 0.0, 0.5, 0.0, 0.5, 0.0],
    [0.25, 0.0, 0.0, 0.5, 0.0, 0.25],
    [0.0, 0.25, 0.0, 0.25, 0.25, 0.25],
    [0.0, 0.0, 0.25, 0.0, 0.5, 0.25],
    [0.0, 0.0, 0.0, 0.5, 0.0, 0.5],
    [0.0, 0.0, 0.0, 0.0, 0.5, 0.5],
    [0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
];

/// Nodes of the lower left, central, lower right and upper left children of a linear triangle
const LINEAR_CHILDREN: [[usize; 3]; 4] = [
    [0, 1, 3],
    [4, 3, 1],
    [1, 2, 4],
    [3, 4, 5],
];

/// Nodes of the lower left, central, lower right and upper left children of a quadratic triangle
const QUADRATIC_CHILDREN: [[usize; 6]; 4] = [
    [0, 1, 2, 5, 6, 9],
    [11, 10, 9, 7, 6, 2],
    [2, 3, 4, 7, 8, 11],
    [9, 10, 11, 12, 13, 14],
];

/// Node indexes of the three edges of a linear triangle
const LINEAR_EDGES: [[usize; 2]; 3] = [[0, 1], [1, 2], [2, 0]];

/// Node indexes of the three edges of a quadratic triangle
const QUADRATIC_EDGES: [[usize; 3]; 3] = [[0, 1, 2], [2, 4, 5], [5, 3, 0]];

/// The nodes of the four children of a subdivided triangle
pub type SurfaceSubdivision<Point> = [SmallVec<[Point; 6]>; 4];

///
/// Picks the nodes for each child out of the densified node set
///
#[inline]
fn select_children<Point: Coordinate, Indexes: AsRef<[usize]>>(new_nodes: &[Point], children: &[Indexes; 4]) -> SurfaceSubdivision<Point> {
    let select = |indexes: &Indexes| indexes.as_ref().iter().map(|index| new_nodes[*index]).collect::<SmallVec<[Point; 6]>>();

    [select(&children[0]), select(&children[1]), select(&children[2]), select(&children[3])]
}

///
/// Splits the nodes of a triangle of degree 1 or 2 into the nodes of its lower left, central, lower right and upper left quarters
///
pub fn subdivide_surface_nodes<Point: Coordinate>(nodes: &[Point], degree: usize) -> BezierResult<SurfaceSubdivision<Point>> {
    match degree {
        1 => Ok(select_children(&apply_node_matrix(&LINEAR_SUBDIVIDE, nodes), &LINEAR_CHILDREN)),
        2 => Ok(select_children(&apply_node_matrix(&QUADRATIC_SUBDIVIDE, nodes), &QUADRATIC_CHILDREN)),
        _ => Err(BezierError::UnsupportedDegree { operation: "surface subdivision", degree })
    }
}

///
/// Finds the nodes of the three edges of a triangle of degree 1 or 2
///
/// The edges run anticlockwise around the reference triangle: `lambda3 = 0`, then `lambda1 = 0`, then `lambda2 = 0`
///
pub fn edge_nodes<Point: Coordinate>(nodes: &[Point], degree: usize) -> BezierResult<[SmallVec<[Point; 4]>; 3]> {
    let select = |indexes: &[usize]| indexes.iter().map(|index| nodes[*index]).collect::<SmallVec<[Point; 4]>>();

    match degree {
        1 => Ok([select(&LINEAR_EDGES[0]), select(&LINEAR_EDGES[1]), select(&LINEAR_EDGES[2])]),
        2 => Ok([select(&QUADRATIC_EDGES[0]), select(&QUADRATIC_EDGES[1]), select(&QUADRATIC_EDGES[2])]),
        _ => Err(BezierError::UnsupportedDegree { operation: "surface edges", degree })
    }
}
