use bezier_kernel::*;
use bezier_kernel::surface::*;

mod evaluate;

pub fn close_points<Point: Coordinate>(a: &Point, b: &Point, tolerance: f64) -> bool {
    a.distance_to(b) <= tolerance
}

pub fn quadratic_surface() -> Surface<Coord2> {
    Surface::try_new(vec![
        Coord2(0.0, 0.0), Coord2(0.5, -0.25), Coord2(1.0, 0.0),
        Coord2(0.125, 0.5), Coord2(0.75, 0.625),
        Coord2(0.25, 1.0)
    ]).unwrap()
}

#[test]
fn degree_inversion() {
    for degree in 0..20 {
        assert!(surface_degree((degree+1)*(degree+2)/2) == Ok(degree));
    }
}

#[test]
fn degree_of_non_triangular_number_is_an_error() {
    assert!(surface_degree(6) == Ok(2));

    let error = surface_degree(5).unwrap_err();
    assert!(error == BezierError::InvalidNodeCount { shape: ShapeKind::Surface, count: 5 });
    assert!(error.is_input_domain());
}

#[test]
fn surface_with_wrong_node_count() {
    let nodes = vec![Coord2(0.0, 0.0), Coord2(1.0, 0.0), Coord2(0.0, 1.0), Coord2(1.0, 1.0)];

    assert!(Surface::try_new(nodes).is_err());
}

#[test]
fn surface_properties() {
    let surface = Surface::try_new(vec![Coord3(0.0, 0.0, 1.0), Coord3(1.0, 0.25, 0.0), Coord3(0.25, 1.0, 0.0)]).unwrap();

    assert!(surface.degree() == 1);
    assert!(surface.dimension() == 3);
    assert!(surface.nodes().len() == 3);
}

#[test]
fn area_is_not_implemented() {
    let error = quadratic_surface().area().unwrap_err();

    assert!(error == BezierError::AreaNotImplemented);
    assert!(error.is_unsupported());
}

#[test]
fn surfaces_are_shapes() {
    fn node_count<Shape: BezierShape>(shape: &Shape) -> usize {
        shape.nodes().len()
    }

    let surface = quadratic_surface();
    let curve   = Curve::try_new(vec![Coord2(0.0, 0.0), Coord2(1.0, 1.0)]).unwrap();

    assert!(node_count(&surface) == 6);
    assert!(node_count(&curve) == 2);
    assert!(BezierShape::dimension(&surface) == 2);
}
