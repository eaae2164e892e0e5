use super::super::coordinate::*;
use super::super::error::*;

use smallvec::*;

/// Coefficients of a polynomial in the Bernstein basis
type BernsteinPolynomial = SmallVec<[f64; 16]>;

///
/// Computes the Bernstein coefficients of `f(B(s))`, where `f` is the implicit equation of the curve with
/// nodes `implicit` and `B(s)` is the curve with nodes `curve`
///
/// The result is a polynomial in `s`: when every coefficient has the same sign, the curve never
/// reaches the algebraic curve, so there's no intersection. Subdividing the coefficients with
/// the same matrices as the curve nodes gives the residual along each half of the curve.
///
/// The implicit equation is built the same way as `evaluate_implicit()`, with every value
/// replaced by a polynomial, so `f(B(s))` has degree `2n` for a line and `4n` for a quadratic.
///
pub fn implicit_on_curve<Point: Coordinate+Coordinate2D>(implicit: &[Point], curve: &[Point]) -> BezierResult<SmallVec<[f64; 16]>> {
    let curve_x = curve.iter().map(|point| point.x()).collect::<BernsteinPolynomial>();
    let curve_y = curve.iter().map(|point| point.y()).collect::<BernsteinPolynomial>();

    match implicit.len() {
        0 | 1   => Err(BezierError::PointImplicitization),

        2       => {
            let x0 = offset_from(implicit[0].x(), &curve_x);
            let y0 = offset_from(implicit[0].y(), &curve_y);
            let x1 = offset_from(implicit[1].x(), &curve_x);
            let y1 = offset_from(implicit[1].y(), &curve_y);

            Ok(combine(1.0, &product(&x0, &y1), -1.0, &product(&x1, &y0)))
        }

        3       => {
            let a = offset_from(implicit[0].x(), &curve_x);
            let b = scaled(2.0, &offset_from(implicit[1].x(), &curve_x));
            let c = offset_from(implicit[2].x(), &curve_x);
            let d = offset_from(implicit[0].y(), &curve_y);
            let e = scaled(2.0, &offset_from(implicit[1].y(), &curve_y));
            let f = offset_from(implicit[2].y(), &curve_y);

            let sub1        = combine(1.0, &product(&b, &f), -1.0, &product(&c, &e));
            let sub2        = combine(1.0, &product(&a, &f), -1.0, &product(&c, &d));
            let sub_det_a   = combine(-1.0, &product(&e, &sub1), 1.0, &product(&f, &sub2));
            let sub_det_d   = combine(1.0, &product(&b, &sub1), -1.0, &product(&c, &sub2));

            Ok(combine(1.0, &product(&a, &sub_det_a), 1.0, &product(&d, &sub_det_d)))
        }

        count   => Err(BezierError::UnsupportedDegree { operation: "implicitization", degree: count-1 })
    }
}

///
/// The polynomial `value - p(s)`
///
#[inline]
fn offset_from(value: f64, polynomial: &[f64]) -> BernsteinPolynomial {
    polynomial.iter().map(|coefficient| value - coefficient).collect()
}

#[inline]
fn scaled(factor: f64, polynomial: &[f64]) -> BernsteinPolynomial {
    polynomial.iter().map(|coefficient| factor * coefficient).collect()
}

///
/// `a_factor * a(s) + b_factor * b(s)` for two polynomials of the same degree
///
fn combine(a_factor: f64, a: &[f64], b_factor: f64, b: &[f64]) -> BernsteinPolynomial {
    test_assert!(a.len() == b.len());

    a.iter().zip(b.iter())
        .map(|(a, b)| a_factor*a + b_factor*b)
        .collect()
}

///
/// Multiplies two polynomials in the Bernstein basis
///
/// For degrees `m` and `n`, coefficient `k` of the result is the sum of `C(m, i) C(n, j) / C(m+n, k) a_i b_j` over `i + j = k`
///
fn product(a: &[f64], b: &[f64]) -> BernsteinPolynomial {
    let a_degree    = a.len() - 1;
    let b_degree    = b.len() - 1;
    let mut result  = smallvec![0.0; a_degree + b_degree + 1];

    for (i, a_coefficient) in a.iter().enumerate() {
        for (j, b_coefficient) in b.iter().enumerate() {
            let weight = binomial(a_degree, i) * binomial(b_degree, j) / binomial(a_degree + b_degree, i + j);
            result[i+j] += weight * a_coefficient * b_coefficient;
        }
    }

    result
}

///
/// The binomial coefficient `n choose k`
///
fn binomial(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);

    (0..k).fold(1.0, |result, i| result * ((n - i) as f64) / ((i + 1) as f64))
}
