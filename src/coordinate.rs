use std::ops::*;

///
/// Represents a value that can be used as a node (control point) of a Bezier shape
///
/// The dimension of a shape is the number of components in its coordinate type
///
pub trait Coordinate : Sized+Copy+PartialEq+Add<Self, Output=Self>+Mul<f64, Output=Self>+Sub<Self, Output=Self> {
    ///
    /// Creates a new coordinate from the specified set of components
    ///
    fn from_components(components: &[f64]) -> Self;

    ///
    /// Returns the origin coordinate
    ///
    fn origin() -> Self;

    ///
    /// The number of components in this coordinate
    ///
    fn len() -> usize;

    ///
    /// Retrieves the component at the specified index
    ///
    fn get(&self, index: usize) -> f64;

    ///
    /// Returns a point made up of the biggest components of the two points
    ///
    fn from_biggest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Returns a point made up of the smallest components of the two points
    ///
    fn from_smallest_components(p1: Self, p2: Self) -> Self;

    ///
    /// Computes the distance between this coordinate and another of the same type
    ///
    #[inline]
    fn distance_to(&self, target: &Self) -> f64 {
        let offset              = *self - *target;
        let squared_distance    = offset.dot(&offset);

        f64::sqrt(squared_distance)
    }

    ///
    /// Computes the dot product for this vector along with another vector
    ///
    #[inline]
    fn dot(&self, target: &Self) -> f64 {
        let mut dot_product = 0.0;

        for component_index in 0..Self::len() {
            dot_product += self.get(component_index) * target.get(component_index);
        }

        dot_product
    }

    ///
    /// Computes the magnitude of this vector
    ///
    #[inline]
    fn magnitude(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }

    ///
    /// The largest absolute value of any component of this coordinate
    ///
    #[inline]
    fn max_abs_component(&self) -> f64 {
        (0..Self::len())
            .map(|component_index| self.get(component_index).abs())
            .fold(0.0, f64::max)
    }
}

///
/// Represents a coordinate with a 2D position
///
pub trait Coordinate2D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

///
/// Represents a coordinate with a 3D position
///
pub trait Coordinate3D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
}

impl Coordinate for f64 {
    #[inline] fn from_components(components: &[f64]) -> f64 { components[0] }
    #[inline] fn origin() -> f64 { 0.0 }
    #[inline] fn len() -> usize { 1 }
    #[inline] fn get(&self, _index: usize) -> f64 { *self }

    #[inline] fn from_biggest_components(p1: f64, p2: f64) -> f64 { p1.max(p2) }
    #[inline] fn from_smallest_components(p1: f64, p2: f64) -> f64 { p1.min(p2) }

    #[inline] fn distance_to(&self, target: &f64) -> f64 { (self-target).abs() }
    #[inline] fn dot(&self, target: &f64) -> f64 { self * target }
}

///
/// Implements the arithmetic operators and the `Coordinate` trait for a tuple struct of `f64` components
///
macro_rules! coordinate_struct {
    ($name: ident, $len: expr, $($index: tt),+) => {
        impl Add<$name> for $name {
            type Output=$name;

            #[inline]
            fn add(self, rhs: $name) -> $name {
                $name($(self.$index + rhs.$index),+)
            }
        }

        impl Sub<$name> for $name {
            type Output=$name;

            #[inline]
            fn sub(self, rhs: $name) -> $name {
                $name($(self.$index - rhs.$index),+)
            }
        }

        impl Mul<f64> for $name {
            type Output=$name;

            #[inline]
            fn mul(self, rhs: f64) -> $name {
                $name($(self.$index * rhs),+)
            }
        }

        impl Coordinate for $name {
            #[inline]
            fn from_components(components: &[f64]) -> $name {
                $name($(components[$index]),+)
            }

            #[inline]
            fn origin() -> $name {
                $name($({ let _ = $index; 0.0 }),+)
            }

            #[inline]
            fn len() -> usize { $len }

            #[inline]
            fn get(&self, index: usize) -> f64 {
                match index {
                    $($index => self.$index,)+
                    _ => panic!("{} only has {} components", stringify!($name), $len)
                }
            }

            #[inline]
            fn from_biggest_components(p1: $name, p2: $name) -> $name {
                $name($(p1.$index.max(p2.$index)),+)
            }

            #[inline]
            fn from_smallest_components(p1: $name, p2: $name) -> $name {
                $name($(p1.$index.min(p2.$index)),+)
            }

            #[inline]
            fn dot(&self, target: &$name) -> f64 {
                0.0 $(+ self.$index*target.$index)+
            }
        }
    }
}

/// A point in the plane
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Coord2(pub f64, pub f64);

coordinate_struct!(Coord2, 2, 0, 1);

impl Coordinate2D for Coord2 {
    #[inline] fn x(&self) -> f64 { self.0 }
    #[inline] fn y(&self) -> f64 { self.1 }
}

/// A point in 3D space
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Coord3(pub f64, pub f64, pub f64);

coordinate_struct!(Coord3, 3, 0, 1, 2);

impl Coordinate3D for Coord3 {
    #[inline] fn x(&self) -> f64 { self.0 }
    #[inline] fn y(&self) -> f64 { self.1 }
    #[inline] fn z(&self) -> f64 { self.2 }
}
