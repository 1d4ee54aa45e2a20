//! Quantized 2D vector type.

use std::any::{self, Any};
use std::ops::{Add, Mul, Sub};

use num_traits::{Float, ToPrimitive};

use crate::error::VectorError;
use crate::round;

/// A 2D vector whose coordinates are quantized to two decimal places.
///
/// Every construction path ([`new`](Vector2D::new), the two-point
/// factory, and the results of arithmetic and rotation) rounds both
/// coordinates to hundredths with ties going to the even neighbor, so a
/// stored coordinate is always a 2-decimal value. Derived scalars
/// ([`length`](Vector2D::length), [`dot`](Vector2D::dot)) are raw and
/// unrounded; angles come back as whole degrees.
///
/// Generic over floating-point types (`f32` or `f64`). Values are
/// immutable: every operation yields a new vector.
///
/// Non-finite coordinates (NaN, ∞) are not guarded against and
/// propagate through quantization and arithmetic.
///
/// # Example
///
/// ```
/// use centivec::Vector2D;
///
/// let v: Vector2D<f64> = Vector2D::new(1.234, 5.678);
/// assert_eq!(v.x, 1.23);
/// assert_eq!(v.y, 5.68);
///
/// let sum = v + Vector2D::new(0.77, 0.32);
/// assert_eq!(sum, Vector2D::new(2.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D<F> {
    pub x: F,
    pub y: F,
}

/// Outcome of a runtime-dispatched [`multiply`](Vector2D::multiply).
///
/// A scalar operand scales the vector; a vector operand produces the
/// dot product. The two result types are kept distinct here rather than
/// collapsed into one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Product<F> {
    /// The vector scaled componentwise by a scalar operand.
    Vector(Vector2D<F>),
    /// The dot product with a vector operand.
    Scalar(F),
}

impl<F: Float> Vector2D<F> {
    /// Creates a new vector, quantizing both coordinates to hundredths.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self {
            x: round::hundredths(x),
            y: round::hundredths(y),
        }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Creates the displacement vector from `start` to `end`.
    ///
    /// # Example
    ///
    /// ```
    /// use centivec::Vector2D;
    ///
    /// let v: Vector2D<f64> = Vector2D::from_points((1.0, 1.0), (4.0, 5.0));
    /// assert_eq!(v, Vector2D::new(3.0, 4.0));
    /// ```
    #[inline]
    pub fn from_points(start: (F, F), end: (F, F)) -> Self {
        Self::new(end.0 - start.0, end.1 - start.1)
    }

    /// Scales the vector by a scalar, quantizing the result.
    #[inline]
    pub fn scale(self, factor: F) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Computes the dot product with another vector.
    ///
    /// The result is raw and not quantized.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Multiplies by a dynamically typed operand.
    ///
    /// For callers holding an operand whose type is only known at
    /// runtime: a scalar of the component type yields
    /// [`Product::Vector`], another vector yields [`Product::Scalar`],
    /// and anything else fails with
    /// [`VectorError::UnsupportedOperandType`] naming the rejected
    /// type. Integer scalars are not widened; convert them to the
    /// component type first.
    ///
    /// Statically typed callers should prefer [`scale`](Vector2D::scale)
    /// and [`dot`](Vector2D::dot), or the `*` operator.
    ///
    /// # Example
    ///
    /// ```
    /// use centivec::{Product, Vector2D};
    ///
    /// let v: Vector2D<f64> = Vector2D::new(1.0, 2.0);
    /// assert_eq!(v.multiply(&2.0), Ok(Product::Vector(Vector2D::new(2.0, 4.0))));
    /// assert_eq!(v.multiply(&Vector2D::new(3.0, 4.0)), Ok(Product::Scalar(11.0)));
    /// assert!(v.multiply(&"text").is_err());
    /// ```
    pub fn multiply<T: Any>(self, operand: &T) -> Result<Product<F>, VectorError>
    where
        F: 'static,
    {
        let operand = operand as &dyn Any;
        if let Some(factor) = operand.downcast_ref::<F>() {
            Ok(Product::Vector(self.scale(*factor)))
        } else if let Some(other) = operand.downcast_ref::<Self>() {
            Ok(Product::Scalar(self.dot(*other)))
        } else {
            Err(VectorError::UnsupportedOperandType {
                type_name: any::type_name::<T>(),
            })
        }
    }

    /// Returns the Euclidean length of the vector.
    ///
    /// The result is raw and not quantized.
    #[inline]
    pub fn length(self) -> F {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector in this vector's direction, quantized.
    ///
    /// A zero-length vector normalizes to the zero vector rather than
    /// dividing by zero.
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length == F::zero() {
            return Self::zero();
        }
        Self::new(self.x / length, self.y / length)
    }

    /// Returns the angle to another vector in whole degrees, in [0, 180].
    ///
    /// Fails with [`VectorError::ZeroLengthVector`] if either vector has
    /// zero length, since the angle is undefined there.
    ///
    /// # Example
    ///
    /// ```
    /// use centivec::Vector2D;
    ///
    /// let right: Vector2D<f64> = Vector2D::new(1.0, 0.0);
    /// let up = Vector2D::new(0.0, 1.0);
    /// assert_eq!(right.angle_between(up), Ok(90));
    /// ```
    pub fn angle_between(self, other: Self) -> Result<i32, VectorError> {
        let lengths = self.length() * other.length();
        if lengths == F::zero() {
            return Err(VectorError::ZeroLengthVector);
        }
        // Floating-point drift can push the ratio just past ±1, where
        // acos is undefined.
        let ratio = (self.dot(other) / lengths).max(-F::one()).min(F::one());
        let degrees = ratio.acos().to_degrees();
        Ok(round::ties_even(degrees).to_i32().unwrap())
    }

    /// Returns the angular offset from the positive Y axis in whole
    /// degrees.
    ///
    /// Computed as `|90° − atan2(y, x)|` after normalizing the atan2
    /// angle into [0°, 360°). For directions whose atan2 angle exceeds
    /// 180° this is an unsigned distance, not a clockwise compass
    /// bearing: west and east both report 90, and the result ranges
    /// over [0, 270] rather than wrapping into [0, 360). Callers depend
    /// on these exact values.
    ///
    /// # Example
    ///
    /// ```
    /// use centivec::Vector2D;
    ///
    /// let north: Vector2D<f64> = Vector2D::new(0.0, 1.0);
    /// assert_eq!(north.bearing(), 0);
    /// assert_eq!(Vector2D::new(1.0, 0.0).bearing(), 90);
    /// ```
    pub fn bearing(self) -> i32 {
        let full_turn = F::from(360.0).unwrap();
        let quarter_turn = F::from(90.0).unwrap();
        let mut from_x = self.y.atan2(self.x).to_degrees();
        if from_x < F::zero() {
            from_x = from_x + full_turn;
        }
        round::ties_even((quarter_turn - from_x).abs())
            .to_i32()
            .unwrap()
    }

    /// Rotates the vector counter-clockwise by whole degrees.
    ///
    /// Applies the standard 2D rotation matrix; the result passes
    /// through the quantizing constructor like any other construction.
    pub fn rotate(self, degrees: i32) -> Self {
        let radians = F::from(degrees).unwrap().to_radians();
        let (sin, cos) = radians.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl<F: Float> Add for Vector2D<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<F: Float> Sub for Vector2D<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Mul<F> for Vector2D<F> {
    type Output = Self;

    #[inline]
    fn mul(self, factor: F) -> Self {
        self.scale(factor)
    }
}

impl<F: Float> Mul for Vector2D<F> {
    type Output = F;

    /// Dot product; scalar multiplication is `Mul<F>`.
    #[inline]
    fn mul(self, other: Self) -> F {
        self.dot(other)
    }
}

impl<F: Float> Default for Vector2D<F> {
    fn default() -> Self {
        Self::zero()
    }
}
