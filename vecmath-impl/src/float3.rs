use std::fmt::{ self, Display };
use std::ops::{ Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, Neg, Index, IndexMut };

use bytemuck::{ Pod, Zeroable };
use serde::{ Deserialize, Deserializer, Serialize, Serializer };

use crate::Float3Error;
use crate::math_vector::{
    cross_v3_v3v3_hi_prec, len_squared_v3, len_v3, normalize_v3, normalize_v3_v3,
    project_v3_v3v3, reflect_v3_v3v3,
};

/// A point or direction in 3D space.
///
/// Plain value type: `Default` is the zero vector and any three floats are a
/// valid `Float3`, including NaN and infinite components.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Float3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Float3 {
    pub const ZERO: Float3   = Float3::new(0.0, 0.0, 0.0);
    pub const ONE: Float3    = Float3::new(1.0, 1.0, 1.0);
    pub const UNIT_X: Float3 = Float3::new(1.0, 0.0, 0.0);
    pub const UNIT_Y: Float3 = Float3::new(0.0, 1.0, 0.0);
    pub const UNIT_Z: Float3 = Float3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Float3 {
        Float3 { x, y, z }
    }

    /// Broadcasts `value` to all three components.
    pub const fn splat(value: f32) -> Float3 {
        Float3::new(value, value, value)
    }

    pub const fn splat_int(value: i32) -> Float3 {
        Float3::splat(value as f32)
    }

    /// Borrows the components as a contiguous `[x, y, z]` buffer.
    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    pub fn as_array_mut(&mut self) -> &mut [f32; 3] {
        bytemuck::cast_mut(self)
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    pub fn length(self) -> f32 {
        len_v3(self.as_array())
    }

    pub fn length_squared(self) -> f32 {
        len_squared_v3(self.as_array())
    }

    /// Scales this vector to unit length, returning the length it had before.
    ///
    /// The zero vector is left as zero and `0.0` is returned.
    pub fn normalize_and_get_length(&mut self) -> f32 {
        normalize_v3(self.as_array_mut())
    }

    pub fn normalized(self) -> Float3 {
        let mut result = Float3::ZERO;
        normalize_v3_v3(result.as_array_mut(), self.as_array());
        result
    }

    pub fn invert(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// NOTE: true only when *every* component is non-zero, which is the
    /// opposite of what the name suggests. Callers that rely on this are
    /// pinned by `is_zero_is_inverted`; change both together.
    pub fn is_zero(self) -> bool {
        self.x != 0.0 && self.y != 0.0 && self.z != 0.0
    }

    /// Reflects this vector in place about the unit vector `normal`.
    pub fn reflect(&mut self, normal: Float3) {
        *self = self.reflected(normal);
    }

    pub fn reflected(self, normal: Float3) -> Float3 {
        let mut result = Float3::ZERO;
        reflect_v3_v3v3(result.as_array_mut(), self.as_array(), normal.as_array());
        result
    }

    /// Componentwise division that yields `0.0` wherever `b` has a zero component.
    pub fn safe_divide(a: Float3, b: Float3) -> Float3 {
        fn div(n: f32, d: f32) -> f32 {
            if d == 0.0 { 0.0 } else { n / d }
        }
        Float3::new(div(a.x, b.x), div(a.y, b.y), div(a.z, b.z))
    }

    pub fn dot(a: Float3, b: Float3) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    pub fn cross_high_precision(a: Float3, b: Float3) -> Float3 {
        let mut result = Float3::ZERO;
        cross_v3_v3v3_hi_prec(result.as_array_mut(), a.as_array(), b.as_array());
        result
    }

    /// Projects `a` onto `b`.
    pub fn project(a: Float3, b: Float3) -> Float3 {
        let mut result = Float3::ZERO;
        project_v3_v3v3(result.as_array_mut(), a.as_array(), b.as_array());
        result
    }

    pub fn distance(a: Float3, b: Float3) -> f32 {
        (a - b).length()
    }

    /// NOTE: returns `dot(a, b)`, not the squared distance between `a` and `b`.
    /// Kept as-is and pinned by `distance_squared_is_dot_product`.
    pub fn distance_squared(a: Float3, b: Float3) -> f32 {
        Float3::dot(a, b)
    }

    /// Linear interpolation from `a` (t = 0) to `b` (t = 1). `t` is not clamped.
    pub fn interpolate(a: Float3, b: Float3, t: f32) -> Float3 {
        a * (1.0 - t) + b * t
    }
}

//
// Conversion
//

impl From<[f32; 3]> for Float3 {
    fn from([x, y, z]: [f32; 3]) -> Float3 {
        Float3::new(x, y, z)
    }
}

impl From<&[f32; 3]> for Float3 {
    fn from(array: &[f32; 3]) -> Float3 {
        Float3::from(*array)
    }
}

impl TryFrom<&[f32]> for Float3 {
    type Error = Float3Error;

    fn try_from(slice: &[f32]) -> Result<Float3, Float3Error> {
        let array = <[f32; 3]>::try_from(slice)
            .map_err(|_| Float3Error::WrongLength { len: slice.len() })?;
        Ok(Float3::from(array))
    }
}

impl From<Float3> for [f32; 3] {
    fn from(v: Float3) -> [f32; 3] {
        v.to_array()
    }
}

impl AsRef<[f32; 3]> for Float3 {
    fn as_ref(&self) -> &[f32; 3] {
        self.as_array()
    }
}

impl AsMut<[f32; 3]> for Float3 {
    fn as_mut(&mut self) -> &mut [f32; 3] {
        self.as_array_mut()
    }
}

impl Index<usize> for Float3 {
    type Output = f32;
    fn index(&self, index: usize) -> &f32 {
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Float3 {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        &mut self.as_array_mut()[index]
    }
}

// Serialized as a bare `[x, y, z]` triple.
impl Serialize for Float3 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.x, self.y, self.z).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Float3 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Float3, D::Error> {
        let (x, y, z) = <(f32, f32, f32)>::deserialize(deserializer)?;
        Ok(Float3::new(x, y, z))
    }
}

impl Display for Float3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

//
// Arithmetic
//

impl Add for Float3 {
    type Output = Float3;
    fn add(self, other: Float3) -> Float3 {
        Float3::new(self.x + other.x,
                    self.y + other.y,
                    self.z + other.z)
    }
}

impl AddAssign for Float3 {
    fn add_assign(&mut self, other: Float3) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Float3 {
    type Output = Float3;
    fn sub(self, other: Float3) -> Float3 {
        Float3::new(self.x - other.x,
                    self.y - other.y,
                    self.z - other.z)
    }
}

impl SubAssign for Float3 {
    fn sub_assign(&mut self, other: Float3) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
    }
}

impl Neg for Float3 {
    type Output = Float3;
    fn neg(self) -> Float3 {
        Float3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul for Float3 {
    type Output = Float3;
    fn mul(self, other: Float3) -> Float3 {
        Float3::new(self.x * other.x,
                    self.y * other.y,
                    self.z * other.z)
    }
}

impl Mul<f32> for Float3 {
    type Output = Float3;
    fn mul(self, f: f32) -> Float3 {
        Float3::new(self.x * f,
                    self.y * f,
                    self.z * f)
    }
}

impl Mul<Float3> for f32 {
    type Output = Float3;
    fn mul(self, v: Float3) -> Float3 {
        v * self
    }
}

impl MulAssign<f32> for Float3 {
    fn mul_assign(&mut self, f: f32) {
        self.x *= f;
        self.y *= f;
        self.z *= f;
    }
}

impl MulAssign for Float3 {
    fn mul_assign(&mut self, other: Float3) {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
    }
}

/// Componentwise division. Every component of the divisor must be non-zero;
/// use [Float3::safe_divide] when that is not known.
impl Div for Float3 {
    type Output = Float3;
    fn div(self, other: Float3) -> Float3 {
        debug_assert!(other.x != 0.0 && other.y != 0.0 && other.z != 0.0,
                      "Float3 division by a zero component: {other}");
        Float3::new(self.x / other.x,
                    self.y / other.y,
                    self.z / other.z)
    }
}

/// Scalar division. The divisor must be non-zero.
impl Div<f32> for Float3 {
    type Output = Float3;
    fn div(self, f: f32) -> Float3 {
        debug_assert!(f != 0.0, "Float3 division by zero");
        Float3::new(self.x / f,
                    self.y / f,
                    self.z / f)
    }
}

#[cfg(test)]
mod test {
    use rand::{ Rng, SeedableRng };
    use rand_xorshift::XorShiftRng;

    use crate::Float3Error;
    use super::Float3;

    macro_rules! assert_approx_eq {
        ($a:expr, $b:expr) => {
            assert_approx_eq!($a, $b, EPSILON=0.00001);
        };
        ($a:expr, $b:expr, EPSILON=$epsilon:expr) => {
            match (&$a, &$b, &$epsilon) {
                (a, b, e) => {
                    if (*a - *b).abs() > *e {
                        panic!("assertion {} ~== {} failed\n  left: {:?}\n right: {:?}", stringify!($a), stringify!($b), a, b);
                    }
                }
            }
        };
    }

    fn random_vectors(seed: u64, count: usize) -> Vec<Float3> {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        (0..count)
            .map(|_| Float3::new(rng.random_range(-100.0..100.0),
                                 rng.random_range(-100.0..100.0),
                                 rng.random_range(-100.0..100.0)))
            .collect()
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Float3::default(), Float3::ZERO);
    }

    #[test]
    fn construction() {
        assert_eq!(Float3::splat(2.5), Float3::new(2.5, 2.5, 2.5));
        assert_eq!(Float3::splat_int(-3), Float3::new(-3.0, -3.0, -3.0));
        assert_eq!(Float3::from([1.0, 2.0, 3.0]), Float3::new(1.0, 2.0, 3.0));
        assert_eq!(Float3::from(&[4.0, 5.0, 6.0]), Float3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn try_from_slice() {
        let buffer: [f32; 4] = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(Float3::try_from(&buffer[1..]), Ok(Float3::new(2.0, 3.0, 4.0)));
        assert_eq!(Float3::try_from(&buffer[..]), Err(Float3Error::WrongLength { len: 4 }));
        assert_eq!(Float3::try_from(&buffer[..2]), Err(Float3Error::WrongLength { len: 2 }));
    }

    #[test]
    fn raw_buffer_access() {
        let mut v = Float3::new(1.0, 2.0, 3.0);
        assert_eq!(v.as_array(), &[1.0, 2.0, 3.0]);
        v.as_array_mut()[1] = 7.0;
        v[2] = 9.0;
        assert_eq!(v, Float3::new(1.0, 7.0, 9.0));
        assert_eq!(v[0], 1.0);
        let array: [f32; 3] = v.into();
        assert_eq!(array, [1.0, 7.0, 9.0]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let v = Float3::ONE;
        let _ = v[3];
    }

    #[test]
    fn arithmetic() {
        let a = Float3::new(1.0, 2.0, 3.0);
        let b = Float3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Float3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Float3::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Float3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * b, Float3::new(4.0, 10.0, 18.0));
        assert_eq!(a * 2.0, Float3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / a, Float3::new(4.0, 2.5, 2.0));
        assert_eq!(b / 2.0, Float3::new(2.0, 2.5, 3.0));
    }

    #[test]
    fn compound_assignment() {
        let mut v = Float3::new(1.0, 2.0, 3.0);
        v += Float3::ONE;
        assert_eq!(v, Float3::new(2.0, 3.0, 4.0));
        v -= Float3::new(2.0, 0.0, 1.0);
        assert_eq!(v, Float3::new(0.0, 3.0, 3.0));
        v *= 2.0;
        assert_eq!(v, Float3::new(0.0, 6.0, 6.0));
        v *= Float3::new(5.0, 0.5, -1.0);
        assert_eq!(v, Float3::new(0.0, 3.0, -6.0));
    }

    #[test]
    fn negation_and_subtraction_properties() {
        let vs = random_vectors(1, 64);
        for pair in vs.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(a + (-a), Float3::ZERO);
            assert_eq!(a - b, a + (-b));
        }
    }

    #[test]
    fn length_properties() {
        for v in random_vectors(2, 64) {
            assert_eq!(v.length_squared(), Float3::dot(v, v));
            assert_eq!(v.length(), v.length_squared().sqrt());
            assert_approx_eq!(v.normalized().length(), 1.0);
        }
    }

    #[test]
    fn normalize_and_get_length() {
        let mut v = Float3::new(0.0, -3.0, 4.0);
        assert_eq!(v.normalize_and_get_length(), 5.0);
        assert_eq!(v, Float3::new(0.0, -0.6, 0.8));

        let mut zero = Float3::ZERO;
        assert_eq!(zero.normalize_and_get_length(), 0.0);
        assert_eq!(zero, Float3::ZERO);
    }

    #[test]
    fn normalized_leaves_source_unchanged() {
        let v = Float3::new(10.0, 0.0, 0.0);
        assert_eq!(v.normalized(), Float3::UNIT_X);
        assert_eq!(v, Float3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn invert() {
        let mut v = Float3::new(1.0, -2.0, 0.5);
        v.invert();
        assert_eq!(v, Float3::new(-1.0, 2.0, -0.5));
    }

    #[test]
    fn is_zero_is_inverted() {
        assert!(Float3::new(1.0, 1.0, 1.0).is_zero());
        assert!(!Float3::new(0.0, 1.0, 1.0).is_zero());
        assert!(!Float3::ZERO.is_zero());
    }

    #[test]
    fn reflect() {
        let mut v = Float3::new(1.0, -1.0, 0.0);
        assert_eq!(v.reflected(Float3::UNIT_Y), Float3::new(1.0, 1.0, 0.0));
        assert_eq!(v, Float3::new(1.0, -1.0, 0.0));
        v.reflect(Float3::UNIT_Y);
        assert_eq!(v, Float3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn safe_divide() {
        let a = Float3::new(1.0, 2.0, 3.0);
        let b = Float3::new(0.0, 2.0, 0.0);
        assert_eq!(Float3::safe_divide(a, b), Float3::new(0.0, 1.0, 0.0));
        assert_eq!(Float3::safe_divide(a, Float3::ZERO), Float3::ZERO);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Float3 division by a zero component")]
    fn divide_by_zero_component() {
        let _ = Float3::new(1.0, 2.0, 3.0) / Float3::new(1.0, 0.0, 1.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Float3 division by zero")]
    fn divide_by_zero_scalar() {
        let _ = Float3::ONE / 0.0;
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn divide_by_zero_follows_ieee_in_release() {
        let v = Float3::new(1.0, -1.0, 0.0) / 0.0;
        assert_eq!(v.x, f32::INFINITY);
        assert_eq!(v.y, f32::NEG_INFINITY);
        assert!(v.z.is_nan());
        let w = Float3::ONE / Float3::new(0.0, 2.0, 1.0);
        assert_eq!(w, Float3::new(f32::INFINITY, 0.5, 1.0));
    }

    #[test]
    fn dot_and_cross() {
        let a = Float3::new(1.0, 2.0, 3.0);
        let b = Float3::new(4.0, -5.0, 6.0);
        assert_eq!(Float3::dot(a, b), 12.0);
        assert_eq!(Float3::cross_high_precision(Float3::UNIT_X, Float3::UNIT_Y), Float3::UNIT_Z);
        let c = Float3::cross_high_precision(a, b);
        assert_eq!(Float3::dot(c, a), 0.0);
        assert_eq!(Float3::dot(c, b), 0.0);
    }

    #[test]
    fn project() {
        let p = Float3::project(Float3::new(2.0, 3.0, 4.0), Float3::new(0.0, 0.0, 10.0));
        assert_eq!(p, Float3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn distance() {
        let a = Float3::new(1.0, 1.0, 1.0);
        let b = Float3::new(3.0, 4.0, 7.0);
        assert_eq!(Float3::distance(a, b), 7.0);
        for pair in random_vectors(3, 64).windows(2) {
            assert_eq!(Float3::distance(pair[0], pair[1]), Float3::distance(pair[1], pair[0]));
        }
    }

    #[test]
    fn distance_squared_is_dot_product() {
        let a = Float3::new(1.0, 0.0, 0.0);
        let b = Float3::ZERO;
        assert_eq!(Float3::distance_squared(a, b), 0.0);
        assert_eq!(Float3::distance(a, b).powi(2), 1.0);
        let c = Float3::new(2.0, 3.0, 4.0);
        assert_eq!(Float3::distance_squared(a, c), Float3::dot(a, c));
    }

    #[test]
    fn interpolate() {
        let a = Float3::ZERO;
        let b = Float3::new(2.0, 4.0, 6.0);
        assert_eq!(Float3::interpolate(a, b, 0.0), a);
        assert_eq!(Float3::interpolate(a, b, 1.0), b);
        assert_eq!(Float3::interpolate(a, b, 0.5), Float3::new(1.0, 2.0, 3.0));
        assert_eq!(Float3::interpolate(a, b, 2.0), Float3::new(4.0, 8.0, 12.0));
    }

    #[test]
    fn display() {
        assert_eq!(Float3::new(1.0, -2.5, 0.0).to_string(), "(1, -2.5, 0)");
    }
}
