//! 3- and 4-component vectors
//!
//! Small `#[repr(C)]` value types over `[f64; N]`. Nothing here mutates in
//! place; arithmetic returns fresh vectors. Components are narrowed to `f64`
//! only when handed to glam's single-precision types.

use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Index, Mul, Neg, Sub};

/// Tolerance used by [`Vec3::approx_eq`] and [`vec3_equal`]
pub const VEC3_EPSILON: f64 = 1e-7;

/// A 3-component vector
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vec3(pub [f64; 3]);

impl Vec3 {
    pub const ZERO: Self = Self([0.0, 0.0, 0.0]);
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    pub fn z(&self) -> f64 {
        self.0[2]
    }

    /// Euclidean norm
    pub fn length(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Unit vector in the same direction
    ///
    /// A zero-length vector normalizes to [`Vec3::ZERO`] rather than NaN.
    pub fn normalize(&self) -> Self {
        let d = self.length();
        if d == 0.0 {
            return Self::ZERO;
        }
        Self([self.0[0] / d, self.0[1] / d, self.0[2] / d])
    }

    pub fn dot(&self, other: Self) -> f64 {
        self.0[0] * other.0[0] + self.0[1] * other.0[1] + self.0[2] * other.0[2]
    }

    pub fn cross(&self, other: Self) -> Self {
        let [ax, ay, az] = self.0;
        let [bx, by, bz] = other.0;
        Self([ay * bz - by * az, az * bx - bz * ax, ax * by - bx * ay])
    }

    /// Angle between two vectors in radians
    ///
    /// Not guarded: if either vector has zero length the result is NaN.
    pub fn angle(&self, other: Self) -> f64 {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    pub fn scale(&self, k: f64) -> Self {
        Self([self.0[0] * k, self.0[1] * k, self.0[2] * k])
    }

    /// Component-wise comparison within [`VEC3_EPSILON`]
    pub fn approx_eq(&self, other: Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() < VEC3_EPSILON)
    }

    /// Extend to a homogeneous vector with the given `w`
    ///
    /// `w = 1` gives a point, `w = 0` a direction.
    pub fn extend(&self, w: f64) -> Vec4 {
        Vec4([self.0[0], self.0[1], self.0[2], w])
    }
}

/// Compare two optional vectors
///
/// Two absent vectors are equal, exactly one absent vector is not, two
/// present vectors compare with [`Vec3::approx_eq`].
pub fn vec3_equal(a: Option<Vec3>, b: Option<Vec3>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.approx_eq(b),
        _ => false,
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1], self.0[2] + rhs.0[2]])
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1], self.0[2] - rhs.0[2]])
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, k: f64) -> Vec3 {
        self.scale(k)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        self.scale(-1.0)
    }
}

impl Index<usize> for Vec3 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self(v)
    }
}

impl From<glam::DVec3> for Vec3 {
    fn from(v: glam::DVec3) -> Self {
        Self(v.to_array())
    }
}

impl From<Vec3> for glam::DVec3 {
    fn from(v: Vec3) -> Self {
        glam::DVec3::from_array(v.0)
    }
}

impl From<glam::Vec3> for Vec3 {
    fn from(v: glam::Vec3) -> Self {
        Self::from(v.as_dvec3())
    }
}

impl From<Vec3> for glam::Vec3 {
    fn from(v: Vec3) -> Self {
        glam::DVec3::from(v).as_vec3()
    }
}

/// A 4-component (homogeneous) vector
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vec4(pub [f64; 4]);

impl Vec4 {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self([x, y, z, w])
    }

    /// Drop `w` without a homogeneous divide
    pub fn truncate(&self) -> Vec3 {
        Vec3([self.0[0], self.0[1], self.0[2]])
    }
}

impl Index<usize> for Vec4 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl From<glam::DVec4> for Vec4 {
    fn from(v: glam::DVec4) -> Self {
        Self(v.to_array())
    }
}

impl From<Vec4> for glam::DVec4 {
    fn from(v: Vec4) -> Self {
        glam::DVec4::from_array(v.0)
    }
}

impl From<Vec4> for glam::Vec4 {
    fn from(v: Vec4) -> Self {
        glam::DVec4::from(v).as_vec4()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        assert_eq!(Vec3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vec3::ZERO.length(), 0.0);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let n = Vec3::ZERO.normalize();
        assert_eq!(n, Vec3::ZERO);
        assert!(!n.x().is_nan());
    }

    #[test]
    fn test_normalize_matches_glam() {
        let v = Vec3::new(1.0, -2.0, 2.0);
        let ours: glam::DVec3 = v.normalize().into();
        let theirs = glam::DVec3::new(1.0, -2.0, 2.0).normalize();
        assert!(ours.abs_diff_eq(theirs, 1e-12));
        assert!((v.normalize().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_dot_and_cross() {
        assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);

        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);
        let ours: glam::DVec3 = a.cross(b).into();
        let theirs = glam::DVec3::from(a).cross(glam::DVec3::from(b));
        assert!(ours.abs_diff_eq(theirs, 1e-12));
        assert!((a.dot(b) - glam::DVec3::from(a).dot(glam::DVec3::from(b))).abs() < 1e-12);
    }

    #[test]
    fn test_angle() {
        let right = Vec3::X.angle(Vec3::Y);
        assert!((right - std::f64::consts::FRAC_PI_2).abs() < 1e-6);

        let same = Vec3::new(2.0, 0.0, 0.0).angle(Vec3::X);
        assert!(same.abs() < 1e-6);
    }

    #[test]
    fn test_angle_zero_vector_is_nan() {
        assert!(Vec3::ZERO.angle(Vec3::X).is_nan());
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vec3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.scale(0.0), Vec3::ZERO);
    }

    #[test]
    fn test_vec3_equal_optional() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let nudged = Vec3::new(1.0, 2.0, 3.0 + 1e-8);

        assert!(vec3_equal(None, None));
        assert!(!vec3_equal(Some(a), None));
        assert!(!vec3_equal(None, Some(a)));
        assert!(vec3_equal(Some(a), Some(nudged)));
        assert!(!vec3_equal(Some(a), Some(Vec3::new(1.0, 2.0, 3.1))));
    }

    #[test]
    fn test_vec3_equal_tolerance_at_unit_magnitude() {
        let one = Vec3::new(1.0, 0.0, 0.0);
        assert!(vec3_equal(Some(one), Some(Vec3::new(1.0 + 5e-8, 0.0, 0.0))));
        assert!(!vec3_equal(Some(one), Some(Vec3::new(1.0 + 2e-7, 0.0, 0.0))));

        let far = Vec3::new(1000.0, -250.0, 12.5);
        assert!(vec3_equal(Some(far), Some(far + Vec3::new(5e-8, 0.0, -5e-8))));
    }

    #[test]
    fn test_glam_single_precision_conversion() {
        let v = Vec3::new(0.1, 0.2, 0.3);
        let narrow: glam::Vec3 = v.into();
        assert_eq!(narrow, glam::Vec3::new(0.1, 0.2, 0.3));
        let back = Vec3::from(narrow);
        assert!((back.x() - 0.1).abs() < 1e-7);
    }

    #[test]
    fn test_extend_keeps_given_w() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.extend(1.0), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(v.extend(0.0), Vec4::new(1.0, 2.0, 3.0, 0.0));
    }

    #[test]
    fn test_pod_layout() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 32);
        assert_eq!(v.truncate(), Vec3::new(1.0, 2.0, 3.0));
    }
}
