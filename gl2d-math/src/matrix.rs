//! 4x4 matrix kernel
//!
//! Column-major storage: element at column `c`, row `r` lives at `c * 4 + r`,
//! which is the layout `glam::Mat4::from_cols_array` and GL's
//! `uniformMatrix4fv(.., transpose = false, ..)` expect.
//!
//! `a.multiply(b)` is the composition `a · b`: a point is transformed by `b`
//! first and the result is then transformed by `a`.
//!
//! Elements are `f64`; [`Mat4::to_uniform_array`] narrows to the `f64`
//! layout a GL uniform upload takes.

use crate::vector::{Vec3, Vec4};
use bytemuck::{Pod, Zeroable};
use std::ops::{Index, Mul};

/// A 4x4 column-major matrix
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Mat4(pub [f64; 16]);

/// The twelve 2x2 partial products used by both `determinant` and `inverse`
///
/// `a` covers the first two columns, `b` the last two.
#[derive(Debug, Clone, Copy)]
struct BlockProducts {
    a: [f64; 6],
    b: [f64; 6],
}

impl BlockProducts {
    fn of(m: &[f64; 16]) -> Self {
        Self {
            a: [
                m[0] * m[5] - m[1] * m[4],
                m[0] * m[6] - m[2] * m[4],
                m[0] * m[7] - m[3] * m[4],
                m[1] * m[6] - m[2] * m[5],
                m[1] * m[7] - m[3] * m[5],
                m[2] * m[7] - m[3] * m[6],
            ],
            b: [
                m[8] * m[13] - m[9] * m[12],
                m[8] * m[14] - m[10] * m[12],
                m[8] * m[15] - m[11] * m[12],
                m[9] * m[14] - m[10] * m[13],
                m[9] * m[15] - m[11] * m[13],
                m[10] * m[15] - m[11] * m[14],
            ],
        }
    }

    fn determinant(&self) -> f64 {
        let [a0, a1, a2, a3, a4, a5] = self.a;
        let [b0, b1, b2, b3, b4, b5] = self.b;
        a0 * b5 - a1 * b4 + a2 * b3 + a3 * b2 - a4 * b1 + a5 * b0
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub const ZERO: Self = Self([0.0; 16]);

    pub const fn from_cols_array(m: [f64; 16]) -> Self {
        Self(m)
    }

    pub const fn to_cols_array(&self) -> [f64; 16] {
        self.0
    }

    /// Element at column `col`, row `row`
    pub fn get(&self, col: usize, row: usize) -> f64 {
        self.0[col * 4 + row]
    }

    /// Translation by `t` (fourth column)
    pub fn from_translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY.0;
        m[12] = t.0[0];
        m[13] = t.0[1];
        m[14] = t.0[2];
        Self(m)
    }

    /// Diagonal scale by `s`
    pub fn from_scale(s: Vec3) -> Self {
        let mut m = Self::IDENTITY.0;
        m[0] = s.0[0];
        m[5] = s.0[1];
        m[10] = s.0[2];
        Self(m)
    }

    /// Rotation about X with every trig term multiplied by `weight`
    pub fn rotation_x(sin: f64, cos: f64, weight: f64) -> Self {
        let mut m = Self::IDENTITY.0;
        m[5] = cos * weight;
        m[9] = sin * weight;
        m[6] = -sin * weight;
        m[10] = cos * weight;
        Self(m)
    }

    /// Rotation about Y with every trig term multiplied by `weight`
    pub fn rotation_y(sin: f64, cos: f64, weight: f64) -> Self {
        let mut m = Self::IDENTITY.0;
        m[0] = cos * weight;
        m[8] = -sin * weight;
        m[2] = sin * weight;
        m[10] = cos * weight;
        Self(m)
    }

    /// Rotation about Z with every trig term multiplied by `weight`
    pub fn rotation_z(sin: f64, cos: f64, weight: f64) -> Self {
        let mut m = Self::IDENTITY.0;
        m[0] = cos * weight;
        m[4] = sin * weight;
        m[1] = -sin * weight;
        m[5] = cos * weight;
        Self(m)
    }

    /// Composition `self · rhs`
    pub fn multiply(&self, rhs: &Mat4) -> Mat4 {
        let a = &self.0;
        let b = &rhs.0;
        let mut out = [0.0f64; 16];

        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = a[row] * b[col * 4]
                    + a[4 + row] * b[col * 4 + 1]
                    + a[8 + row] * b[col * 4 + 2]
                    + a[12 + row] * b[col * 4 + 3];
            }
        }

        Mat4(out)
    }

    /// Full homogeneous product `M · p`
    pub fn transform_point4(&self, p: Vec4) -> Vec4 {
        let m = &self.0;
        let [x, y, z, w] = p.0;
        Vec4([
            m[0] * x + m[4] * y + m[8] * z + m[12] * w,
            m[1] * x + m[5] * y + m[9] * z + m[13] * w,
            m[2] * x + m[6] * y + m[10] * z + m[14] * w,
            m[3] * x + m[7] * y + m[11] * z + m[15] * w,
        ])
    }

    /// Affine apply: adds the translation column, no homogeneous divide
    pub fn transform_point3(&self, p: Vec3) -> Vec3 {
        let m = &self.0;
        let [x, y, z] = p.0;
        Vec3([
            m[0] * x + m[4] * y + m[8] * z + m[12],
            m[1] * x + m[5] * y + m[9] * z + m[13],
            m[2] * x + m[6] * y + m[10] * z + m[14],
        ])
    }

    pub fn transpose(&self) -> Mat4 {
        let m = &self.0;
        Mat4([
            m[0], m[4], m[8], m[12], //
            m[1], m[5], m[9], m[13], //
            m[2], m[6], m[10], m[14], //
            m[3], m[7], m[11], m[15],
        ])
    }

    pub fn determinant(&self) -> f64 {
        BlockProducts::of(&self.0).determinant()
    }

    /// Inverse, or `None` when the determinant is exactly zero
    pub fn inverse(&self) -> Option<Mat4> {
        let m = &self.0;
        let p = BlockProducts::of(m);
        let det = p.determinant();
        if det == 0.0 {
            return None;
        }

        let [a0, a1, a2, a3, a4, a5] = p.a;
        let [b0, b1, b2, b3, b4, b5] = p.b;

        let mut inv = [0.0f64; 16];
        inv[0] = m[5] * b5 - m[6] * b4 + m[7] * b3;
        inv[4] = -m[4] * b5 + m[6] * b2 - m[7] * b1;
        inv[8] = m[4] * b4 - m[5] * b2 + m[7] * b0;
        inv[12] = -m[4] * b3 + m[5] * b1 - m[6] * b0;
        inv[1] = -m[1] * b5 + m[2] * b4 - m[3] * b3;
        inv[5] = m[0] * b5 - m[2] * b2 + m[3] * b1;
        inv[9] = -m[0] * b4 + m[1] * b2 - m[3] * b0;
        inv[13] = m[0] * b3 - m[1] * b1 + m[2] * b0;
        inv[2] = m[13] * a5 - m[14] * a4 + m[15] * a3;
        inv[6] = -m[12] * a5 + m[14] * a2 - m[15] * a1;
        inv[10] = m[12] * a4 - m[13] * a2 + m[15] * a0;
        inv[14] = -m[12] * a3 + m[13] * a1 - m[14] * a0;
        inv[3] = -m[9] * a5 + m[10] * a4 - m[11] * a3;
        inv[7] = m[8] * a5 - m[10] * a2 + m[11] * a1;
        inv[11] = -m[8] * a4 + m[9] * a2 - m[11] * a0;
        inv[15] = m[8] * a3 - m[9] * a1 + m[10] * a0;

        let inv_det = 1.0 / det;
        for v in inv.iter_mut() {
            *v *= inv_det;
        }

        Some(Mat4(inv))
    }

    /// Symmetric perspective projection (GL clip space, right-handed)
    ///
    /// `fov_y_degrees` is the full vertical field of view.
    pub fn perspective(fov_y_degrees: f64, aspect: f64, near: f64, far: f64) -> Mat4 {
        let y_fac = (fov_y_degrees * std::f64::consts::PI / 360.0).tan();
        let x_fac = y_fac * aspect;
        Mat4([
            1.0 / x_fac,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0 / y_fac,
            0.0,
            0.0,
            0.0,
            0.0,
            -(far + near) / (far - near),
            -1.0,
            0.0,
            0.0,
            -(2.0 * far * near) / (far - near),
            0.0,
        ])
    }

    /// Element-wise comparison within `epsilon`
    pub fn abs_diff_eq(&self, other: &Mat4, epsilon: f64) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    /// Column-major `f32` elements for `uniformMatrix4fv`
    pub fn to_uniform_array(&self) -> [f32; 16] {
        self.0.map(|v| v as f32)
    }

    /// Raw bytes of [`to_uniform_array`](Self::to_uniform_array)
    pub fn uniform_bytes(&self) -> [u8; 64] {
        bytemuck::cast(self.to_uniform_array())
    }

    /// Widen a column-major `f32` array, as read back from a uniform
    pub fn from_uniform_array(m: [f32; 16]) -> Self {
        Self(m.map(f64::from))
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        self.multiply(&rhs)
    }
}

impl Index<usize> for Mat4 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl From<glam::DMat4> for Mat4 {
    fn from(m: glam::DMat4) -> Self {
        Self(m.to_cols_array())
    }
}

impl From<Mat4> for glam::DMat4 {
    fn from(m: Mat4) -> Self {
        glam::DMat4::from_cols_array(&m.0)
    }
}

impl From<glam::Mat4> for Mat4 {
    fn from(m: glam::Mat4) -> Self {
        Self::from_uniform_array(m.to_cols_array())
    }
}

impl From<Mat4> for glam::Mat4 {
    fn from(m: Mat4) -> Self {
        glam::Mat4::from_cols_array(&m.to_uniform_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_a() -> Mat4 {
        glam::DMat4::from_scale_rotation_translation(
            glam::DVec3::new(2.0, 0.5, 1.5),
            glam::DQuat::from_rotation_z(0.3) * glam::DQuat::from_rotation_x(-0.7),
            glam::DVec3::new(4.0, -2.0, 1.0),
        )
        .into()
    }

    fn sample_b() -> Mat4 {
        Mat4([
            1.0, 2.0, 0.0, 0.0, //
            0.0, 1.0, 3.0, 0.0, //
            4.0, 0.0, 1.0, 0.0, //
            -1.0, 5.0, 2.0, 1.0,
        ])
    }

    fn sample_c() -> Mat4 {
        Mat4::from_translation(Vec3::new(0.25, 7.0, -3.0))
            .multiply(&Mat4::from_scale(Vec3::new(1.0, -2.0, 3.0)))
    }

    #[test]
    fn test_identity_is_neutral() {
        let a = sample_a();
        assert_eq!(a.multiply(&Mat4::IDENTITY), a);
        assert_eq!(Mat4::IDENTITY.multiply(&a), a);
    }

    #[test]
    fn test_multiply_matches_glam() {
        let a = sample_a();
        let b = sample_b();
        let expected: Mat4 = (glam::DMat4::from(a) * glam::DMat4::from(b)).into();
        assert!(a.multiply(&b).abs_diff_eq(&expected, 1e-12));
        assert!((a * b).abs_diff_eq(&expected, 1e-12));
    }

    #[test]
    fn test_multiply_associative() {
        let (a, b, c) = (sample_a(), sample_b(), sample_c());
        let left = a.multiply(&b).multiply(&c);
        let right = a.multiply(&b.multiply(&c));
        assert!(left.abs_diff_eq(&right, 1e-10));
    }

    #[test]
    fn test_composition_applies_right_operand_first() {
        let t = Mat4::from_translation(Vec3::new(5.0, 0.0, 0.0));
        let s = Mat4::from_scale(Vec3::new(2.0, 2.0, 2.0));
        let p = t.multiply(&s).transform_point3(Vec3::X);
        assert!(p.approx_eq(Vec3::new(7.0, 0.0, 0.0)));
    }

    #[test]
    fn test_transform_point3_adds_translation() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_transform_point4_matches_glam() {
        let a = sample_a();
        let p = Vec4::new(1.0, -2.0, 0.5, 1.0);
        let ours: glam::DVec4 = a.transform_point4(p).into();
        let theirs = glam::DMat4::from(a) * glam::DVec4::from(p);
        assert!(ours.abs_diff_eq(theirs, 1e-12));

        // w = 0 ignores translation
        let dir = a.transform_point4(Vec4::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(dir, Vec4::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_transpose() {
        let b = sample_b();
        let t = b.transpose();
        assert_eq!(t.get(0, 1), b.get(1, 0));
        assert_eq!(t.get(3, 0), b.get(0, 3));
        assert_eq!(t.transpose(), b);
        assert_eq!(Mat4::from(glam::DMat4::from(b).transpose()), t);
    }

    #[test]
    fn test_determinant_matches_glam() {
        for m in [sample_a(), sample_b(), sample_c()] {
            let expected = glam::DMat4::from(m).determinant();
            assert!(
                (m.determinant() - expected).abs() < 1e-9,
                "det {} vs glam {}",
                m.determinant(),
                expected
            );
        }
        assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn test_inverse_roundtrip() {
        for m in [sample_a(), sample_b(), sample_c()] {
            let inv = m.inverse().expect("invertible");
            assert!(m.multiply(&inv).abs_diff_eq(&Mat4::IDENTITY, 1e-12));
            let back = inv.inverse().expect("invertible");
            assert!(back.abs_diff_eq(&m, 1e-10));
        }
    }

    #[test]
    fn test_inverse_singular() {
        assert!(Mat4::ZERO.inverse().is_none());

        // Two equal columns, rank deficient
        let mut m = sample_b().0;
        m[4..8].copy_from_slice(&[1.0, 2.0, 0.0, 0.0]);
        let singular = Mat4(m);
        assert_eq!(singular.determinant(), 0.0);
        assert!(singular.inverse().is_none());
    }

    #[test]
    fn test_perspective_matches_glam() {
        let ours = Mat4::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
        let theirs: Mat4 =
            glam::DMat4::perspective_rh_gl(60f64.to_radians(), 16.0 / 9.0, 0.1, 100.0).into();
        assert!(ours.abs_diff_eq(&theirs, 1e-12));
    }

    #[test]
    fn test_rotation_z_half_turn() {
        let a = -180f64.to_radians();
        let r = Mat4::rotation_z(a.sin(), a.cos(), 1.0);
        let p = r.transform_point3(Vec3::X);
        assert!(p.approx_eq(Vec3::new(-1.0, 0.0, 0.0)), "got {:?}", p);
    }

    #[test]
    fn test_weighted_rotation_scales_trig_terms_only() {
        let r = Mat4::rotation_x(0.0, 1.0, 2.0);
        assert_eq!(r.get(1, 1), 2.0);
        assert_eq!(r.get(2, 2), 2.0);
        assert_eq!(r.get(0, 0), 1.0);
        assert_eq!(r.get(3, 3), 1.0);
    }

    #[test]
    fn test_uniform_upload_is_single_precision() {
        let m = sample_a();
        let narrow = m.to_uniform_array();
        assert_eq!(narrow[12], 4.0f32);
        assert_eq!(narrow[0], m[0] as f32);

        let bytes = m.uniform_bytes();
        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[48..52], &4.0f32.to_ne_bytes()[..]);

        let widened = Mat4::from_uniform_array(narrow);
        assert!(widened.abs_diff_eq(&m, 1e-6));
    }
}
