//! GL2D FFI - C Foreign Function Interface
//!
//! Provides a C-compatible API so a host graphics layer can drive the
//! transform stack and canvas state and read back column-major matrices
//! ready for `uniformMatrix4fv`.
//!
//! Scalars cross as `double`; matrices cross as 16 `float`s.

use gl2d_math::Mat4;
use libc::{c_char, c_int};

mod canvas_ffi;
mod transform_ffi;
pub use canvas_ffi::*;
pub use transform_ffi::*;

/// Read 16 column-major `f32`s, `None` for a null pointer
///
/// # Safety
/// A non-null `ptr` must point to 16 readable floats.
pub(crate) unsafe fn read_mat4(ptr: *const f32) -> Option<Mat4> {
    if ptr.is_null() {
        return None;
    }
    let slice = std::slice::from_raw_parts(ptr, 16);
    let mut m = [0.0f32; 16];
    m.copy_from_slice(slice);
    Some(Mat4::from_uniform_array(m))
}

/// Write 16 column-major `f32`s, the layout `uniformMatrix4fv` takes
///
/// # Safety
/// `out` must be non-null and point to 16 writable floats.
pub(crate) unsafe fn write_mat4(m: &Mat4, out: *mut f32) {
    let slice = std::slice::from_raw_parts_mut(out, 16);
    slice.copy_from_slice(&m.to_uniform_array());
}

// ============================================================================
// MATRIX API
// ============================================================================

/// Compose `a · b` into `out`
///
/// # Safety
/// All pointers must reference 16 floats.
#[no_mangle]
pub unsafe extern "C" fn gl2d_mat4_multiply(
    a: *const f32,
    b: *const f32,
    out: *mut f32,
) -> c_int {
    if out.is_null() {
        return 0;
    }

    match (read_mat4(a), read_mat4(b)) {
        (Some(a), Some(b)) => {
            write_mat4(&a.multiply(&b), out);
            1
        }
        _ => 0,
    }
}

/// Invert `m` into `out`
///
/// Returns 0 and leaves `out` untouched when `m` is singular.
///
/// # Safety
/// Both pointers must reference 16 floats.
#[no_mangle]
pub unsafe extern "C" fn gl2d_mat4_inverse(m: *const f32, out: *mut f32) -> c_int {
    if out.is_null() {
        return 0;
    }

    match read_mat4(m).and_then(|m| m.inverse()) {
        Some(inv) => {
            write_mat4(&inv, out);
            1
        }
        None => 0,
    }
}

/// Perspective projection into `out`
///
/// # Safety
/// `out` must reference 16 floats.
#[no_mangle]
pub unsafe extern "C" fn gl2d_mat4_perspective(
    fov_y_degrees: f64,
    aspect: f64,
    near: f64,
    far: f64,
    out: *mut f32,
) -> c_int {
    if out.is_null() {
        return 0;
    }

    write_mat4(&Mat4::perspective(fov_y_degrees, aspect, near, far), out);
    1
}

// ============================================================================
// UTILITY FUNCTIONS
// ============================================================================

/// Get library version string
#[no_mangle]
pub extern "C" fn gl2d_version() -> *const c_char {
    "0.1.0\0".as_ptr() as *const c_char
}
