//! Transform stack FFI bindings
//!
//! C-compatible API for the Rust transform stack.

use crate::{read_mat4, write_mat4};
use gl2d_transform::TransformStack;
use libc::c_int;

/// Opaque handle to TransformStack (C-compatible)
pub struct GL2DTransform {
    _private: [u8; 0],
}

unsafe fn stack_mut<'a>(ptr: *mut GL2DTransform) -> Option<&'a mut TransformStack> {
    (ptr as *mut TransformStack).as_mut()
}

// ============================================================================
// TRANSFORM STACK API
// ============================================================================

/// Create a transform stack
///
/// `base` may be null for an identity base frame, otherwise it must point to
/// 16 column-major floats.
///
/// # Safety
/// See above.
#[no_mangle]
pub unsafe extern "C" fn gl2d_transform_create(base: *const f32) -> *mut GL2DTransform {
    let stack = match read_mat4(base) {
        Some(m) => TransformStack::with_base(m),
        None => TransformStack::new(),
    };
    Box::into_raw(Box::new(stack)) as *mut GL2DTransform
}

/// Destroy a transform stack
///
/// # Safety
/// Caller must ensure ptr is valid and not already freed.
#[no_mangle]
pub unsafe extern "C" fn gl2d_transform_destroy(ptr: *mut GL2DTransform) {
    if !ptr.is_null() {
        let _ = Box::from_raw(ptr as *mut TransformStack);
    }
}

/// Push a frame; `matrix` may be null for identity
///
/// # Safety
/// Caller must ensure ptr is valid and a non-null matrix holds 16 floats.
#[no_mangle]
pub unsafe extern "C" fn gl2d_transform_push(
    ptr: *mut GL2DTransform,
    matrix: *const f32,
) -> c_int {
    let Some(stack) = stack_mut(ptr) else {
        return 0;
    };

    match read_mat4(matrix) {
        Some(m) => stack.push_matrix(m),
        None => stack.push(),
    };
    1
}

/// Pop a frame; no-op at depth 0
///
/// # Safety
/// Caller must ensure ptr is valid.
#[no_mangle]
pub unsafe extern "C" fn gl2d_transform_pop(ptr: *mut GL2DTransform) -> c_int {
    let Some(stack) = stack_mut(ptr) else {
        return 0;
    };
    stack.pop();
    1
}

/// Replace the top frame with the identity
///
/// # Safety
/// Caller must ensure ptr is valid.
#[no_mangle]
pub unsafe extern "C" fn gl2d_transform_set_identity(ptr: *mut GL2DTransform) -> c_int {
    let Some(stack) = stack_mut(ptr) else {
        return 0;
    };
    stack.set_identity();
    1
}

/// # Safety
/// Caller must ensure ptr is valid.
#[no_mangle]
pub unsafe extern "C" fn gl2d_transform_translate(
    ptr: *mut GL2DTransform,
    x: f64,
    y: f64,
    z: f64,
) -> c_int {
    let Some(stack) = stack_mut(ptr) else {
        return 0;
    };
    stack.translate(x, y, z);
    1
}

/// # Safety
/// Caller must ensure ptr is valid.
#[no_mangle]
pub unsafe extern "C" fn gl2d_transform_scale(
    ptr: *mut GL2DTransform,
    x: f64,
    y: f64,
    z: f64,
) -> c_int {
    let Some(stack) = stack_mut(ptr) else {
        return 0;
    };
    stack.scale(x, y, z);
    1
}

/// Weighted per-axis rotation, applied Z then Y then X
///
/// # Safety
/// Caller must ensure ptr is valid.
#[no_mangle]
pub unsafe extern "C" fn gl2d_transform_rotate(
    ptr: *mut GL2DTransform,
    angle_degrees: f64,
    x: f64,
    y: f64,
    z: f64,
) -> c_int {
    let Some(stack) = stack_mut(ptr) else {
        return 0;
    };
    stack.rotate(angle_degrees, x, y, z);
    1
}

/// Rotate about X, Y then Z by separate angles
///
/// # Safety
/// Caller must ensure ptr is valid.
#[no_mangle]
pub unsafe extern "C" fn gl2d_transform_rotate_euler(
    ptr: *mut GL2DTransform,
    x_degrees: f64,
    y_degrees: f64,
    z_degrees: f64,
) -> c_int {
    let Some(stack) = stack_mut(ptr) else {
        return 0;
    };
    stack.rotate_euler(gl2d_math::Vec3::new(x_degrees, y_degrees, z_degrees));
    1
}

/// Write the resolved matrix to `out` (16 column-major floats)
///
/// # Safety
/// Caller must ensure ptr is valid and out holds 16 floats.
#[no_mangle]
pub unsafe extern "C" fn gl2d_transform_resolve(ptr: *mut GL2DTransform, out: *mut f32) -> c_int {
    if out.is_null() {
        return 0;
    }
    let Some(stack) = stack_mut(ptr) else {
        return 0;
    };

    write_mat4(&stack.resolve(), out);
    1
}

/// Current nesting depth
///
/// # Safety
/// Caller must ensure ptr is valid.
#[no_mangle]
pub unsafe extern "C" fn gl2d_transform_depth(ptr: *const GL2DTransform) -> usize {
    if ptr.is_null() {
        return 0;
    }

    let stack = &*(ptr as *const TransformStack);
    stack.depth()
}
