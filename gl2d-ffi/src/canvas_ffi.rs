//! Canvas FFI bindings
//!
//! C-compatible API for the 2D canvas state. Draw calls hand back the matrix
//! and color the host needs for its own buffer upload and draw.

use crate::write_mat4;
use gl2d_canvas::{Canvas, CanvasConfig, DrawCommand};
use libc::{c_char, c_int};
use std::ffi::CStr;

/// Opaque handle to Canvas (C-compatible)
pub struct GL2DCanvas {
    _private: [u8; 0],
}

unsafe fn canvas_mut<'a>(ptr: *mut GL2DCanvas) -> Option<&'a mut Canvas> {
    (ptr as *mut Canvas).as_mut()
}

unsafe fn style_str<'a>(value: *const c_char) -> Option<&'a str> {
    if value.is_null() {
        return None;
    }
    match CStr::from_ptr(value).to_str() {
        Ok(s) => Some(s),
        Err(err) => {
            log::warn!("style string is not valid UTF-8: {}", err);
            None
        }
    }
}

/// Copy a command's matrix and first vertex color to the out-parameters
unsafe fn write_command(cmd: &DrawCommand, matrix_out: *mut f32, color_out: *mut f32) {
    write_mat4(&cmd.transform, matrix_out);
    if !color_out.is_null() {
        let slice = std::slice::from_raw_parts_mut(color_out, 4);
        slice.copy_from_slice(&cmd.colors[0].0);
    }
}

// ============================================================================
// CANVAS API
// ============================================================================

/// Create a canvas with default settings at the given size
///
/// # Safety
/// Safe to call.
#[no_mangle]
pub unsafe extern "C" fn gl2d_canvas_create(width: u32, height: u32) -> *mut GL2DCanvas {
    let canvas = Box::new(Canvas::new(CanvasConfig {
        width,
        height,
        ..Default::default()
    }));
    Box::into_raw(canvas) as *mut GL2DCanvas
}

/// Destroy a canvas
///
/// # Safety
/// Caller must ensure ptr is valid and not already freed.
#[no_mangle]
pub unsafe extern "C" fn gl2d_canvas_destroy(ptr: *mut GL2DCanvas) {
    if !ptr.is_null() {
        let _ = Box::from_raw(ptr as *mut Canvas);
    }
}

/// # Safety
/// Caller must ensure ptr is valid.
#[no_mangle]
pub unsafe extern "C" fn gl2d_canvas_translate(ptr: *mut GL2DCanvas, x: f64, y: f64) -> c_int {
    let Some(canvas) = canvas_mut(ptr) else {
        return 0;
    };
    canvas.translate(x, y);
    1
}

/// # Safety
/// Caller must ensure ptr is valid.
#[no_mangle]
pub unsafe extern "C" fn gl2d_canvas_rotate(ptr: *mut GL2DCanvas, degrees: f64) -> c_int {
    let Some(canvas) = canvas_mut(ptr) else {
        return 0;
    };
    canvas.rotate(degrees);
    1
}

/// # Safety
/// Caller must ensure ptr is valid.
#[no_mangle]
pub unsafe extern "C" fn gl2d_canvas_scale(ptr: *mut GL2DCanvas, x: f64, y: f64) -> c_int {
    let Some(canvas) = canvas_mut(ptr) else {
        return 0;
    };
    canvas.scale(x, y);
    1
}

/// # Safety
/// Caller must ensure ptr is valid.
#[no_mangle]
pub unsafe extern "C" fn gl2d_canvas_save(ptr: *mut GL2DCanvas) -> c_int {
    let Some(canvas) = canvas_mut(ptr) else {
        return 0;
    };
    canvas.save();
    1
}

/// # Safety
/// Caller must ensure ptr is valid.
#[no_mangle]
pub unsafe extern "C" fn gl2d_canvas_restore(ptr: *mut GL2DCanvas) -> c_int {
    let Some(canvas) = canvas_mut(ptr) else {
        return 0;
    };
    canvas.restore();
    1
}

/// Set the fill style from an `rgb()`/`rgba()` string
///
/// Returns 0 and keeps the previous style if the string is rejected.
///
/// # Safety
/// Caller must ensure ptr is valid and value is a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn gl2d_canvas_set_fill_style(
    ptr: *mut GL2DCanvas,
    value: *const c_char,
) -> c_int {
    let (Some(canvas), Some(value)) = (canvas_mut(ptr), style_str(value)) else {
        return 0;
    };

    match canvas.set_fill_style(value) {
        Ok(()) => 1,
        Err(_) => 0,
    }
}

/// Set the stroke style from an `rgb()`/`rgba()` string
///
/// # Safety
/// Caller must ensure ptr is valid and value is a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn gl2d_canvas_set_stroke_style(
    ptr: *mut GL2DCanvas,
    value: *const c_char,
) -> c_int {
    let (Some(canvas), Some(value)) = (canvas_mut(ptr), style_str(value)) else {
        return 0;
    };

    match canvas.set_stroke_style(value) {
        Ok(()) => 1,
        Err(_) => 0,
    }
}

/// Resolve a filled rectangle
///
/// Writes the quad's transform (16 floats) and fill color (4 floats, may be
/// null). Vertices are the unit quad drawn as a triangle fan.
///
/// # Safety
/// Caller must ensure ptr is valid and the output buffers are sized.
#[no_mangle]
pub unsafe extern "C" fn gl2d_canvas_fill_rect(
    ptr: *mut GL2DCanvas,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    matrix_out: *mut f32,
    color_out: *mut f32,
) -> c_int {
    if matrix_out.is_null() {
        return 0;
    }
    let Some(canvas) = canvas_mut(ptr) else {
        return 0;
    };

    let cmd = canvas.fill_rect(x, y, width, height);
    write_command(&cmd, matrix_out, color_out);
    1
}

/// Resolve a rectangle outline, drawn as a line loop
///
/// # Safety
/// Caller must ensure ptr is valid and the output buffers are sized.
#[no_mangle]
pub unsafe extern "C" fn gl2d_canvas_stroke_rect(
    ptr: *mut GL2DCanvas,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    matrix_out: *mut f32,
    color_out: *mut f32,
) -> c_int {
    if matrix_out.is_null() {
        return 0;
    }
    let Some(canvas) = canvas_mut(ptr) else {
        return 0;
    };

    let cmd = canvas.stroke_rect(x, y, width, height);
    write_command(&cmd, matrix_out, color_out);
    1
}

/// Write the current net transform to `out`
///
/// # Safety
/// Caller must ensure ptr is valid and out holds 16 floats.
#[no_mangle]
pub unsafe extern "C" fn gl2d_canvas_get_matrix(ptr: *mut GL2DCanvas, out: *mut f32) -> c_int {
    if out.is_null() {
        return 0;
    }
    let Some(canvas) = canvas_mut(ptr) else {
        return 0;
    };

    write_mat4(&canvas.transform_matrix(), out);
    1
}
