use super::error::BackendError;
use gl::types::GLenum;
use gl::*;
use std::ffi::CStr;

pub fn check_gl_err() -> Result<(), BackendError> {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return Ok(());
    }
    Err(BackendError::Gl(err))
}

fn gl_string(name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return "<unknown>".to_string();
    }
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

pub fn log_opengl_info() {
    tracing::debug!(
        version = %gl_string(VERSION),
        renderer = %gl_string(RENDERER),
        vendor = %gl_string(VENDOR),
        "OpenGL context ready"
    );

    let mut mtu: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_IMAGE_UNITS, &mut mtu) };
    tracing::debug!("MAX_TEXTURE_IMAGE_UNITS = {}", mtu);
}

/// Viewport over the whole window and alpha blending, the state every
/// context starts with.
pub fn setup_default_state(w: u32, h: u32) -> Result<(), BackendError> {
    unsafe {
        gl::Viewport(0, 0, w as i32, h as i32);
        gl::Enable(BLEND);
        gl::BlendFunc(SRC_ALPHA, ONE_MINUS_SRC_ALPHA);
    }
    check_gl_err()
}
