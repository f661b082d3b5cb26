//! C ABI for hosts that embed the viewer.
//!
//! A host creates a viewer with [`raw_viewer_new`], drives it with the setter
//! functions and paints the string returned by [`raw_viewer_render_markup`]
//! into a markup surface. Strings returned by this module must be released
//! with [`raw_viewer_string_free`], viewers with [`raw_viewer_free`].
//!
//! Every function tolerates a null handle.

use crate::render::backends::markup::MarkupBackend;
use crate::value::ResponseValue;
use crate::viewer::ResponseRawViewer;
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_int};

#[repr(C)]
#[derive(Clone, Copy)]
pub struct RawViewerHandle(*mut ResponseRawViewer);

/// Returned by [`raw_viewer_set_json`] when the JSON could not be parsed.
pub const RAW_VIEWER_INVALID_INPUT: c_int = -1;

unsafe fn viewer_mut<'a>(handle: RawViewerHandle) -> Option<&'a mut ResponseRawViewer> {
    handle.0.as_mut()
}

unsafe fn c_str_lossy(s: *const c_char) -> Option<String> {
    if s.is_null() {
        None
    } else {
        Some(CStr::from_ptr(s).to_string_lossy().into_owned())
    }
}

#[no_mangle]
pub extern "C" fn raw_viewer_new() -> RawViewerHandle {
    let viewer = Box::new(ResponseRawViewer::default());
    RawViewerHandle(Box::into_raw(viewer))
}

/// Sets plain response text. A null `text` clears the response. Returns
/// whether there is content to display.
///
/// # Safety
/// `handle` must come from [`raw_viewer_new`]; `text` must be null or a valid
/// NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn raw_viewer_set_text(handle: RawViewerHandle, text: *const c_char) -> bool {
    let Some(viewer) = viewer_mut(handle) else {
        return false;
    };
    viewer.set_response_text(c_str_lossy(text)).has_content
}

/// Sets the response from `len` UTF-16 code units.
///
/// # Safety
/// `handle` must come from [`raw_viewer_new`]; `units` must be null or point
/// to at least `len` readable `u16` values.
#[no_mangle]
pub unsafe extern "C" fn raw_viewer_set_buffer(handle: RawViewerHandle, units: *const u16, len: usize) -> bool {
    let Some(viewer) = viewer_mut(handle) else {
        return false;
    };
    let value = if units.is_null() {
        ResponseValue::Buffer(Vec::new())
    } else {
        ResponseValue::from(std::slice::from_raw_parts(units, len))
    };
    viewer.set_response_text(value).has_content
}

/// Sets the response from its stored JSON representation. Returns `1` when
/// there is content, `0` when there is none and [`RAW_VIEWER_INVALID_INPUT`]
/// when the JSON is malformed (the viewer is left unchanged).
///
/// # Safety
/// `handle` must come from [`raw_viewer_new`]; `json` must be null or a valid
/// NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn raw_viewer_set_json(handle: RawViewerHandle, json: *const c_char) -> c_int {
    let Some(viewer) = viewer_mut(handle) else {
        return RAW_VIEWER_INVALID_INPUT;
    };
    let Some(json) = c_str_lossy(json) else {
        return RAW_VIEWER_INVALID_INPUT;
    };

    match ResponseValue::from_json_str(&json) {
        Ok(value) => viewer.set_response_text(value).has_content as c_int,
        Err(e) => {
            log::warn!("Viewer[{}]: {}", viewer.id(), e);
            RAW_VIEWER_INVALID_INPUT
        }
    }
}

/// # Safety
/// `handle` must come from [`raw_viewer_new`].
#[no_mangle]
pub unsafe extern "C" fn raw_viewer_clear(handle: RawViewerHandle) {
    if let Some(viewer) = viewer_mut(handle) {
        viewer.clear_response();
    }
}

/// # Safety
/// `handle` must come from [`raw_viewer_new`].
#[no_mangle]
pub unsafe extern "C" fn raw_viewer_has_response(handle: RawViewerHandle) -> bool {
    viewer_mut(handle).is_some_and(|v| v.has_response())
}

/// # Safety
/// `handle` must come from [`raw_viewer_new`].
#[no_mangle]
pub unsafe extern "C" fn raw_viewer_set_wrap(handle: RawViewerHandle, wrap: bool) {
    if let Some(viewer) = viewer_mut(handle) {
        viewer.set_wrap_text(wrap);
    }
}

/// # Safety
/// `handle` must come from [`raw_viewer_new`].
#[no_mangle]
pub unsafe extern "C" fn raw_viewer_wrap(handle: RawViewerHandle) -> bool {
    viewer_mut(handle).is_some_and(|v| v.wrap_text())
}

/// Renders the viewer and returns its markup, or null on failure. NUL
/// characters in the response are replaced with U+FFFD.
///
/// # Safety
/// `handle` must come from [`raw_viewer_new`]. The returned string must be
/// released with [`raw_viewer_string_free`].
#[no_mangle]
pub unsafe extern "C" fn raw_viewer_render_markup(handle: RawViewerHandle) -> *mut c_char {
    let Some(viewer) = viewer_mut(handle) else {
        return std::ptr::null_mut();
    };

    let mut backend = MarkupBackend::new();
    if let Err(e) = viewer.render(&mut backend) {
        log::error!("Viewer[{}]: cannot render markup: {}", viewer.id(), e);
        return std::ptr::null_mut();
    }

    match CString::new(backend.output().replace('\0', "\u{FFFD}")) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// # Safety
/// `s` must be null or a string returned by [`raw_viewer_render_markup`].
#[no_mangle]
pub unsafe extern "C" fn raw_viewer_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// # Safety
/// `handle` must come from [`raw_viewer_new`] and must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn raw_viewer_free(handle: RawViewerHandle) {
    if !handle.0.is_null() {
        drop(Box::from_raw(handle.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_viewer_through_c_api() {
        unsafe {
            let handle = raw_viewer_new();
            assert!(!raw_viewer_has_response(handle));

            let text = CString::new("<b>hi</b>").unwrap();
            assert!(raw_viewer_set_text(handle, text.as_ptr()));

            let markup = raw_viewer_render_markup(handle);
            assert!(!markup.is_null());
            let rendered = CStr::from_ptr(markup).to_str().unwrap().to_string();
            raw_viewer_string_free(markup);
            assert!(rendered.contains("&lt;b&gt;hi&lt;/b&gt;"));
            assert!(rendered.contains(r#"<div class="actions-panel">"#));

            raw_viewer_set_wrap(handle, true);
            assert!(raw_viewer_wrap(handle));

            raw_viewer_clear(handle);
            assert!(!raw_viewer_has_response(handle));

            raw_viewer_free(handle);
        }
    }

    #[test]
    fn buffer_and_json_setters() {
        unsafe {
            let handle = raw_viewer_new();

            let units: Vec<u16> = "test".encode_utf16().collect();
            assert!(raw_viewer_set_buffer(handle, units.as_ptr(), units.len()));
            assert!(!raw_viewer_set_buffer(handle, std::ptr::null(), 0));

            let json = CString::new(r#"{"type":"Buffer","data":[104,105]}"#).unwrap();
            assert_eq!(raw_viewer_set_json(handle, json.as_ptr()), 1);

            let date = CString::new(r#""2018-01-01T00:00:00Z""#).unwrap();
            assert_eq!(raw_viewer_set_json(handle, date.as_ptr()), 1);

            let object = CString::new(r#"{"created":1}"#).unwrap();
            assert_eq!(raw_viewer_set_json(handle, object.as_ptr()), 0);

            let bad = CString::new("{oops").unwrap();
            assert_eq!(raw_viewer_set_json(handle, bad.as_ptr()), RAW_VIEWER_INVALID_INPUT);

            raw_viewer_free(handle);
        }
    }

    #[test]
    fn null_handle_is_tolerated() {
        let handle = RawViewerHandle(std::ptr::null_mut());
        unsafe {
            assert!(!raw_viewer_has_response(handle));
            assert!(raw_viewer_render_markup(handle).is_null());
            raw_viewer_clear(handle);
            raw_viewer_free(handle);
        }
    }
}
