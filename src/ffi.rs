//! FFI bindings for Podium Report
//!
//! C-compatible functions for calling the report engine from other languages.
//! All functions use null-terminated C strings and return allocated memory
//! that must be freed by the caller using `podium_free_string`.

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use crate::pipeline::report_to_json;

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message
fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clear the last error message
fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Generate report JSON from an observation JSON array.
///
/// # Safety
/// - `observations_json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with
///   `podium_free_string`.
/// - Returns NULL on error; call `podium_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn podium_report_from_json(
    observations_json: *const c_char,
) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(observations_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    match report_to_json(&json_str) {
        Ok(report) => string_to_cstr(&report),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Get the last error message.
///
/// # Safety
/// - Returns a newly allocated string that must be freed with
///   `podium_free_string`.
/// - Returns NULL if no error has occurred since the last call.
#[no_mangle]
pub unsafe extern "C" fn podium_last_error() -> *mut c_char {
    LAST_ERROR.with(|e| match e.borrow().as_ref() {
        Some(msg) => string_to_cstr(msg.to_str().unwrap_or("Invalid error message")),
        None => ptr::null_mut(),
    })
}

/// Free a string allocated by this library.
///
/// # Safety
/// - `s` must be a pointer returned by a `podium_*` function, or NULL.
/// - After this call the pointer must not be used again.
#[no_mangle]
pub unsafe extern "C" fn podium_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_cstring(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    unsafe fn take_string(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null());
        let s = CStr::from_ptr(ptr).to_str().unwrap().to_string();
        podium_free_string(ptr);
        s
    }

    #[test]
    fn test_report_from_json_round_trip() {
        let input = to_cstring(
            r#"[{
                "timestamp": 0,
                "image_url": "https://img.example.com/0.jpg",
                "eye_contact": 0.9,
                "emotion": "neutral",
                "gesture": "stand_properly"
            }]"#,
        );

        unsafe {
            let result = podium_report_from_json(input.as_ptr());
            let report_json = take_string(result);
            let value: serde_json::Value = serde_json::from_str(&report_json).unwrap();
            assert_eq!(value["eye_chart"]["eye_contact"], 1);

            // No error should be set after success
            assert!(podium_last_error().is_null());
        }
    }

    #[test]
    fn test_error_reporting() {
        let input = to_cstring("[]");

        unsafe {
            let result = podium_report_from_json(input.as_ptr());
            assert!(result.is_null());

            let error = take_string(podium_last_error());
            assert!(error.contains("no observations"));
        }
    }

    #[test]
    fn test_null_pointer_input() {
        unsafe {
            let result = podium_report_from_json(ptr::null());
            assert!(result.is_null());

            let error = take_string(podium_last_error());
            assert!(error.contains("pointer"));
        }
    }
}
