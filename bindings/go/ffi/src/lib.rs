//! C-FFI layer for normdup — used by Go (cgo) and other FFI consumers.
//!
//! ZERO logic here. All calls delegate to `normdup-core`.
//!
//! # Memory Contract
//!
//! All functions that return `*mut c_char` allocate via `CString`.
//! The caller MUST free the returned string by calling `normdup_free_string()`.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Result from a normdup FFI call.
/// If `error` is null, the call succeeded and `result` contains the output.
/// If `error` is non-null, the call failed and `error` contains the error message.
/// The caller MUST free both `result` and `error` with `normdup_free_string()`.
#[repr(C)]
pub struct NormdupResult {
    pub result: *mut c_char,
    pub error: *mut c_char,
}

impl NormdupResult {
    fn ok(value: String) -> Self {
        NormdupResult {
            result: into_c_string(value),
            error: std::ptr::null_mut(),
        }
    }

    fn err(msg: String) -> Self {
        NormdupResult {
            result: std::ptr::null_mut(),
            error: into_c_string(msg),
        }
    }
}

/// Interior NUL bytes cannot cross the C boundary; they are dropped.
fn into_c_string(value: String) -> *mut c_char {
    let bytes: Vec<u8> = value.into_bytes().into_iter().filter(|b| *b != 0).collect();
    CString::new(bytes).unwrap_or_default().into_raw()
}

/// Helper: convert a C string pointer to a Rust &str.
/// Returns None if the pointer is null or not valid UTF-8.
unsafe fn cstr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Normalize text to its canonical comparison key.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string.
/// The caller must free the returned strings with `normdup_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn normdup_normalize(text: *const c_char) -> NormdupResult {
    match cstr_to_str(text) {
        Some(s) => NormdupResult::ok(normdup_core::normalize(s)),
        None => NormdupResult::err("null or invalid UTF-8 input".into()),
    }
}

/// Check one field of a JSON document for duplicates.
/// Returns the JSON check outcome (`{"status": "no_data"}` for empty input).
///
/// # Safety
/// `text` and `field` must be valid null-terminated UTF-8 C strings.
/// The caller must free the returned strings with `normdup_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn normdup_check(text: *const c_char, field: *const c_char) -> NormdupResult {
    let text = match cstr_to_str(text) {
        Some(s) => s,
        None => return NormdupResult::err("null or invalid UTF-8 text".into()),
    };
    let field = match cstr_to_str(field) {
        Some(s) => s,
        None => return NormdupResult::err("null or invalid UTF-8 field".into()),
    };

    let outcome = match normdup_core::check_json(text, field) {
        Ok(outcome) => outcome,
        Err(e) => return NormdupResult::err(e.to_string()),
    };

    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => NormdupResult::ok(json),
        Err(e) => NormdupResult::err(format!("Serialization error: {}", e)),
    }
}

/// List the selectable fields of a JSON document as a JSON array.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string.
/// The caller must free the returned strings with `normdup_free_string()`.
#[no_mangle]
pub unsafe extern "C" fn normdup_field_names(text: *const c_char) -> NormdupResult {
    let text = match cstr_to_str(text) {
        Some(s) => s,
        None => return NormdupResult::err("null or invalid UTF-8 input".into()),
    };

    let records = match normdup_core::source::parse_records(text) {
        Ok(records) => records,
        Err(e) => return NormdupResult::err(e.to_string()),
    };

    match serde_json::to_string(&normdup_core::source::field_names(&records)) {
        Ok(json) => NormdupResult::ok(json),
        Err(e) => NormdupResult::err(format!("Serialization error: {}", e)),
    }
}

/// Free a string previously returned by a normdup FFI function.
///
/// # Safety
/// `ptr` must be a pointer previously returned by a normdup FFI function,
/// or null (in which case this is a no-op).
#[no_mangle]
pub unsafe extern "C" fn normdup_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn take(ptr: *mut c_char) -> String {
        let s = CStr::from_ptr(ptr).to_string_lossy().into_owned();
        normdup_free_string(ptr);
        s
    }

    #[test]
    fn test_normalize_roundtrip_through_c() {
        let input = CString::new("Ａ－１").unwrap();
        unsafe {
            let res = normdup_normalize(input.as_ptr());
            assert!(res.error.is_null());
            assert_eq!(take(res.result), "a-1");
        }
    }

    #[test]
    fn test_null_input_is_error() {
        unsafe {
            let res = normdup_normalize(std::ptr::null());
            assert!(res.result.is_null());
            assert_eq!(take(res.error), "null or invalid UTF-8 input");
        }
    }

    #[test]
    fn test_check_returns_json() {
        let text = CString::new(r#"[{"c":"A"},{"c":"a"}]"#).unwrap();
        let field = CString::new("c").unwrap();
        unsafe {
            let res = normdup_check(text.as_ptr(), field.as_ptr());
            assert!(res.error.is_null());
            let json: serde_json::Value = serde_json::from_str(&take(res.result)).unwrap();
            assert_eq!(json["duplicates"][0]["key"], "a");
        }
    }

    #[test]
    fn test_check_malformed_is_error() {
        let text = CString::new("[").unwrap();
        let field = CString::new("c").unwrap();
        unsafe {
            let res = normdup_check(text.as_ptr(), field.as_ptr());
            assert!(res.result.is_null());
            assert!(take(res.error).contains("Malformed source"));
        }
    }

    #[test]
    fn test_field_names_json() {
        let text = CString::new(r#"[{"b":1,"a":2}]"#).unwrap();
        unsafe {
            let res = normdup_field_names(text.as_ptr());
            assert_eq!(take(res.result), r#"["b","a"]"#);
        }
    }
}
