use std::{cell::RefCell, ffi::CString};

/// Last error recorded on the calling thread.
pub struct LastErrorData {
    /// Human readable error message.
    pub error_msg: CString,
    /// Name of the function that failed and a summary of its inputs.
    pub error_report_data: CString,
}

impl LastErrorData {
    pub fn new(error_msg: CString, error_report_data: CString) -> Self {
        LastErrorData {
            error_msg,
            error_report_data,
        }
    }
}

thread_local!(pub static LAST_ERROR: RefCell<Option<LastErrorData>> = const { RefCell::new(None) });

/// Convert to a [CString], interior null bytes are dropped.
fn to_c_string<T: Into<Vec<u8>>>(value: T) -> CString {
    CString::new(value).unwrap_or_else(|e| {
        let bytes: Vec<u8> = e.into_vec().into_iter().filter(|&b| b != 0).collect();
        CString::new(bytes).unwrap_or_default()
    })
}

/// Set last error information for the calling thread.
///
/// Interior null bytes in `error_msg` or `error_report` are dropped.
pub fn set_last_error<T: Into<Vec<u8>>>(error_msg: T, error_report: T) {
    let msg = to_c_string(error_msg);
    let report = to_c_string(error_report);

    LAST_ERROR.with(|last_error| {
        *last_error.borrow_mut() = Some(LastErrorData::new(msg, report));
    });
}
