// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::ffi::{c_char, c_int, c_uint, CString};
use std::ptr::NonNull;

use super::PropertyStore;
use crate::error::{PropertyError, Result};

#[repr(C)]
pub struct PropInfo {
    _private: [u8; 0],
}

extern "C" {
    fn __system_property_find(name: *const c_char) -> *const PropInfo;
    fn __system_property_add(
        name: *const c_char,
        namelen: c_uint,
        value: *const c_char,
        valuelen: c_uint,
    ) -> c_int;
    fn __system_property_update(pi: *mut PropInfo, value: *const c_char, len: c_uint) -> c_int;
}

fn to_cstring(s: &str) -> Result<CString> {
    CString::new(s).map_err(|_| PropertyError::InteriorNul(s.to_string()))
}

fn c_len(s: &str) -> Result<c_uint> {
    c_uint::try_from(s.len()).map_err(|_| PropertyError::ValueTooLong {
        name: s.to_string(),
        len: s.len(),
    })
}

/// The process-wide property area owned by init. Only init may add or
/// update properties, so this store is meaningful only inside the init
/// process during early boot.
pub struct BionicPropertyStore {
    _private: (),
}

impl BionicPropertyStore {
    /// # Safety
    ///
    /// The caller must be running in the init process after the property
    /// area has been initialized, with no other writer active.
    pub unsafe fn new() -> Self {
        BionicPropertyStore { _private: () }
    }
}

impl PropertyStore for BionicPropertyStore {
    type Handle = NonNull<PropInfo>;

    fn find(&self, name: &str) -> Option<NonNull<PropInfo>> {
        let name = to_cstring(name).ok()?;
        // SAFETY: `name` is a valid NUL-terminated string for the duration of the call.
        let pi = unsafe { __system_property_find(name.as_ptr()) };
        NonNull::new(pi as *mut PropInfo)
    }

    fn add(&mut self, name: &str, value: &str) -> Result<()> {
        let c_name = to_cstring(name)?;
        let c_value = to_cstring(value)?;
        // SAFETY: both buffers are valid for the lengths passed and outlive the call.
        let rc = unsafe {
            __system_property_add(
                c_name.as_ptr(),
                c_len(name)?,
                c_value.as_ptr(),
                c_len(value)?,
            )
        };
        if rc < 0 {
            return Err(PropertyError::Rejected { op: "add", rc });
        }
        Ok(())
    }

    fn update(&mut self, handle: NonNull<PropInfo>, value: &str) -> Result<()> {
        let c_value = to_cstring(value)?;
        // SAFETY: `handle` came from `__system_property_find` and property
        // infos are never freed; `c_value` is valid for `value.len()` bytes.
        let rc = unsafe {
            __system_property_update(handle.as_ptr(), c_value.as_ptr(), c_len(value)?)
        };
        if rc < 0 {
            return Err(PropertyError::Rejected { op: "update", rc });
        }
        Ok(())
    }
}
