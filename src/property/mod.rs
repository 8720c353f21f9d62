// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Access to the system property store.
//!
//! The store is reached through the [`PropertyStore`] trait so the boot
//! logic can run against bionic's property area on a device and against an
//! in-memory map everywhere else.

use log::{debug, error};

use crate::error::Result;

#[cfg(target_os = "android")]
mod bionic;
#[cfg(target_os = "android")]
pub use bionic::*;

mod memory;
pub use memory::*;

/// Values of non read-only properties must be shorter than this, including
/// the terminating NUL bionic stores alongside them.
pub const PROP_VALUE_MAX: usize = 92;

pub trait PropertyStore {
    /// Opaque reference to a live property, valid for the store's lifetime.
    type Handle;

    fn find(&self, name: &str) -> Option<Self::Handle>;
    fn add(&mut self, name: &str, value: &str) -> Result<()>;
    fn update(&mut self, handle: Self::Handle, value: &str) -> Result<()>;
}

/// Sets `name` to `value`, updating the property in place if it already
/// exists and creating it otherwise. Failures are logged and swallowed.
pub fn override_property<S: PropertyStore>(store: &mut S, name: &str, value: &str) {
    debug!("override {}={}", name, value);
    match store.find(name) {
        Some(handle) => {
            if let Err(e) = store.update(handle, value) {
                error!(
                    "property_set(\"{}\", \"{}\") failed: update failed: {}",
                    name, value, e
                );
            }
        }
        None => {
            if let Err(e) = store.add(name, value) {
                error!(
                    "property_set(\"{}\", \"{}\") failed: add failed: {}",
                    name, value, e
                );
            }
        }
    }
}

/// Applies one value to the four fingerprint flavours, in order.
pub fn override_multi<S: PropertyStore>(
    store: &mut S,
    build: &str,
    system: &str,
    bootimage: &str,
    vendor: &str,
    value: &str,
) {
    override_property(store, build, value);
    override_property(store, system, value);
    override_property(store, bootimage, value);
    override_property(store, vendor, value);
}

/// Property name rules enforced by init's property service.
pub fn is_legal_property_name(name: &str) -> bool {
    if name.is_empty() || name.starts_with('.') || name.ends_with('.') {
        return false;
    }
    if name.contains("..") {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '@' | ':'))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::PropertyError;

    // Wraps a memory store, records every call and optionally refuses adds.
    pub(crate) struct RecordingStore {
        pub inner: MemoryPropertyStore,
        pub calls: Vec<String>,
        pub fail_adds: bool,
    }

    impl RecordingStore {
        pub fn new() -> Self {
            RecordingStore {
                inner: MemoryPropertyStore::new(),
                calls: Vec::new(),
                fail_adds: false,
            }
        }
    }

    impl PropertyStore for RecordingStore {
        type Handle = String;

        fn find(&self, name: &str) -> Option<String> {
            self.inner.find(name)
        }

        fn add(&mut self, name: &str, value: &str) -> Result<()> {
            self.calls.push(format!("add {}={}", name, value));
            if self.fail_adds {
                return Err(PropertyError::Rejected { op: "add", rc: -1 });
            }
            self.inner.add(name, value)
        }

        fn update(&mut self, handle: String, value: &str) -> Result<()> {
            self.calls.push(format!("update {}={}", handle, value));
            self.inner.update(handle, value)
        }
    }

    #[test]
    fn test_override_adds_missing_property() {
        let mut store = RecordingStore::new();
        override_property(&mut store, "ro.product.model", "LM-G820");
        assert_eq!(store.calls, vec!["add ro.product.model=LM-G820"]);
        assert_eq!(store.inner.get("ro.product.model"), Some("LM-G820"));
    }

    #[test]
    fn test_override_updates_in_place() {
        let mut store = RecordingStore::new();
        override_property(&mut store, "ro.product.model", "LM-G820");
        override_property(&mut store, "ro.product.model", "LM-G820");
        assert_eq!(store.inner.get("ro.product.model"), Some("LM-G820"));

        override_property(&mut store, "ro.product.model", "LM-V500N");
        assert_eq!(store.inner.get("ro.product.model"), Some("LM-V500N"));
        assert_eq!(store.inner.len(), 1);
        assert_eq!(
            store.calls,
            vec![
                "add ro.product.model=LM-G820",
                "update ro.product.model=LM-G820",
                "update ro.product.model=LM-V500N",
            ]
        );
    }

    #[test]
    fn test_override_accepts_empty_value() {
        let mut store = RecordingStore::new();
        override_property(&mut store, "telephony.lteOnCdmaDevice", "");
        assert_eq!(store.inner.get("telephony.lteOnCdmaDevice"), Some(""));
    }

    #[test]
    fn test_failed_add_is_swallowed() {
        let mut store = RecordingStore::new();
        store.fail_adds = true;
        override_property(&mut store, "ro.product.model", "LM-G820");
        override_property(&mut store, "ro.product.odm.model", "LM-G820");
        assert_eq!(store.calls.len(), 2);
        assert!(store.inner.is_empty());
    }

    #[test]
    fn test_override_multi_order() {
        let mut store = RecordingStore::new();
        override_multi(&mut store, "a.fp", "b.fp", "c.fp", "d.fp", "value");
        assert_eq!(
            store.calls,
            vec![
                "add a.fp=value",
                "add b.fp=value",
                "add c.fp=value",
                "add d.fp=value",
            ]
        );
    }

    #[test]
    fn test_legal_property_names() {
        assert!(is_legal_property_name("ro.product.model"));
        assert!(is_legal_property_name("persist.vendor.lge.audio.voice.clarity"));
        assert!(is_legal_property_name("vendor.hw@1.0:x-y_z"));
        assert!(!is_legal_property_name(""));
        assert!(!is_legal_property_name(".ro.product"));
        assert!(!is_legal_property_name("ro.product."));
        assert!(!is_legal_property_name("ro..product"));
        assert!(!is_legal_property_name("ro.product model"));
        assert!(!is_legal_property_name("ro.product=model"));
    }
}
