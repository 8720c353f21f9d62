// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! The operator customization file (`cust.prop`) shipped on the OEM
//! partition.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::config::CUST_PROP_NAME;
use crate::property::{override_property, PropertyStore};

/// Keys copied from `cust.prop` into the property store. Everything else in
/// the file is left for the framework to read on its own.
pub const PASSTHROUGH_KEYS: [&str; 5] = [
    "ro.vendor.lge.build.target_region",
    "ro.vendor.lge.build.target_operator",
    "ro.vendor.lge.build.target_country",
    "telephony.lteOnCdmaDevice",
    "persist.vendor.lge.audio.voice.clarity",
];

// Subdirectories of `oem_root`, sorted by name. Symlinks are not followed.
fn sorted_subdirs(oem_root: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(oem_root) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Unable to list {}: {}", oem_root.display(), e);
            return Vec::new();
        }
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|entry| entry.path())
        .collect();
    dirs.sort();
    dirs
}

/// Picks the customization file to load: `<oem_root>/cust.prop` unless some
/// operator subdirectory carries its own, in which case the last such
/// subdirectory in name order wins.
pub fn resolve_path(oem_root: &Path) -> PathBuf {
    let mut path = oem_root.join(CUST_PROP_NAME);
    for dir in sorted_subdirs(oem_root) {
        let candidate = dir.join(CUST_PROP_NAME);
        if candidate.exists() {
            path = candidate;
        }
    }
    path
}

/// Returns the `(key, value)` pairs of `contents` whose key is one of
/// [`PASSTHROUGH_KEYS`], in file order.
pub fn passthrough_entries(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .filter_map(|line| line.split_once('='))
        .filter(|(key, _)| PASSTHROUGH_KEYS.contains(key))
        .collect()
}

/// Copies the allowed customization properties from `path` into `store`.
/// A missing file contributes nothing.
pub fn apply<S: PropertyStore>(store: &mut S, path: &Path) {
    let contents = match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            info!("No customization properties at {}: {}", path.display(), e);
            return;
        }
    };
    info!("Loading customization properties from {}", path.display());
    for (key, value) in passthrough_entries(&contents) {
        override_property(store, key, value);
    }
}
