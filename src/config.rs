// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::path::PathBuf;

pub const CMDLINE_PATH: &str = "/proc/cmdline";
pub const OEM_ROOT: &str = "/oem/OP";
pub const CUST_PROP_NAME: &str = "cust.prop";

/// The build this vendor image masquerades as. Every fingerprint property
/// is pinned to it regardless of what the device reports.
pub const CORAL_FINGERPRINT: &str =
    "google/coral/coral:11/RP1A.201105.002/6869500:user/release-keys";

/// Inputs of a vendor property load. The defaults are the fixed on-device
/// locations; tests and dry runs point them elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitConfig {
    pub cmdline_path: PathBuf,
    pub oem_root: PathBuf,
    pub fingerprint: String,
}

impl Default for InitConfig {
    fn default() -> Self {
        InitConfig {
            cmdline_path: PathBuf::from(CMDLINE_PATH),
            oem_root: PathBuf::from(OEM_ROOT),
            fingerprint: CORAL_FINGERPRINT.to_string(),
        }
    }
}
