// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Vendor property initialization for LG sdm845 devices, run once by init
//! during early boot.

#![deny(unsafe_op_in_unsafe_fn)]

pub mod cmdline;
pub mod config;
pub mod cust_prop;
pub mod error;
#[cfg(target_os = "android")]
pub mod ffi;
pub mod logger;
pub mod property;
pub mod target;

use log::info;

use crate::config::InitConfig;
use crate::property::{override_multi, PropertyStore};

pub const FINGERPRINT_PROPS: [&str; 4] = [
    "ro.build.fingerprint",
    "ro.system.build.fingerprint",
    "ro.bootimage.build.fingerprint",
    "ro.vendor.build.fingerprint",
];

/// Loads the device specific properties and pins the build fingerprint.
/// Never fails; individual write errors are logged by the property helpers.
pub fn vendor_load_properties<S: PropertyStore>(store: &mut S, config: &InitConfig) {
    info!("Loading vendor specific properties");
    target::init_target_properties(store, config);

    info!("Loading {} fingerprint", config.fingerprint);
    let [build, system, bootimage, vendor] = FINGERPRINT_PROPS;
    override_multi(store, build, system, bootimage, vendor, &config.fingerprint);
}
