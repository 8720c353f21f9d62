// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::config::InitConfig;
use crate::logger;
use crate::property::BionicPropertyStore;
use crate::vendor_load_properties;

// Entry point for init's vendor_load_properties() hook. Must only be called
// from init once the property area is initialized, before any other process
// can write properties.
#[no_mangle]
pub unsafe extern "C" fn lge_vendor_load_properties() {
    // init may already have installed a logger through an earlier call.
    _ = logger::init(false, false);

    // Safe because the caller is init during early boot and is the only writer.
    let mut store = unsafe { BionicPropertyStore::new() };
    vendor_load_properties(&mut store, &InitConfig::default());
}
