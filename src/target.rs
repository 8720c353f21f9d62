// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use log::info;

use crate::cmdline::BootFacts;
use crate::config::InitConfig;
use crate::cust_prop;
use crate::property::{override_property, PropertyStore};

pub const UNKNOWN_MODEL: &str = "UNKNOWN";
pub const MULTISIM_CONFIG_PROP: &str = "persist.radio.multisim.config";
pub const DSDS: &str = "dsds";

pub const MODEL_PROPS: [&str; 5] = [
    "ro.product.model",
    "ro.product.odm.model",
    "ro.product.product.model",
    "ro.product.system.model",
    "ro.product.vendor.model",
];

/// Derives the device model, SIM layout and operator customization from the
/// boot inputs named in `config` and writes them to `store`.
pub fn init_target_properties<S: PropertyStore>(store: &mut S, config: &InitConfig) {
    let facts = BootFacts::read(&config.cmdline_path);

    let cust_prop_path = cust_prop::resolve_path(&config.oem_root);
    cust_prop::apply(store, &cust_prop_path);

    let model = facts.model.as_deref().unwrap_or(UNKNOWN_MODEL);
    info!("Device model: {}, dual SIM: {}", model, facts.dual_sim);

    if facts.dual_sim {
        override_property(store, MULTISIM_CONFIG_PROP, DSDS);
    }

    for prop in MODEL_PROPS {
        override_property(store, prop, model);
    }
}
