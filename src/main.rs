// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use lge_vendor_init::config::{InitConfig, CMDLINE_PATH, CORAL_FINGERPRINT, OEM_ROOT};
use lge_vendor_init::property::MemoryPropertyStore;
use lge_vendor_init::{logger, vendor_load_properties};

/// Show the vendor properties this device would get at boot. The boot-time
/// load itself runs inside init through `vendor_load_properties`.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Kernel command line to read boot parameters from.
    #[arg(long, default_value = CMDLINE_PATH)]
    cmdline: PathBuf,

    /// Directory holding the operator customization files.
    #[arg(long, default_value = OEM_ROOT)]
    oem_root: PathBuf,

    /// Build fingerprint written to all fingerprint properties.
    #[arg(long, default_value = CORAL_FINGERPRINT)]
    fingerprint: String,

    /// Log to stderr instead of the kernel log.
    #[arg(long)]
    log_to_stderr: bool,

    /// Enable debug logging (stderr only).
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn init_config(&self) -> InitConfig {
        InitConfig {
            cmdline_path: self.cmdline.clone(),
            oem_root: self.oem_root.clone(),
            fingerprint: self.fingerprint.clone(),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init(args.log_to_stderr, args.verbose)?;

    let mut store = MemoryPropertyStore::new();
    vendor_load_properties(&mut store, &args.init_config());
    for (name, value) in store.iter() {
        println!("{}={}", name, value);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_boot_paths() {
        let args = Args::parse_from(["lge-vendor-init"]);
        assert_eq!(args.init_config(), InitConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "lge-vendor-init",
            "--cmdline",
            "/tmp/cmdline",
            "--oem-root",
            "/tmp/OP",
            "--fingerprint",
            "lge/flashlmdd/flashlmdd:10/QKQ1.191222.002/1:user/release-keys",
        ]);
        let config = args.init_config();
        assert_eq!(config.cmdline_path, PathBuf::from("/tmp/cmdline"));
        assert_eq!(config.oem_root, PathBuf::from("/tmp/OP"));
        assert!(config.fingerprint.starts_with("lge/flashlmdd"));
    }
}
