// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::fs;
use std::path::Path;

use log::{debug, info};

pub const MODEL_KEY: &str = "androidboot.vendor.lge.product.model";
pub const SIM_NUM_KEY: &str = "androidboot.vendor.lge.sim_num";

/// Facts about the device that the bootloader passes on the kernel command
/// line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BootFacts {
    pub model: Option<String>,
    pub dual_sim: bool,
}

impl BootFacts {
    pub fn parse(cmdline: &str) -> Self {
        let mut facts = BootFacts::default();
        for token in cmdline.split_whitespace() {
            let Some((key, value)) = token.split_once('=') else {
                continue;
            };
            if key == MODEL_KEY {
                facts.model = Some(value.to_string());
            } else if key == SIM_NUM_KEY && value == "2" {
                facts.dual_sim = true;
            }
        }
        facts
    }

    /// Reads and parses the command line at `path`. An unreadable source is
    /// treated as an empty command line.
    pub fn read(path: &Path) -> Self {
        let cmdline = match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                info!("Unable to read {}: {}", path.display(), e);
                String::new()
            }
        };
        let facts = Self::parse(cmdline.trim());
        debug!("boot facts from {}: {:?}", path.display(), facts);
        facts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_model_and_sim() {
        let facts = BootFacts::parse(
            "console=ttyMSM0,115200n8 androidboot.vendor.lge.product.model=LM-G820 \
             androidboot.vendor.lge.sim_num=2 quiet",
        );
        assert_eq!(facts.model.as_deref(), Some("LM-G820"));
        assert!(facts.dual_sim);
    }

    #[test]
    fn test_single_sim() {
        assert!(!BootFacts::parse("androidboot.vendor.lge.sim_num=1").dual_sim);
        assert!(!BootFacts::parse("androidboot.vendor.lge.sim_num").dual_sim);
        assert!(!BootFacts::parse("").dual_sim);
    }

    #[test]
    fn test_missing_model() {
        let facts = BootFacts::parse("ro.boot.serialno=abc androidboot.vendor.lge.product.model");
        assert_eq!(facts.model, None);
    }

    #[test]
    fn test_split_at_first_equals() {
        let facts = BootFacts::parse("androidboot.vendor.lge.product.model=LM=G820");
        assert_eq!(facts.model.as_deref(), Some("LM=G820"));
    }

    #[test]
    fn test_last_model_wins_and_tabs_split() {
        let facts = BootFacts::parse(
            "androidboot.vendor.lge.product.model=LM-G820\tandroidboot.vendor.lge.product.model=LM-V500N",
        );
        assert_eq!(facts.model.as_deref(), Some("LM-V500N"));
    }

    #[test]
    fn test_read_trims_and_tolerates_missing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  androidboot.vendor.lge.product.model=LM-G820  ").unwrap();
        let facts = BootFacts::read(file.path());
        assert_eq!(facts.model.as_deref(), Some("LM-G820"));

        let dir = tempfile::tempdir().unwrap();
        assert_eq!(BootFacts::read(&dir.path().join("cmdline")), BootFacts::default());
    }
}
