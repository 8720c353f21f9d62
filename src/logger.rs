// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log};

pub const TAG: &str = "lge-vendor-init";
const KMSG_DEVICE: &str = "/dev/kmsg";
const MAX_LEVEL: LevelFilter = LevelFilter::Info;
const MAX_LOG_RECORD_SIZE: usize = 1024;

// A logger that writes to the kernel message buffer, the only log sink
// available this early in boot.
struct KernelLogger {
    file: Mutex<File>,
}

impl KernelLogger {
    fn new(device: &Path) -> io::Result<Self> {
        Ok(KernelLogger {
            file: Mutex::new(OpenOptions::new().write(true).open(device)?),
        })
    }
}

fn kmsg_priority(level: Level) -> u8 {
    match level {
        Level::Error => 3,
        Level::Warn => 4,
        Level::Info => 6,
        Level::Debug | Level::Trace => 7,
    }
}

// Formats one record as kmsg lines. The kernel rejects records longer than
// 1024 bytes, so long messages are split on line boundaries.
fn format_record(level: Level, pid: i32, message: &str) -> Vec<String> {
    let prefix = format!("<{}>{}[{}]: ", kmsg_priority(level), TAG, pid);
    if message.len() < MAX_LOG_RECORD_SIZE - prefix.len() {
        vec![format!("{prefix}{message}\n")]
    } else {
        message
            .lines()
            .map(|line| format!("{prefix}{line}\n"))
            .collect()
    }
}

impl Log for KernelLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= MAX_LEVEL
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let pid = nix::unistd::getpid().as_raw();
        let lines = format_record(record.level(), pid, &record.args().to_string());
        if let Ok(mut kmsg) = self.file.lock() {
            for line in lines {
                _ = kmsg.write(line.as_bytes());
            }
        }
    }

    fn flush(&self) {}
}

fn init_stderr(verbose: bool) -> anyhow::Result<()> {
    stderrlog::new()
        .module("lge_vendor_init")
        .verbosity(if verbose { Level::Debug } else { Level::Info })
        .init()?;
    Ok(())
}

/// Installs the global logger: the kernel log unless `log_to_stderr` is set
/// or `/dev/kmsg` cannot be opened.
pub fn init(log_to_stderr: bool, verbose: bool) -> anyhow::Result<()> {
    if log_to_stderr {
        return init_stderr(verbose);
    }
    match KernelLogger::new(Path::new(KMSG_DEVICE)) {
        Ok(klog) => {
            log::set_boxed_logger(Box::new(klog))?;
            log::set_max_level(MAX_LEVEL);
            Ok(())
        }
        Err(e) => {
            init_stderr(verbose)?;
            log::warn!("Unable to open {}, logging to stderr: {}", KMSG_DEVICE, e);
            Ok(())
        }
    }
}
