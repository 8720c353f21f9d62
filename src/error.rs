// Copyright 2026 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PropertyError {
    #[error("illegal property name \"{0}\"")]
    InvalidName(String),
    #[error("value of {len} bytes exceeds the limit for \"{name}\"")]
    ValueTooLong { name: String, len: usize },
    #[error("\"{0}\" contains an interior NUL byte")]
    InteriorNul(String),
    #[error("{op} rejected by the property area (rc={rc})")]
    Rejected { op: &'static str, rc: i32 },
}

pub type Result<T> = std::result::Result<T, PropertyError>;
