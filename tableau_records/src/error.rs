// Copyright 2025 the Tableau Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Save-side validation errors.

use thiserror::Error;

/// Why a record was rejected before submission.
///
/// Loading never errors: malformed legacy data is normalized away instead.
/// Only the save direction validates, mirroring the store's own rejections.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RecordError {
    /// A spread cannot be saved without a display name.
    #[error("spread name is required")]
    MissingName,
}
