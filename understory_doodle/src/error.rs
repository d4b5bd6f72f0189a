// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by the element resolver.

use core::fmt;

/// Why a resolver could not be built or a stroke could not be anchored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolveError {
    /// No root element was given and the document has no body.
    NotFound,
    /// The stroke has no points, or none of its points is over an element.
    ///
    /// This is an expected outcome: the caller should treat it as
    /// "no anchor found".
    Unresolvable,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("no root element to resolve against"),
            Self::Unresolvable => f.write_str("no element under the stroke"),
        }
    }
}

impl core::error::Error for ResolveError {}
