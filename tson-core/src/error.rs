// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::borrow::Cow;

use thiserror::Error;

/// Error type for TSON serialization and deserialization operations.
///
/// Prefer the static constructor functions ([`Error::format`],
/// [`Error::unsupported_type`], [`Error::lookup`],
/// [`Error::buffer_out_of_bound`]) over constructing variants directly:
/// they accept anything convertible into a `Cow<'static, str>` and keep
/// error creation uniform across the codebase.
///
/// A detected malformation is fatal for the call that hit it; no error is
/// retried or recovered internally, and a failed call produces no partial
/// output.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Buffer boundary violation during a read.
    ///
    /// A document whose byte count does not cover what its own framing
    /// promises ends up here; it is the structured form of a framing
    /// mismatch.
    #[error("Buffer out of bound: {0} + {1} > {2}")]
    BufferOutOfBound(usize, usize, usize),

    /// Malformed document: magic/version mismatch, block-length
    /// inconsistency, or a missing type code where one was required.
    #[error("{0}")]
    Format(Cow<'static, str>),

    /// A type or shape the compiler or encoder cannot represent.
    #[error("{0}")]
    UnsupportedType(Cow<'static, str>),

    /// A referenced custom type is missing from the compiled table.
    #[error("{0}")]
    Lookup(Cow<'static, str>),
}

impl Error {
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn buffer_out_of_bound(offset: usize, length: usize, capacity: usize) -> Self {
        Error::BufferOutOfBound(offset, length, capacity)
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn format<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::Format(s.into())
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported_type<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::UnsupportedType(s.into())
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn lookup<S: Into<Cow<'static, str>>>(s: S) -> Self {
        Error::Lookup(s.into())
    }
}

/// Ensures a condition is true; otherwise returns the given [`enum@Error`].
///
/// # Examples
/// ```
/// use tson_core::ensure;
/// use tson_core::error::Error;
///
/// fn check_version(v: u8) -> Result<(), Error> {
///     ensure!(v == 1, Error::format(format!("unsupported version {v}")));
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
