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

use crate::buffer::Writer;
use crate::error::Error;
use crate::reflect::TypeShape;

mod bool;
mod heap;
mod list;
pub mod map;
mod number;
mod option;
mod string;
pub mod struct_;

/// An encodable type: it can describe its structural shape to the schema
/// compiler and write its own content bytes.
///
/// Every value slot on the wire opens with a presence byte: `0` means
/// null with no further bytes, `1` means the value's payload follows.
/// `tson_write` is responsible for the whole slot, presence byte
/// included; `Option<T>` contributes the null branch, all other impls
/// write `1` and then their payload.
///
/// Implementations for structs are normally generated by
/// `#[derive(TsonObject)]`; the derive writes fields in declaration
/// order, matching the field order recorded in the compiled type table.
pub trait TsonType {
    /// The declared shape the schema compiler walks.
    fn tson_shape() -> TypeShape;

    /// Writes this value's content bytes, including its presence byte.
    fn tson_write(&self, writer: &mut Writer) -> Result<(), Error>;
}
