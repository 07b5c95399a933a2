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

//! String-keyed maps are decode-only in this format: the decoder reads a
//! per-entry type next to every value, but no encoding for that layout
//! is defined. Map-typed fields therefore compile into the schema and a
//! null map value is fine, while writing a non-null map is an error.
//! Maps with non-string keys have no impl at all.

use crate::buffer::Writer;
use crate::error::Error;
use crate::reflect::TypeShape;
use crate::serializer::TsonType;
use std::collections::{BTreeMap, HashMap};

pub(crate) fn write_map_unsupported() -> Error {
    Error::unsupported_type("maps are decode-only: the format defines no encoding for map values")
}

impl<V: TsonType> TsonType for HashMap<String, V> {
    fn tson_shape() -> TypeShape {
        TypeShape::Map
    }

    fn tson_write(&self, _writer: &mut Writer) -> Result<(), Error> {
        Err(write_map_unsupported())
    }
}

impl<V: TsonType> TsonType for BTreeMap<String, V> {
    fn tson_shape() -> TypeShape {
        TypeShape::Map
    }

    fn tson_write(&self, _writer: &mut Writer) -> Result<(), Error> {
        Err(write_map_unsupported())
    }
}
