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
use crate::serializer::TsonType;
use crate::types::RefFlag;

/// Nullability is a value property, not a type property: `Option<T>` has
/// `T`'s shape and only contributes the null branch of the presence
/// byte. A null slot is exactly one `0` byte, whatever `T` is.
impl<T: TsonType> TsonType for Option<T> {
    fn tson_shape() -> TypeShape {
        T::tson_shape()
    }

    fn tson_write(&self, writer: &mut Writer) -> Result<(), Error> {
        match self {
            Some(value) => value.tson_write(writer),
            None => {
                writer.write_u8(RefFlag::Null as u8);
                Ok(())
            }
        }
    }
}
