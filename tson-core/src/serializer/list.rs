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
use std::collections::VecDeque;

fn write_sequence<'a, T, I>(items: I, writer: &mut Writer) -> Result<(), Error>
where
    T: TsonType + 'a,
    I: ExactSizeIterator<Item = &'a T>,
{
    writer.write_u8(RefFlag::NotNull as u8);
    let count = u32::try_from(items.len())
        .map_err(|_| Error::unsupported_type("sequence length exceeds the u32 count field"))?;
    writer.write_u32(count);
    for item in items {
        item.tson_write(writer)?;
    }
    Ok(())
}

impl<T: TsonType> TsonType for Vec<T> {
    fn tson_shape() -> TypeShape {
        TypeShape::Array(Box::new(T::tson_shape()))
    }

    fn tson_write(&self, writer: &mut Writer) -> Result<(), Error> {
        write_sequence(self.iter(), writer)
    }
}

impl<T: TsonType> TsonType for VecDeque<T> {
    fn tson_shape() -> TypeShape {
        TypeShape::Array(Box::new(T::tson_shape()))
    }

    fn tson_write(&self, writer: &mut Writer) -> Result<(), Error> {
        write_sequence(self.iter(), writer)
    }
}

impl<T: TsonType, const N: usize> TsonType for [T; N] {
    fn tson_shape() -> TypeShape {
        TypeShape::Array(Box::new(T::tson_shape()))
    }

    fn tson_write(&self, writer: &mut Writer) -> Result<(), Error> {
        write_sequence(self.iter(), writer)
    }
}
