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

//! Numeric impls. The wire has exactly one integer type (Int32) and one
//! floating type (Float64); narrower Rust integers promote losslessly
//! and `f32` widens to `f64`. Wider integers have no impl on purpose, so
//! a lossy field type is rejected at compile time instead of overflowing
//! at runtime.

use crate::buffer::Writer;
use crate::error::Error;
use crate::reflect::TypeShape;
use crate::serializer::TsonType;
use crate::types::RefFlag;

impl TsonType for i32 {
    fn tson_shape() -> TypeShape {
        TypeShape::Int32
    }

    fn tson_write(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_u8(RefFlag::NotNull as u8);
        writer.write_i32(*self);
        Ok(())
    }
}

macro_rules! impl_int32_promotion {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TsonType for $ty {
                fn tson_shape() -> TypeShape {
                    TypeShape::Int32
                }

                fn tson_write(&self, writer: &mut Writer) -> Result<(), Error> {
                    writer.write_u8(RefFlag::NotNull as u8);
                    writer.write_i32(i32::from(*self));
                    Ok(())
                }
            }
        )+
    };
}

impl_int32_promotion!(i8, i16, u8, u16);

impl TsonType for f64 {
    fn tson_shape() -> TypeShape {
        TypeShape::Float64
    }

    fn tson_write(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_u8(RefFlag::NotNull as u8);
        writer.write_f64(*self);
        Ok(())
    }
}

impl TsonType for f32 {
    fn tson_shape() -> TypeShape {
        TypeShape::Float64
    }

    fn tson_write(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_u8(RefFlag::NotNull as u8);
        writer.write_f64(f64::from(*self));
        Ok(())
    }
}
