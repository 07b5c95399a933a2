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

impl TsonType for bool {
    fn tson_shape() -> TypeShape {
        TypeShape::Bool
    }

    fn tson_write(&self, writer: &mut Writer) -> Result<(), Error> {
        writer.write_u8(RefFlag::NotNull as u8);
        writer.write_u8(*self as u8);
        Ok(())
    }
}
