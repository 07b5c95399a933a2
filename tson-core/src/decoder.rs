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

//! Content decoder: interprets a content block purely by following type
//! codes, with custom references resolved through the bound table. No
//! target type is involved; the output is the dynamic [`Value`] tree.

use crate::buffer::Reader;
use crate::ensure;
use crate::error::Error;
use crate::meta::TypeTable;
use crate::types::{RefFlag, TypeCode};
use crate::value::Value;
use indexmap::IndexMap;

/// Reads the leading root type-code word sequence, then the root value.
pub fn read_root(reader: &mut Reader, table: &TypeTable, max_depth: u32) -> Result<Value, Error> {
    let code = TypeCode::read(reader)?;
    ensure!(
        !code.is_none(),
        Error::format("missing type code for the document root")
    );
    read_value(reader, table, &code, max_depth)
}

fn read_presence(reader: &mut Reader) -> Result<bool, Error> {
    Ok(reader.read_u8()? != RefFlag::Null as u8)
}

fn read_value(
    reader: &mut Reader,
    table: &TypeTable,
    code: &TypeCode,
    depth: u32,
) -> Result<Value, Error> {
    let depth = depth
        .checked_sub(1)
        .ok_or_else(|| Error::format("value nesting exceeds the configured depth limit"))?;
    match code {
        // Dynamic slot: the concrete type rides the content stream just
        // ahead of the value.
        TypeCode::None => {
            let inline = TypeCode::read(reader)?;
            ensure!(
                !inline.is_none(),
                Error::format("missing type code for a dynamically typed value")
            );
            read_value(reader, table, &inline, depth)
        }
        TypeCode::Bool => {
            if !read_presence(reader)? {
                return Ok(Value::Null);
            }
            Ok(Value::Bool(reader.read_u8()? != 0))
        }
        TypeCode::Int32 => {
            if !read_presence(reader)? {
                return Ok(Value::Null);
            }
            Ok(Value::Int32(reader.read_i32()?))
        }
        TypeCode::Float64 => {
            if !read_presence(reader)? {
                return Ok(Value::Null);
            }
            Ok(Value::Float64(reader.read_f64()?))
        }
        TypeCode::String => {
            if !read_presence(reader)? {
                return Ok(Value::Null);
            }
            Ok(Value::String(reader.read_cstring()?))
        }
        TypeCode::Array(item) => {
            if !read_presence(reader)? {
                return Ok(Value::Null);
            }
            let count = reader.read_u32()?;
            // count is untrusted: grow as elements actually parse
            let mut items = Vec::new();
            for _ in 0..count {
                items.push(read_value(reader, table, item, depth)?);
            }
            Ok(Value::Array(items))
        }
        TypeCode::Map => {
            if !read_presence(reader)? {
                return Ok(Value::Null);
            }
            let count = reader.read_u32()?;
            let mut entries = IndexMap::new();
            for _ in 0..count {
                let key = reader.read_cstring()?;
                let value_code = TypeCode::read(reader)?;
                ensure!(
                    !value_code.is_none(),
                    Error::format(format!("missing type code for map entry {key:?}"))
                );
                let value = read_value(reader, table, &value_code, depth)?;
                entries.insert(key, value);
            }
            Ok(Value::Object(entries))
        }
        TypeCode::Custom(index) => {
            let descriptor = table.get(*index as usize).ok_or_else(|| {
                Error::lookup(format!(
                    "content references type table entry {} of {}",
                    index,
                    table.len()
                ))
            })?;
            if !read_presence(reader)? {
                return Ok(Value::Null);
            }
            let mut entries = IndexMap::new();
            for field in descriptor.fields() {
                let value = read_value(reader, table, &field.code, depth)?;
                entries.insert(field.name.clone(), value);
            }
            Ok(Value::Object(entries))
        }
    }
}
