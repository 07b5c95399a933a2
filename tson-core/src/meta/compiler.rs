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

use crate::error::Error;
use crate::meta::{FieldSignature, TypeDescriptor, TypeTable};
use crate::reflect::{TypeHandle, TypeKey, TypeShape};
use crate::types::TypeCode;
use std::collections::{HashMap, HashSet};

/// Result of compiling a root type: the deduplicated table of custom
/// descriptors reachable from it, plus the code of the root type itself.
pub struct CompiledSchema {
    pub table: TypeTable,
    pub root: TypeCode,
}

/// Compiles the table of custom structural types reachable from `root`.
///
/// Depth-first, post-order: a custom type's field types are visited
/// before the type's own descriptor is appended, so children land at
/// lower indices than their parents except where mutual or self
/// reference forces a forward index. Arrays contribute only their
/// element type; primitives and maps contribute nothing. Cycles stop at
/// the visited set, which is marked before recursing.
pub fn compile(root: &TypeShape) -> Result<CompiledSchema, Error> {
    let mut visited = HashSet::new();
    let mut ordered = Vec::new();
    discover(root, &mut visited, &mut ordered);

    let index_of: HashMap<TypeKey, u32> = ordered
        .iter()
        .enumerate()
        .map(|(index, handle)| (handle.key(), index as u32))
        .collect();

    let mut descriptors = Vec::with_capacity(ordered.len());
    for handle in &ordered {
        let mut fields = Vec::new();
        for decl in handle.fields() {
            fields.push(FieldSignature::new(decl.name, code_of(&decl.shape, &index_of)?));
        }
        descriptors.push(TypeDescriptor::new(fields));
    }

    let root_code = code_of(root, &index_of)?;
    Ok(CompiledSchema {
        table: TypeTable::new(descriptors),
        root: root_code,
    })
}

fn discover(shape: &TypeShape, visited: &mut HashSet<TypeKey>, ordered: &mut Vec<TypeHandle>) {
    match shape {
        TypeShape::Array(item) => discover(item, visited, ordered),
        TypeShape::Custom(handle) => {
            if visited.insert(handle.key()) {
                for decl in handle.fields() {
                    discover(&decl.shape, visited, ordered);
                }
                ordered.push(handle.clone());
            }
        }
        _ => {}
    }
}

fn code_of(shape: &TypeShape, index_of: &HashMap<TypeKey, u32>) -> Result<TypeCode, Error> {
    Ok(match shape {
        TypeShape::Bool => TypeCode::Bool,
        TypeShape::Int32 => TypeCode::Int32,
        TypeShape::Float64 => TypeCode::Float64,
        TypeShape::String => TypeCode::String,
        TypeShape::Array(item) => TypeCode::Array(Box::new(code_of(item, index_of)?)),
        TypeShape::Map => TypeCode::Map,
        TypeShape::Custom(handle) => {
            let index = index_of.get(&handle.key()).ok_or_else(|| {
                Error::lookup(format!(
                    "custom type '{}' is missing from the compiled table",
                    handle.name()
                ))
            })?;
            TypeCode::Custom(*index)
        }
    })
}
