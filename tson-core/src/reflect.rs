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

//! Runtime descriptions of encodable Rust types.
//!
//! The schema compiler never inspects Rust types directly; it walks the
//! [`TypeShape`] tree a type reports for itself, usually generated by
//! `#[derive(TsonObject)]`. Custom types list their fields through a fn
//! pointer so that recursive and mutually-recursive type graphs can be
//! described without the description itself recursing forever.

use std::any::TypeId as StdTypeId;

/// Identity of a custom type, used to deduplicate table entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypeKey(StdTypeId);

impl TypeKey {
    pub fn of<T: 'static>() -> TypeKey {
        TypeKey(StdTypeId::of::<T>())
    }
}

/// Handle to a custom structural type: its identity, display name, and a
/// lazy field lister.
#[derive(Clone)]
pub struct TypeHandle {
    key: TypeKey,
    name: &'static str,
    fields: fn() -> Vec<FieldDecl>,
}

impl TypeHandle {
    pub fn of<T: 'static>(name: &'static str, fields: fn() -> Vec<FieldDecl>) -> TypeHandle {
        TypeHandle {
            key: TypeKey::of::<T>(),
            name,
            fields,
        }
    }

    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Lists the type's fields in declared order.
    pub fn fields(&self) -> Vec<FieldDecl> {
        (self.fields)()
    }
}

impl std::fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeHandle").field("name", &self.name).finish()
    }
}

/// One declared field: its wire name and its declared type's shape.
#[derive(Clone, Debug)]
pub struct FieldDecl {
    pub name: &'static str,
    pub shape: TypeShape,
}

impl FieldDecl {
    pub fn new(name: &'static str, shape: TypeShape) -> FieldDecl {
        FieldDecl { name, shape }
    }
}

/// Declared-type description walked by the schema compiler.
///
/// Unlike [`crate::types::TypeCode`] this is a compile-side structure:
/// custom types carry a live [`TypeHandle`] rather than a table index,
/// and there is no dynamic sentinel, since an encodable type always has
/// a concrete shape.
#[derive(Clone, Debug)]
pub enum TypeShape {
    Bool,
    Int32,
    Float64,
    String,
    Array(Box<TypeShape>),
    Map,
    Custom(TypeHandle),
}
