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

use std::collections::HashMap;
use tson_core::meta::compile;
use tson_core::serializer::TsonType;
use tson_core::types::TypeCode;
use tson_derive::TsonObject;

#[derive(TsonObject)]
struct Inner {
    label: String,
}

#[derive(TsonObject)]
struct Outer {
    first: Inner,
    second: Option<Inner>,
    values: Vec<i32>,
}

#[test]
fn test_children_come_before_parents() {
    let schema = compile(&Outer::tson_shape()).unwrap();
    let table = &schema.table;
    assert_eq!(table.len(), 2);

    // Inner is discovered while walking Outer's fields, so it lands first
    let inner = &table.descriptors()[0];
    assert_eq!(inner.fields().len(), 1);
    assert_eq!(inner.fields()[0].name, "label");
    assert_eq!(inner.fields()[0].code, TypeCode::String);

    let outer = &table.descriptors()[1];
    assert_eq!(outer.fields()[0].name, "first");
    assert_eq!(outer.fields()[0].code, TypeCode::Custom(0));
    assert_eq!(outer.fields()[1].code, TypeCode::Custom(0));
    assert_eq!(
        outer.fields()[2].code,
        TypeCode::Array(Box::new(TypeCode::Int32))
    );

    assert_eq!(schema.root, TypeCode::Custom(1));
}

#[test]
fn test_duplicate_types_share_one_entry() {
    // `first` and `second` both reference Inner; the table holds it once
    let schema = compile(&Outer::tson_shape()).unwrap();
    assert_eq!(schema.table.len(), 2);
}

#[test]
fn test_primitive_and_array_roots_need_no_table() {
    let schema = compile(&<i32 as TsonType>::tson_shape()).unwrap();
    assert!(schema.table.is_empty());
    assert_eq!(schema.root, TypeCode::Int32);

    let schema = compile(&<Vec<Vec<String>> as TsonType>::tson_shape()).unwrap();
    assert!(schema.table.is_empty());
    assert_eq!(
        schema.root,
        TypeCode::Array(Box::new(TypeCode::Array(Box::new(TypeCode::String))))
    );
}

#[test]
fn test_array_elements_are_discovered() {
    #[derive(TsonObject)]
    struct Batch {
        entries: Vec<Inner>,
    }

    let schema = compile(&Batch::tson_shape()).unwrap();
    assert_eq!(schema.table.len(), 2);
    assert_eq!(
        schema.table.descriptors()[1].fields()[0].code,
        TypeCode::Array(Box::new(TypeCode::Custom(0)))
    );
}

#[derive(TsonObject)]
struct Node {
    name: String,
    next: Option<Box<Node>>,
}

#[test]
fn test_self_reference_compiles_to_one_entry() {
    let schema = compile(&Node::tson_shape()).unwrap();
    assert_eq!(schema.table.len(), 1);
    let node = &schema.table.descriptors()[0];
    assert_eq!(node.fields()[0].code, TypeCode::String);
    assert_eq!(node.fields()[1].name, "next");
    assert_eq!(node.fields()[1].code, TypeCode::Custom(0));
    assert_eq!(schema.root, TypeCode::Custom(0));
}

#[derive(TsonObject)]
struct Ping {
    pong: Option<Box<Pong>>,
}

#[derive(TsonObject)]
struct Pong {
    ping: Option<Box<Ping>>,
}

#[test]
fn test_mutual_recursion_forces_a_forward_reference() {
    let schema = compile(&Ping::tson_shape()).unwrap();
    assert_eq!(schema.table.len(), 2);
    // Pong completes first, so its back-edge points forward at Ping
    assert_eq!(schema.table.descriptors()[0].fields()[0].name, "ping");
    assert_eq!(schema.table.descriptors()[0].fields()[0].code, TypeCode::Custom(1));
    assert_eq!(schema.table.descriptors()[1].fields()[0].code, TypeCode::Custom(0));
    assert_eq!(schema.root, TypeCode::Custom(1));
}

#[test]
fn test_map_fields_compile_without_entries() {
    #[derive(TsonObject)]
    struct Labeled {
        attributes: Option<HashMap<String, String>>,
    }

    let schema = compile(&Labeled::tson_shape()).unwrap();
    assert_eq!(schema.table.len(), 1);
    assert_eq!(schema.table.descriptors()[0].fields()[0].code, TypeCode::Map);
}

#[test]
fn test_tables_are_reproducible() {
    let a = compile(&Outer::tson_shape()).unwrap();
    let b = compile(&Outer::tson_shape()).unwrap();
    assert_eq!(a.table, b.table);
    assert_eq!(a.root, b.root);
}
