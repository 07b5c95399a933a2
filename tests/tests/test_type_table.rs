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

use tson_core::error::Error;
use tson_core::meta::{FieldSignature, TypeDescriptor, TypeTable};
use tson_core::types::TypeCode;

fn table(descriptors: Vec<Vec<(&str, TypeCode)>>) -> TypeTable {
    TypeTable::new(
        descriptors
            .into_iter()
            .map(|fields| {
                TypeDescriptor::new(
                    fields
                        .into_iter()
                        .map(|(name, code)| FieldSignature::new(name, code))
                        .collect(),
                )
            })
            .collect(),
    )
}

#[test]
fn test_wire_layout_of_a_single_entry() {
    let t = table(vec![vec![
        ("v", TypeCode::Int32),
        ("tags", TypeCode::Array(Box::new(TypeCode::String))),
    ]]);
    let bytes = t.to_bytes().unwrap();
    #[rustfmt::skip]
    assert_eq!(bytes, vec![
        0x01, 0x00, 0x00, 0x00,             // one entry
        b'v', 0x00,                         // field name
        0x02, 0x00, 0x00, 0x00,             // Int32
        b't', b'a', b'g', b's', 0x00,       // field name
        0x05, 0x00, 0x00, 0x00,             // array of ...
        0x04, 0x00, 0x00, 0x00,             // ... String
        0x00,                               // end of entry
    ]);
}

#[test]
fn test_round_trip() {
    let t = table(vec![
        vec![("label", TypeCode::String)],
        vec![
            ("flag", TypeCode::Bool),
            ("ratio", TypeCode::Float64),
            ("inner", TypeCode::Custom(0)),
            ("grid", TypeCode::Array(Box::new(TypeCode::Array(Box::new(TypeCode::Int32))))),
            ("extras", TypeCode::Map),
        ],
    ]);
    let decoded = TypeTable::from_bytes(&t.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded, t);
}

#[test]
fn test_empty_table_round_trip() {
    let t = TypeTable::default();
    let bytes = t.to_bytes().unwrap();
    assert_eq!(bytes, vec![0, 0, 0, 0]);
    assert_eq!(TypeTable::from_bytes(&bytes).unwrap(), t);
}

#[test]
fn test_forward_and_self_references_bind() {
    // entry 0 points forward at entry 1, entry 1 points at itself
    let t = table(vec![
        vec![("next", TypeCode::Custom(1))],
        vec![("me", TypeCode::Custom(1)), ("back", TypeCode::Custom(0))],
    ]);
    let decoded = TypeTable::from_bytes(&t.to_bytes().unwrap()).unwrap();
    assert_eq!(decoded.descriptors()[0].fields()[0].code, TypeCode::Custom(1));
    assert_eq!(decoded.descriptors()[1].fields()[0].code, TypeCode::Custom(1));
}

#[test]
fn test_reference_out_of_bounds_is_a_lookup_error() {
    let t = table(vec![vec![("dangling", TypeCode::Custom(5))]]);
    let err = TypeTable::from_bytes(&t.to_bytes().unwrap()).unwrap_err();
    assert!(matches!(err, Error::Lookup(_)));

    // also when buried under array layers
    let t = table(vec![vec![(
        "nested",
        TypeCode::Array(Box::new(TypeCode::Custom(9))),
    )]]);
    let err = TypeTable::from_bytes(&t.to_bytes().unwrap()).unwrap_err();
    assert!(matches!(err, Error::Lookup(_)));
}

#[test]
fn test_truncated_block_fails() {
    let t = table(vec![vec![("v", TypeCode::Int32)]]);
    let bytes = t.to_bytes().unwrap();
    for cut in 1..bytes.len() {
        let err = TypeTable::from_bytes(&bytes[..bytes.len() - cut]).unwrap_err();
        assert!(
            matches!(err, Error::BufferOutOfBound(..) | Error::Format(_)),
            "cut {cut} gave {err:?}"
        );
    }
}

#[test]
fn test_trailing_bytes_fail() {
    let t = table(vec![vec![("v", TypeCode::Int32)]]);
    let mut bytes = t.to_bytes().unwrap();
    bytes.push(0);
    let err = TypeTable::from_bytes(&bytes).unwrap_err();
    assert!(matches!(err, Error::Format(_)));
}

#[test]
fn test_array_of_none_binds_as_dynamic() {
    // count = 1, field "a" typed as array-of-none: the encoder never
    // produces this, but the decoder accepts it as a dynamically typed
    // array
    #[rustfmt::skip]
    let bytes = vec![
        0x01, 0x00, 0x00, 0x00,
        b'a', 0x00,
        0x05, 0x00, 0x00, 0x00, // array of ...
        0x00, 0x00, 0x00, 0x00, // ... none: raw-phase legal
        0x00,
    ];
    // Array(None) is a dynamically typed array, which binds fine
    let decoded = TypeTable::from_bytes(&bytes).unwrap();
    assert_eq!(
        decoded.descriptors()[0].fields()[0].code,
        TypeCode::Array(Box::new(TypeCode::None))
    );
}

#[test]
fn test_empty_field_name_cannot_be_encoded() {
    let t = table(vec![vec![("", TypeCode::Int32)]]);
    assert!(matches!(t.to_bytes(), Err(Error::UnsupportedType(_))));
}
