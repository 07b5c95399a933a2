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

use tson::{Tson, TsonObject};
use tson_core::error::Error;

#[derive(TsonObject)]
struct Probe {
    v: i32,
    tags: Vec<String>,
}

fn sample() -> Vec<u8> {
    Tson::default()
        .serialize(&Probe {
            v: 5,
            tags: vec!["x".to_string()],
        })
        .unwrap()
}

#[test]
fn test_magic_gate() {
    let mut bytes = sample();
    bytes[0] = 0x00;
    bytes[1] = 0x00;
    let err = Tson::default().deserialize_any(&bytes).unwrap_err();
    assert!(matches!(err, Error::Format(_)), "{err}");
}

#[test]
fn test_version_gate() {
    let mut bytes = sample();
    bytes[2] = 2;
    let err = Tson::default().deserialize_any(&bytes).unwrap_err();
    assert!(matches!(err, Error::Format(_)), "{err}");
}

#[test]
fn test_content_length_beyond_the_buffer() {
    let mut bytes = sample();
    // content length lives at offset 7..11
    let declared = u32::from_le_bytes(bytes[7..11].try_into().unwrap());
    bytes[7..11].copy_from_slice(&(declared + 1).to_le_bytes());
    let err = Tson::default().deserialize_any(&bytes).unwrap_err();
    assert!(matches!(err, Error::Format(_)), "{err}");
}

#[test]
fn test_lengths_must_account_for_every_byte() {
    let mut bytes = sample();
    bytes.push(0);
    let err = Tson::default().deserialize_any(&bytes).unwrap_err();
    assert!(matches!(err, Error::Format(_)), "{err}");
}

#[test]
fn test_truncated_document() {
    let bytes = sample();
    for cut in 1..bytes.len() {
        let err = Tson::default()
            .deserialize_any(&bytes[..bytes.len() - cut])
            .unwrap_err();
        assert!(
            matches!(err, Error::Format(_) | Error::BufferOutOfBound(..)),
            "cut {cut} gave {err:?}"
        );
    }
}

#[test]
fn test_empty_input() {
    let err = Tson::default().deserialize_any(&[]).unwrap_err();
    assert!(matches!(err, Error::BufferOutOfBound(..)));
}

#[test]
fn test_depth_limit() {
    let deep: Vec<Vec<Vec<Vec<i32>>>> = vec![vec![vec![vec![1]]]];
    let bytes = Tson::default().serialize(&deep).unwrap();

    // four array layers plus the integer need five levels
    let err = Tson::default()
        .max_depth(4)
        .deserialize_any(&bytes)
        .unwrap_err();
    assert!(matches!(err, Error::Format(_)), "{err}");

    assert!(Tson::default().max_depth(5).deserialize_any(&bytes).is_ok());
}

#[test]
fn test_round_trip_survives_the_gates() {
    let bytes = sample();
    let value = Tson::default().deserialize_any(&bytes).unwrap();
    assert_eq!(value.get("v").and_then(tson::Value::as_i32), Some(5));
}
