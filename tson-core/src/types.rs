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

use crate::buffer::{Reader, Writer};
use crate::ensure;
use crate::error::Error;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Leading magic of every TSON document, little-endian on the wire.
pub const MAGIC_NUMBER: u16 = 0x54FA;

/// Format version written after the magic.
pub const FORMAT_VERSION: u8 = 1;

/// Wire values at or above this are references into the type table;
/// table index = wire value − `CUSTOM_TYPE_BASE`.
pub const CUSTOM_TYPE_BASE: u32 = 7;

/// Presence marker preceding every encoded value slot.
#[derive(Clone, Copy, Debug, PartialEq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum RefFlag {
    Null = 0,
    NotNull = 1,
}

/// Fixed wire tags of the type-code scheme.
///
/// `ARRAY` is a prefix marker: the item's own code words follow it in the
/// same slot. Every other tag terminates the sequence. References to the
/// type table have no tag of their own; they occupy the value range
/// starting at [`CUSTOM_TYPE_BASE`].
#[derive(Clone, Copy, Debug, PartialEq, TryFromPrimitive, IntoPrimitive)]
#[allow(non_camel_case_types)]
#[repr(u32)]
pub enum TypeId {
    NONE = 0,
    BOOL = 1,
    INT32 = 2,
    FLOAT64 = 3,
    STRING = 4,
    ARRAY = 5,
    MAP = 6,
}

pub const NONE: u32 = TypeId::NONE as u32;
pub const BOOL: u32 = TypeId::BOOL as u32;
pub const INT32: u32 = TypeId::INT32 as u32;
pub const FLOAT64: u32 = TypeId::FLOAT64 as u32;
pub const STRING: u32 = TypeId::STRING as u32;
pub const ARRAY: u32 = TypeId::ARRAY as u32;
pub const MAP: u32 = TypeId::MAP as u32;

/// A value's structural shape as carried by the wire.
///
/// On the wire a `TypeCode` is a short self-terminating sequence of
/// 32-bit words: one `ARRAY` word per array layer, then a single terminal
/// word. `None` is the absent/dynamic sentinel; it never describes an
/// encoded value, but the decoder accepts it to mean "the concrete type
/// is read inline next to each value".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeCode {
    None,
    Bool,
    Int32,
    Float64,
    String,
    Array(Box<TypeCode>),
    Map,
    Custom(u32),
}

impl TypeCode {
    /// Emits this code's word sequence.
    pub fn write(&self, writer: &mut Writer) {
        let mut code = self;
        loop {
            match code {
                TypeCode::Array(item) => {
                    writer.write_u32(ARRAY);
                    code = item;
                }
                TypeCode::None => return writer.write_u32(NONE),
                TypeCode::Bool => return writer.write_u32(BOOL),
                TypeCode::Int32 => return writer.write_u32(INT32),
                TypeCode::Float64 => return writer.write_u32(FLOAT64),
                TypeCode::String => return writer.write_u32(STRING),
                TypeCode::Map => return writer.write_u32(MAP),
                TypeCode::Custom(index) => return writer.write_u32(index + CUSTOM_TYPE_BASE),
            }
        }
    }

    /// Reads one word sequence from the stream and folds it into a code.
    pub fn read(reader: &mut Reader) -> Result<TypeCode, Error> {
        let mut words = Vec::new();
        loop {
            let word = reader.read_u32()?;
            words.push(word);
            if word != ARRAY {
                break;
            }
        }
        Self::from_words(&words)
    }

    /// Folds an already-collected word sequence into a code.
    ///
    /// The sequence must consist of zero or more `ARRAY` words followed by
    /// exactly one terminal word; anything else is malformed.
    pub fn from_words(words: &[u32]) -> Result<TypeCode, Error> {
        let (last, prefix) = words
            .split_last()
            .ok_or_else(|| Error::format("missing type code: empty word sequence"))?;
        ensure!(
            *last != ARRAY,
            Error::format("missing type code: sequence ends with an array marker")
        );
        let mut code = Self::terminal(*last);
        for word in prefix.iter().rev() {
            ensure!(
                *word == ARRAY,
                Error::format(format!(
                    "unexpected type code word {word} before the end of the sequence"
                ))
            );
            code = TypeCode::Array(Box::new(code));
        }
        Ok(code)
    }

    fn terminal(word: u32) -> TypeCode {
        match TypeId::try_from(word) {
            Ok(TypeId::NONE) => TypeCode::None,
            Ok(TypeId::BOOL) => TypeCode::Bool,
            Ok(TypeId::INT32) => TypeCode::Int32,
            Ok(TypeId::FLOAT64) => TypeCode::Float64,
            Ok(TypeId::STRING) => TypeCode::String,
            Ok(TypeId::MAP) => TypeCode::Map,
            // the caller already excluded ARRAY
            Ok(TypeId::ARRAY) => unreachable!(),
            Err(_) => TypeCode::Custom(word - CUSTOM_TYPE_BASE),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, TypeCode::None)
    }
}
