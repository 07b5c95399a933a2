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
use crate::decoder;
use crate::ensure;
use crate::error::Error;
use crate::meta::{compile, TypeTable};
use crate::serializer::TsonType;
use crate::types::{FORMAT_VERSION, MAGIC_NUMBER};
use crate::value::Value;

/// magic (2) + version (1) + two block lengths (4 + 4)
const HEAD_SIZE: usize = 11;

const DEFAULT_MAX_DEPTH: u32 = 64;

/// The TSON codec instance.
///
/// A document embeds its own schema: `serialize` compiles the table of
/// structural types reachable from the value's type and writes it next
/// to the content bytes, so `deserialize` can rebuild a dynamic
/// [`Value`] tree without compiled type definitions on the reading
/// side.
///
/// `Tson` carries configuration only. The schema table is compiled
/// fresh for every `serialize` call and rebuilt fresh for every
/// `deserialize` call, so a single instance can be shared freely across
/// threads.
///
/// # Examples
///
/// ```rust, ignore
/// use tson::{Tson, TsonObject};
///
/// #[derive(TsonObject)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let tson = Tson::default();
/// let bytes = tson.serialize(&Point { x: 10, y: 20 })?;
/// let value = tson.deserialize_any(&bytes)?;
/// assert_eq!(value.get("x").and_then(|v| v.as_i32()), Some(10));
/// ```
pub struct Tson {
    max_depth: u32,
}

impl Default for Tson {
    fn default() -> Self {
        Tson {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Tson {
    /// Sets the maximum value nesting depth accepted when decoding.
    ///
    /// Bounds decoder recursion so a hostile document cannot overflow
    /// the stack. The default is 64.
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Serializes `value` into a complete TSON document.
    ///
    /// Fails when the value graph contains a construct the format cannot
    /// write, such as a non-null map value or a string with an interior
    /// NUL byte.
    pub fn serialize<T: TsonType>(&self, value: &T) -> Result<Vec<u8>, Error> {
        let schema = compile(&T::tson_shape())?;
        let type_block = schema.table.to_bytes()?;

        let mut content = Writer::default();
        schema.root.write(&mut content);
        value.tson_write(&mut content)?;
        let content_block = content.dump();

        let mut writer = Writer::default();
        writer.reserve(HEAD_SIZE + type_block.len() + content_block.len());
        writer.write_u16(MAGIC_NUMBER);
        writer.write_u8(FORMAT_VERSION);
        writer.write_u32(block_len(&type_block)?);
        writer.write_u32(block_len(&content_block)?);
        writer.write_bytes(&type_block);
        writer.write_bytes(&content_block);
        Ok(writer.dump())
    }

    /// Deserializes a document into its dynamic [`Value`] tree.
    ///
    /// The type parameter is accepted for symmetry with
    /// [`Tson::serialize`] but is not consulted: the document is
    /// self-describing, and the result is always the type-erased tree.
    pub fn deserialize<T: TsonType>(&self, bf: &[u8]) -> Result<Value, Error> {
        self.deserialize_any(bf)
    }

    /// Deserializes a document without any type hint.
    pub fn deserialize_any(&self, bf: &[u8]) -> Result<Value, Error> {
        let mut reader = Reader::new(bf);

        let magic = reader.read_u16()?;
        ensure!(
            magic == MAGIC_NUMBER,
            Error::format(format!(
                "TSON documents start with magic number 0x{MAGIC_NUMBER:04X}, found 0x{magic:04X}"
            ))
        );
        let version = reader.read_u8()?;
        ensure!(
            version == FORMAT_VERSION,
            Error::format(format!(
                "unsupported format version {version}, expected {FORMAT_VERSION}"
            ))
        );

        let type_len = reader.read_u32()? as usize;
        let content_len = reader.read_u32()? as usize;
        let declared = type_len
            .checked_add(content_len)
            .ok_or_else(|| Error::format("declared block lengths overflow"))?;
        ensure!(
            declared == reader.remaining(),
            Error::format(format!(
                "declared blocks cover {declared} bytes but {} remain in the document",
                reader.remaining()
            ))
        );

        let table = TypeTable::from_bytes(reader.read_bytes(type_len)?)?;
        let mut content = Reader::new(reader.read_bytes(content_len)?);
        let value = decoder::read_root(&mut content, &table, self.max_depth)?;
        ensure!(
            content.remaining() == 0,
            Error::format(format!(
                "{} unconsumed bytes after the root value",
                content.remaining()
            ))
        );
        Ok(value)
    }
}

fn block_len(block: &[u8]) -> Result<u32, Error> {
    u32::try_from(block.len())
        .map_err(|_| Error::format("document block exceeds the u32 length field"))
}
