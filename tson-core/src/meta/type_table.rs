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
use crate::types::{TypeCode, ARRAY};

/// One declared field of a custom type: wire name plus type code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSignature {
    pub name: String,
    pub code: TypeCode,
}

impl FieldSignature {
    pub fn new(name: impl Into<String>, code: TypeCode) -> FieldSignature {
        FieldSignature {
            name: name.into(),
            code,
        }
    }
}

/// The ordered field list of one custom structural type.
///
/// Field order is declaration order and is also the order in which the
/// fields' values appear in the content stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    fields: Vec<FieldSignature>,
}

impl TypeDescriptor {
    pub fn new(fields: Vec<FieldSignature>) -> TypeDescriptor {
        TypeDescriptor { fields }
    }

    pub fn fields(&self) -> &[FieldSignature] {
        &self.fields
    }
}

/// The ordered, deduplicated table of custom type descriptors embedded in
/// every document.
///
/// `TypeCode::Custom(i)` anywhere in the table (or in the root code at
/// the head of the content block) is an index into this table. Indices
/// may point forward or at the referencing entry itself, so the table can
/// only be interpreted once it has been read completely.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TypeTable {
    descriptors: Vec<TypeDescriptor>,
}

/// A field as parsed in the raw phase: name plus unresolved code words.
struct RawField {
    name: String,
    words: Vec<u32>,
}

impl TypeTable {
    pub fn new(descriptors: Vec<TypeDescriptor>) -> TypeTable {
        TypeTable { descriptors }
    }

    pub fn descriptors(&self) -> &[TypeDescriptor] {
        &self.descriptors
    }

    pub fn get(&self, index: usize) -> Option<&TypeDescriptor> {
        self.descriptors.get(index)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Serializes the table block: entry count, then per entry each
    /// field's NUL-terminated name and code words, with an empty name
    /// closing the entry.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut writer = Writer::default();
        writer.write_u32(self.descriptors.len() as u32);
        for descriptor in &self.descriptors {
            for field in descriptor.fields() {
                ensure!(
                    !field.name.is_empty(),
                    Error::unsupported_type(
                        "empty field names collide with the end-of-entry terminator"
                    )
                );
                writer.write_cstring(&field.name)?;
                field.code.write(&mut writer);
            }
            writer.write_u8(0);
        }
        Ok(writer.dump())
    }

    /// Reconstructs a table from its block bytes.
    ///
    /// Runs in two phases. The raw phase reads every entry's
    /// (name, word sequence) pairs without interpreting custom
    /// references, since those may point at entries that have not been
    /// read yet. The bind phase, once all entries exist, folds each word
    /// sequence into a [`TypeCode`] and checks every reference against
    /// the final table bounds.
    pub fn from_bytes(bytes: &[u8]) -> Result<TypeTable, Error> {
        let mut reader = Reader::new(bytes);
        let declared = reader.read_u32()? as usize;

        // Raw phase. The declared count is untrusted, so entries are
        // accumulated as bytes are actually consumed.
        let mut raw_entries = Vec::new();
        for _ in 0..declared {
            let mut fields = Vec::new();
            loop {
                let name = reader.read_cstring()?;
                if name.is_empty() {
                    break;
                }
                let mut words = Vec::new();
                loop {
                    let word = reader.read_u32()?;
                    words.push(word);
                    if word != ARRAY {
                        break;
                    }
                }
                fields.push(RawField { name, words });
            }
            raw_entries.push(fields);
        }
        ensure!(
            reader.remaining() == 0,
            Error::format("type-table block longer than its declared entries")
        );

        // Bind phase.
        let mut descriptors = Vec::with_capacity(raw_entries.len());
        for raw_fields in raw_entries {
            let mut fields = Vec::with_capacity(raw_fields.len());
            for raw in raw_fields {
                fields.push(FieldSignature::new(raw.name, TypeCode::from_words(&raw.words)?));
            }
            descriptors.push(TypeDescriptor::new(fields));
        }
        let table = TypeTable { descriptors };
        table.check_references()?;
        Ok(table)
    }

    fn check_references(&self) -> Result<(), Error> {
        for descriptor in &self.descriptors {
            for field in descriptor.fields() {
                let mut code = &field.code;
                loop {
                    match code {
                        TypeCode::Array(item) => code = item,
                        TypeCode::Custom(index) => {
                            ensure!(
                                (*index as usize) < self.descriptors.len(),
                                Error::lookup(format!(
                                    "field {:?} references type table entry {} of {}",
                                    field.name,
                                    index,
                                    self.descriptors.len()
                                ))
                            );
                            break;
                        }
                        _ => break,
                    }
                }
            }
        }
        Ok(())
    }
}
