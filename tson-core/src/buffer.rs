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
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

/// Growable little-endian binary writer backing one output block.
#[derive(Default)]
pub struct Writer {
    bf: Vec<u8>,
}

impl Writer {
    pub fn dump(self) -> Vec<u8> {
        self.bf
    }

    pub fn len(&self) -> usize {
        self.bf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.bf.reserve(additional);
    }

    pub fn write_bytes(&mut self, v: &[u8]) {
        self.bf.extend_from_slice(v);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bf.write_u8(value).unwrap();
    }

    pub fn write_u16(&mut self, value: u16) {
        self.bf.write_u16::<LittleEndian>(value).unwrap();
    }

    pub fn write_u32(&mut self, value: u32) {
        self.bf.write_u32::<LittleEndian>(value).unwrap();
    }

    pub fn write_i32(&mut self, value: i32) {
        self.bf.write_i32::<LittleEndian>(value).unwrap();
    }

    pub fn write_f64(&mut self, value: f64) {
        self.bf.write_f64::<LittleEndian>(value).unwrap();
    }

    /// Writes `s` as UTF-8 followed by a NUL terminator.
    ///
    /// An interior NUL byte would truncate the string on read, so it is
    /// rejected instead of written.
    pub fn write_cstring(&mut self, s: &str) -> Result<(), Error> {
        if s.as_bytes().contains(&0) {
            return Err(Error::unsupported_type(format!(
                "string {s:?} contains an interior NUL byte and cannot be NUL-terminated"
            )));
        }
        self.bf.extend_from_slice(s.as_bytes());
        self.bf.write_u8(0).unwrap();
        Ok(())
    }
}

/// Bounds-checked little-endian reader over a borrowed byte slice.
///
/// Every read is fallible; running past the end of the slice yields
/// [`Error::BufferOutOfBound`] rather than panicking, since the input is
/// an untrusted document.
pub struct Reader<'a> {
    bf: &'a [u8],
    cursor: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bf: &'a [u8]) -> Reader<'a> {
        Reader { bf, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn remaining(&self) -> usize {
        self.bf.len() - self.cursor
    }

    fn check(&self, len: usize) -> Result<(), Error> {
        if self.remaining() < len {
            return Err(Error::buffer_out_of_bound(self.cursor, len, self.bf.len()));
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        self.check(1)?;
        let result = self.bf[self.cursor];
        self.cursor += 1;
        Ok(result)
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        self.check(2)?;
        let result = LittleEndian::read_u16(&self.bf[self.cursor..]);
        self.cursor += 2;
        Ok(result)
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        self.check(4)?;
        let result = LittleEndian::read_u32(&self.bf[self.cursor..]);
        self.cursor += 4;
        Ok(result)
    }

    pub fn read_i32(&mut self) -> Result<i32, Error> {
        self.check(4)?;
        let result = LittleEndian::read_i32(&self.bf[self.cursor..]);
        self.cursor += 4;
        Ok(result)
    }

    pub fn read_f64(&mut self) -> Result<f64, Error> {
        self.check(8)?;
        let result = LittleEndian::read_f64(&self.bf[self.cursor..]);
        self.cursor += 8;
        Ok(result)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], Error> {
        self.check(len)?;
        let bf = self.bf;
        let s = &bf[self.cursor..self.cursor + len];
        self.cursor += len;
        Ok(s)
    }

    /// Reads a NUL-terminated UTF-8 string, consuming the terminator.
    pub fn read_cstring(&mut self) -> Result<String, Error> {
        let bf = self.bf;
        let rest = &bf[self.cursor..];
        let nul = rest
            .iter()
            .position(|b| *b == 0)
            .ok_or_else(|| Error::format("unterminated string: NUL terminator not found"))?;
        let s = std::str::from_utf8(&rest[..nul])
            .map_err(|_| Error::format("string bytes are not valid UTF-8"))?;
        self.cursor += nul + 1;
        Ok(s.to_string())
    }
}
