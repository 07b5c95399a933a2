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

//! # TSON Core
//!
//! Core implementation of the TSON self-describing binary object codec.
//! A TSON document carries a table of structural type descriptors next
//! to the content bytes, so a reader can rebuild a dynamic value tree
//! without sharing compiled type definitions with the writer.
//!
//! ## Architecture
//!
//! - **`tson`**: the codec facade with document framing, `serialize`
//!   and `deserialize`
//! - **`buffer`**: little-endian `Writer`/`Reader` over byte buffers
//! - **`types`**: the wire type-code scheme and its composition rules
//! - **`reflect`**: runtime type descriptions walked by the schema
//!   compiler, normally produced by `#[derive(TsonObject)]`
//! - **`meta`**: the schema compiler and the type-table codec with its
//!   raw-then-bind decode (forward and self references resolve only
//!   after the whole table is loaded)
//! - **`serializer`**: the `TsonType` trait and per-type content
//!   encoders
//! - **`decoder`**: the schema-driven content decoder producing `Value`
//! - **`value`**: the dynamic decode-side value tree
//! - **`error`**: error handling
//!
//! This crate is typically used through the higher-level `tson` crate,
//! which re-exports the API together with the derive macro.

pub mod buffer;
pub mod decoder;
pub mod error;
pub mod meta;
pub mod reflect;
pub mod serializer;
pub mod tson;
pub mod types;
pub mod value;

pub use error::Error;
pub use serializer::TsonType;
pub use tson::Tson;
pub use value::Value;
