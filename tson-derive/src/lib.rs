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

//! # TSON Derive Macros
//!
//! Procedural macros for the TSON binary object codec.
//!
//! ## `#[derive(TsonObject)]`
//!
//! Implements `tson_core::serializer::TsonType` for a struct with named
//! fields: the struct reports its structural shape to the schema
//! compiler and writes its fields in declaration order, which is also
//! the field order embedded in the document's type table.
//!
//! Field wire names default to the Rust identifier and can be overridden
//! with `#[tson(rename = "...")]`:
//!
//! ```rust
//! use tson_derive::TsonObject;
//!
//! #[derive(TsonObject)]
//! struct Package {
//!     #[tson(rename = "packageName")]
//!     name: String,
//!     downloads: i32,
//!     tags: Vec<String>,
//! }
//! ```
//!
//! Recursive types work through `Option<Box<T>>`:
//!
//! ```rust
//! use tson_derive::TsonObject;
//!
//! #[derive(TsonObject)]
//! struct Node {
//!     name: String,
//!     next: Option<Box<Node>>,
//! }
//! ```
//!
//! Only structs with named fields are supported; enums, unions, tuple
//! structs and types with lifetime parameters are rejected.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;
mod util;

/// Derive macro implementing `TsonType` for a named-field struct.
#[proc_macro_derive(TsonObject, attributes(tson))]
pub fn proc_macro_derive_tson_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_tson_object(&input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
