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

//! # TSON
//!
//! TSON is a self-describing binary object codec: serializing a value
//! embeds a compact table of structural type descriptors next to the
//! content bytes, and deserializing rebuilds a dynamic value tree from
//! that table alone; the reading side never needs the original type
//! definitions.
//!
//! The schema table supports forward and self references, so recursive
//! and mutually recursive types round-trip naturally.
//!
//! ```rust
//! use tson::{Tson, TsonObject, Value};
//!
//! #[derive(TsonObject)]
//! struct Node {
//!     name: String,
//!     next: Option<Box<Node>>,
//! }
//!
//! # fn main() -> Result<(), tson::Error> {
//! let chain = Node {
//!     name: "head".to_string(),
//!     next: Some(Box::new(Node {
//!         name: "tail".to_string(),
//!         next: None,
//!     })),
//! };
//!
//! let tson = Tson::default();
//! let bytes = tson.serialize(&chain)?;
//!
//! // No `Node` needed on the reading side.
//! let value = tson.deserialize_any(&bytes)?;
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("head"));
//! assert_eq!(
//!     value.get("next").and_then(|n| n.get("next")),
//!     Some(&Value::Null)
//! );
//! # Ok(())
//! # }
//! ```

pub use tson_core::buffer;
pub use tson_core::decoder;
pub use tson_core::error;
pub use tson_core::meta;
pub use tson_core::reflect;
pub use tson_core::serializer;
pub use tson_core::types;
pub use tson_core::value;

pub use tson_core::{Error, Tson, TsonType, Value};
pub use tson_derive::TsonObject;
