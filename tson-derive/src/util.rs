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

use syn::{Data, DeriveInput, Field, Fields, LitStr};

/// Extracts the named fields of the struct, in declaration order.
pub fn named_fields(ast: &DeriveInput) -> syn::Result<Vec<&Field>> {
    match &ast.data {
        Data::Struct(s) => match &s.fields {
            Fields::Named(named) => Ok(named.named.iter().collect()),
            _ => Err(syn::Error::new_spanned(
                &ast.ident,
                "TsonObject requires a struct with named fields",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            &ast.ident,
            "TsonObject can only be derived for structs",
        )),
    }
}

/// Resolves a field's wire name: the declared identifier, unless a
/// `#[tson(rename = "...")]` attribute overrides it.
pub fn wire_name(field: &Field) -> syn::Result<String> {
    let mut rename = None;
    for attr in &field.attrs {
        if !attr.path().is_ident("tson") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                rename = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported tson attribute, expected `rename`"))
            }
        })?;
    }
    Ok(rename.unwrap_or_else(|| field.ident.as_ref().unwrap().to_string()))
}
