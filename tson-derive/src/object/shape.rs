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

use crate::util::wire_name;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Ident};

/// Generates the `tson_shape` body: a custom type handle whose field
/// lister is a fn pointer, so recursive type graphs terminate: the
/// listing only runs when the schema compiler walks the handle.
pub fn gen_shape(name: &Ident, fields: &[&Field]) -> syn::Result<TokenStream> {
    let name_str = name.to_string();
    let decls = fields
        .iter()
        .map(|field| {
            let ty = &field.ty;
            let wire = wire_name(field)?;
            Ok(quote! {
                tson_core::reflect::FieldDecl::new(
                    #wire,
                    <#ty as tson_core::serializer::TsonType>::tson_shape(),
                )
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        tson_core::reflect::TypeShape::Custom(tson_core::reflect::TypeHandle::of::<Self>(
            #name_str,
            || vec![#(#decls),*],
        ))
    })
}
