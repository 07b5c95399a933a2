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

use crate::util::named_fields;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, GenericParam};

mod shape;
mod write;

pub fn derive_tson_object(ast: &DeriveInput) -> syn::Result<TokenStream> {
    if ast.generics.lifetimes().next().is_some() {
        return Err(syn::Error::new_spanned(
            &ast.ident,
            "TsonObject requires an owned ('static) struct; lifetime parameters are not supported",
        ));
    }
    let fields = named_fields(ast)?;
    let name = &ast.ident;

    // Every type parameter must itself be encodable and 'static, since
    // the struct's identity keys the compiled type table.
    let mut generics = ast.generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(type_param) = param {
            type_param
                .bounds
                .push(syn::parse_quote!(tson_core::serializer::TsonType));
            type_param.bounds.push(syn::parse_quote!('static));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let shape_ts = shape::gen_shape(name, &fields)?;
    let write_ts = write::gen_write(&fields);

    Ok(quote! {
        impl #impl_generics tson_core::serializer::TsonType for #name #ty_generics #where_clause {
            fn tson_shape() -> tson_core::reflect::TypeShape {
                #shape_ts
            }

            fn tson_write(
                &self,
                writer: &mut tson_core::buffer::Writer,
            ) -> Result<(), tson_core::error::Error> {
                #write_ts
                Ok(())
            }
        }
    })
}
