//! Applies a sparse, loosely-typed field map onto a [`Restaurant`].
//!
//! Every key is looked up in a fixed registry of restaurant attributes and its
//! value is coerced with the same `serde` rules used to decode a whole
//! restaurant, so `"12.50"` and `12.5` both become a decimal fee and
//! `{"id": 3}` becomes a kitchen reference. The whole map is decoded before
//! anything is written, so a rejected merge leaves the target untouched.

use bigdecimal::BigDecimal;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors};

use super::repository::{Address, Restaurant};
use crate::modules::{kitchen::repository::Kitchen, payment_method::repository::PaymentMethod};
use crate::utils::validation::{delivery_fee_amount, non_blank};

pub const PAYMENT_METHODS_FIELD: &str = "formasPagamento";

#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("Restaurant updates must be a JSON object")]
    InvalidArgument,
    #[error("Unknown restaurant field '{field}'")]
    UnknownField { field: String },
    #[error("Restaurant field '{field}' cannot be updated")]
    ReadOnlyField { field: String },
    #[error("Restaurant field '{field}' must be {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },
    #[error("Invalid restaurant fields: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// Typed form of a sparse update. `address` distinguishes an explicit `null`
/// (`Some(None)`) from absence (`None`).
#[derive(Debug, Default, Clone, PartialEq, Validate)]
pub struct RestaurantPatch {
    #[validate(
        length(max = 80),
        custom(code = "INVALID_RESTAURANT_NAME", function = "non_blank")
    )]
    pub name: Option<String>,
    #[validate(custom(function = "delivery_fee_amount"))]
    pub delivery_fee: Option<BigDecimal>,
    pub kitchen: Option<Kitchen>,
    pub payment_methods: Option<Vec<PaymentMethod>>,
    pub address: Option<Option<Address>>,
}

type Decode = fn(&mut RestaurantPatch, Value) -> Result<(), &'static str>;

enum Access {
    Writable(Decode),
    ReadOnly,
}

struct Field {
    name: &'static str,
    access: Access,
}

const FIELDS: &[Field] = &[
    Field {
        name: "id",
        access: Access::ReadOnly,
    },
    Field {
        name: "nome",
        access: Access::Writable(decode_name),
    },
    Field {
        name: "taxaFrete",
        access: Access::Writable(decode_delivery_fee),
    },
    Field {
        name: "cozinha",
        access: Access::Writable(decode_kitchen),
    },
    Field {
        name: PAYMENT_METHODS_FIELD,
        access: Access::Writable(decode_payment_methods),
    },
    Field {
        name: "endereco",
        access: Access::Writable(decode_address),
    },
    Field {
        name: "dataCadastro",
        access: Access::ReadOnly,
    },
    Field {
        name: "dataAtualizacao",
        access: Access::ReadOnly,
    },
];

fn coerce<T: DeserializeOwned>(value: Value, expected: &'static str) -> Result<T, &'static str> {
    serde_json::from_value(value).map_err(|_| expected)
}

fn decode_name(patch: &mut RestaurantPatch, value: Value) -> Result<(), &'static str> {
    patch.name = Some(coerce(value, "a string")?);
    Ok(())
}

fn decode_delivery_fee(patch: &mut RestaurantPatch, value: Value) -> Result<(), &'static str> {
    patch.delivery_fee = Some(coerce(value, "a decimal number")?);
    Ok(())
}

fn decode_kitchen(patch: &mut RestaurantPatch, value: Value) -> Result<(), &'static str> {
    patch.kitchen = Some(coerce(value, "an object with a numeric id")?);
    Ok(())
}

fn decode_payment_methods(patch: &mut RestaurantPatch, value: Value) -> Result<(), &'static str> {
    patch.payment_methods = Some(coerce(value, "a list of objects with numeric ids")?);
    Ok(())
}

fn decode_address(patch: &mut RestaurantPatch, value: Value) -> Result<(), &'static str> {
    patch.address = Some(coerce(value, "an address object or null")?);
    Ok(())
}

impl RestaurantPatch {
    pub fn decode(updates: &Map<String, Value>) -> Result<Self, MergeError> {
        let mut patch = Self::default();

        for (name, value) in updates {
            let field = FIELDS
                .iter()
                .find(|field| field.name == name.as_str())
                .ok_or_else(|| MergeError::UnknownField {
                    field: name.clone(),
                })?;

            match field.access {
                Access::ReadOnly => {
                    return Err(MergeError::ReadOnlyField {
                        field: name.clone(),
                    })
                }
                Access::Writable(decode) => {
                    decode(&mut patch, value.clone()).map_err(|expected| {
                        MergeError::TypeMismatch {
                            field: name.clone(),
                            expected,
                        }
                    })?
                }
            }
        }

        Ok(patch)
    }

    pub fn apply(self, target: &mut Restaurant) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(delivery_fee) = self.delivery_fee {
            target.delivery_fee = delivery_fee;
        }
        if let Some(kitchen) = self.kitchen {
            target.kitchen = kitchen;
        }
        if let Some(payment_methods) = self.payment_methods {
            target.payment_methods = payment_methods;
        }
        if let Some(address) = self.address {
            target.address = address;
        }
    }
}

pub fn merge<'r>(
    updates: &Value,
    target: &'r mut Restaurant,
) -> Result<&'r mut Restaurant, MergeError> {
    let updates = updates.as_object().ok_or(MergeError::InvalidArgument)?;

    let patch = RestaurantPatch::decode(updates)?;
    patch.validate()?;
    patch.apply(target);

    Ok(target)
}
