use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A single inventory entry. Only ever constructed from fields that passed
/// validation, so every stored product upholds the field invariants
/// (`price > 0`, trimmed non-empty text).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
}

impl Product {
    pub fn new(fields: ProductFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            category: fields.category,
            price: fields.price,
            quantity: fields.quantity,
            description: fields.description,
        }
    }

    /// Inventory value of this line: price times units on hand.
    pub fn value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// The validated field set: everything a [`Product`] carries except its id.
/// Produced by `validate::validate`; the store accepts nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub description: String,
}

/// Raw form input, all fields as text. This is the shape a form (or a set of
/// CLI flags) naturally produces; numbers are parsed during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
    pub description: String,
}

impl From<&Product> for ProductDraft {
    /// Prefill for the edit dialog.
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            quantity: product.quantity.to_string(),
            description: product.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Category,
    Price,
    Quantity,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortField::Name => "name",
            SortField::Category => "category",
            SortField::Price => "price",
            SortField::Quantity => "quantity",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "category" => Ok(SortField::Category),
            "price" => Ok(SortField::Price),
            "quantity" => Ok(SortField::Quantity),
            other => Err(format!(
                "unknown sort field '{}' (expected name, category, price or quantity)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}
