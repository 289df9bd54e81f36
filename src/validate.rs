//! Per-field validation of raw drafts.
//!
//! Pure functions: no store access, no cross-field or uniqueness rules. Every
//! rule is evaluated, never short-circuited, so a submission with several bad
//! fields reports all of them at once.

use crate::model::{ProductDraft, ProductFields};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Category,
    Price,
    Quantity,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Price => "price",
            Field::Quantity => "quantity",
            Field::Description => "description",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid(ProductFields),
    Invalid(Vec<FieldError>),
}

/// Check a draft against the field rules and parse its numeric fields.
///
/// Negative quantities fail the `u32` parse, so "not a valid integer" and
/// "less than zero" collapse into the same rejection.
pub fn validate(draft: &ProductDraft) -> Validation {
    let mut errors = Vec::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.push(FieldError::new(Field::Name, "Product name is required"));
    }

    let category = draft.category.trim();
    if category.is_empty() {
        errors.push(FieldError::new(Field::Category, "Category is required"));
    }

    let price = draft
        .price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0);
    if price.is_none() {
        errors.push(FieldError::new(Field::Price, "Price must be greater than 0"));
    }

    let quantity = draft.quantity.trim().parse::<u32>().ok();
    if quantity.is_none() {
        errors.push(FieldError::new(
            Field::Quantity,
            "Quantity must be 0 or greater",
        ));
    }

    let description = draft.description.trim();
    if description.is_empty() {
        errors.push(FieldError::new(Field::Description, "Description is required"));
    }

    match (price, quantity, errors.is_empty()) {
        (Some(price), Some(quantity), true) => Validation::Valid(ProductFields {
            name: name.to_string(),
            category: category.to_string(),
            price,
            quantity,
            description: description.to_string(),
        }),
        _ => Validation::Invalid(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: &str, price: &str, quantity: &str, description: &str) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            category: category.to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_draft() {
        let result = validate(&draft("Widget", "Tools", "9.99", "3", "A widget"));
        match result {
            Validation::Valid(fields) => {
                assert_eq!(fields.name, "Widget");
                assert_eq!(fields.price, 9.99);
                assert_eq!(fields.quantity, 3);
            }
            Validation::Invalid(errors) => panic!("unexpected errors: {:?}", errors),
        }
    }

    #[test]
    fn trims_text_fields_before_storing() {
        let result = validate(&draft("  Widget  ", "Tools", "1", "0", "  padded  "));
        match result {
            Validation::Valid(fields) => {
                assert_eq!(fields.name, "Widget");
                assert_eq!(fields.description, "padded");
            }
            Validation::Invalid(errors) => panic!("unexpected errors: {:?}", errors),
        }
    }

    #[test]
    fn empty_name_is_the_only_error() {
        let result = validate(&draft("", "A", "10", "1", "x"));
        match result {
            Validation::Invalid(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, Field::Name);
            }
            Validation::Valid(_) => panic!("expected invalid"),
        }
    }

    #[test]
    fn all_five_rules_report_simultaneously() {
        let result = validate(&draft("", "", "-1", "-1", ""));
        match result {
            Validation::Invalid(errors) => {
                let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
                assert_eq!(
                    fields,
                    vec![
                        Field::Name,
                        Field::Category,
                        Field::Price,
                        Field::Quantity,
                        Field::Description
                    ]
                );
            }
            Validation::Valid(_) => panic!("expected invalid"),
        }
    }

    #[test]
    fn zero_price_and_unparseable_numbers_fail() {
        for bad in ["0", "-0.5", "free", "NaN", "inf", ""] {
            let result = validate(&draft("W", "T", bad, "1", "d"));
            assert!(
                matches!(&result, Validation::Invalid(errors) if errors.len() == 1
                    && errors[0].field == Field::Price),
                "price {:?} should fail",
                bad
            );
        }
    }

    #[test]
    fn quantity_zero_is_allowed_but_fractions_are_not() {
        assert!(matches!(
            validate(&draft("W", "T", "1", "0", "d")),
            Validation::Valid(_)
        ));
        assert!(matches!(
            validate(&draft("W", "T", "1", "3.7", "d")),
            Validation::Invalid(_)
        ));
    }

    #[test]
    fn whitespace_only_text_counts_as_empty() {
        let result = validate(&draft("   ", "T", "1", "1", "\t"));
        match result {
            Validation::Invalid(errors) => {
                let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec![Field::Name, Field::Description]);
            }
            Validation::Valid(_) => panic!("expected invalid"),
        }
    }
}
