//! Aggregate views over the product list: summary tallies, per-product stock
//! levels, and the two chart datasets. All pure; rendering lives in the CLI.

use crate::model::Product;

/// Default cutoff below which a product counts as low stock. A presentation
/// threshold, not a stored flag; config can override it.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// How many products the stock chart shows.
pub const STOCK_CHART_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockLevel {
    pub fn of(quantity: u32, threshold: u32) -> Self {
        if quantity == 0 {
            StockLevel::OutOfStock
        } else if quantity < threshold {
            StockLevel::LowStock
        } else {
            StockLevel::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::OutOfStock => "Out of Stock",
            StockLevel::LowStock => "Low Stock",
            StockLevel::InStock => "In Stock",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total_products: usize,
    pub total_value: f64,
    pub low_stock: usize,
    pub total_units: u64,
}

pub fn summary(products: &[Product], threshold: u32) -> Summary {
    Summary {
        total_products: products.len(),
        total_value: products.iter().map(Product::value).sum(),
        low_stock: products.iter().filter(|p| p.quantity < threshold).count(),
        total_units: products.iter().map(|p| u64::from(p.quantity)).sum(),
    }
}

/// The stock chart dataset: the `limit` best-stocked products, most units
/// first. Ties keep insertion order.
pub fn top_by_quantity(products: &[Product], limit: usize) -> Vec<Product> {
    let mut ranked = products.to_vec();
    ranked.sort_by(|a, b| a.quantity.cmp(&b.quantity).reverse());
    ranked.truncate(limit);
    ranked
}

/// The category chart dataset: (category, product count) in first-seen order.
pub fn category_distribution(products: &[Product]) -> Vec<(String, usize)> {
    let mut slices: Vec<(String, usize)> = Vec::new();
    for product in products {
        match slices.iter_mut().find(|(name, _)| *name == product.category) {
            Some((_, count)) => *count += 1,
            None => slices.push((product.category.clone(), 1)),
        }
    }
    slices
}
