use chrono::{DateTime, Local};
use std::fmt::Write;

use super::Product;

/// Products selected by one user, with a derived total.
///
/// Products are held by value in insertion order and duplicates are allowed.
/// The total is recomputed from scratch after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    owner: String,
    products: Vec<Product>,
    total: f64,
    created_at: DateTime<Local>,
    status: String,
}

impl Cart {
    pub const DEFAULT_STATUS: &'static str = "Pending";

    pub fn new(owner: impl Into<String>) -> Self {
        Self::with_products(owner, Vec::new())
    }

    pub fn with_products(owner: impl Into<String>, products: Vec<Product>) -> Self {
        let mut cart = Self {
            owner: owner.into(),
            products,
            total: 0.0,
            created_at: Local::now(),
            status: Self::DEFAULT_STATUS.to_string(),
        };
        cart.recompute_total();
        cart
    }

    pub fn owner(&self) -> &str { &self.owner }
    pub fn set_owner(&mut self, owner: impl Into<String>) { self.owner = owner.into(); }

    pub fn products(&self) -> &[Product] { &self.products }

    /// Replaces the whole product sequence.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.recompute_total();
    }

    pub fn total(&self) -> f64 { self.total }

    pub fn created_at(&self) -> DateTime<Local> { self.created_at }
    pub fn set_created_at(&mut self, created_at: DateTime<Local>) { self.created_at = created_at; }

    pub fn status(&self) -> &str { &self.status }
    pub fn set_status(&mut self, status: impl Into<String>) { self.status = status.into(); }

    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }

    pub fn add_product(&mut self, product: Product) {
        self.products.push(product);
        self.recompute_total();
    }

    /// Removes the first product with a matching code.
    /// Returns `false` and leaves the cart untouched when no product matches.
    pub fn remove_product(&mut self, code: &str) -> bool {
        match self.products.iter().position(|p| p.code() == code) {
            Some(index) => {
                self.products.remove(index);
                self.recompute_total();
                true
            }
            None => false,
        }
    }

    pub fn recompute_total(&mut self) {
        self.total = self.products.iter().map(Product::price).sum();
    }

    pub fn describe(&self) -> String {
        let mut out = format!("User: {}, Total: {}, Status: {}\n", self.owner, self.total, self.status);
        out.push_str("Products:\n");
        for product in &self.products {
            let _ = writeln!(out, "  - {}", product.describe());
        }
        out
    }
}
