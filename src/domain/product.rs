/// Represents a product in the catalog.
///
/// # Actor Framework
/// This struct implements the [`Entity`](crate::actor_framework::Entity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::actor_framework::ResourceActor).
/// Its identifier is the product `code`.
///
/// No validation happens at construction: negative prices and stock are accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub(crate) code: String,
    name: String,
    price: f64,
    stock: i64,
    category: String,
}

/// Payload for creating a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub code: String,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
}

/// Payload for updating an existing product.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category: Option<String>,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `code` - Unique identifier within the catalog
    /// * `name` - Display name
    /// * `price` - Unit price
    /// * `stock` - Units on hand
    /// * `category` - Free-text category
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        stock: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
            stock,
            category: category.into(),
        }
    }

    pub fn code(&self) -> &str { &self.code }
    pub fn set_code(&mut self, code: impl Into<String>) { self.code = code.into(); }

    pub fn name(&self) -> &str { &self.name }
    pub fn set_name(&mut self, name: impl Into<String>) { self.name = name.into(); }

    pub fn price(&self) -> f64 { self.price }
    pub fn set_price(&mut self, price: f64) { self.price = price; }

    pub fn stock(&self) -> i64 { self.stock }
    pub fn set_stock(&mut self, stock: i64) { self.stock = stock; }

    pub fn category(&self) -> &str { &self.category }
    pub fn set_category(&mut self, category: impl Into<String>) { self.category = category.into(); }

    /// Adds a signed delta to the stock and returns the new level.
    ///
    /// Positive values replenish, negative values consume. There is no lower
    /// bound, so stock can go negative.
    pub fn adjust_stock(&mut self, delta: i64) -> i64 {
        self.stock += delta;
        self.stock
    }

    pub fn describe(&self) -> String {
        format!(
            "Code: {}, Name: {}, Price: {}, Stock: {}, Category: {}",
            self.code, self.name, self.price, self.stock, self.category
        )
    }
}

impl From<ProductCreate> for Product {
    fn from(params: ProductCreate) -> Self {
        Self::new(params.code, params.name, params.price, params.stock, params.category)
    }
}
