use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use validator::Validate;

/// Derived stock classification, computed from the current stock and the
/// low-stock threshold on read. Never stored.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StockLevel {
    /// No stock left
    Out,
    /// Above zero, at or below the threshold
    Low,
    /// Above the threshold, at or below twice the threshold
    Medium,
    /// Above twice the threshold
    High,
}

/// Direction of a stock adjustment
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StockDirection {
    /// Increase stock
    Add,
    /// Decrease stock, clamped at zero
    Subtract,
}

/// Product entity - one tracked inventory record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, assigned by the repository on creation
    pub id: i64,
    /// Product name
    pub name: String,
    /// Stock Keeping Unit (display/search key, uniqueness not enforced)
    pub sku: String,
    /// Unit price
    pub price: f64,
    /// Quantity on hand. Invariant: never negative
    pub current_stock: i64,
    /// Boundary between "low" and "normal" stock
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,
    /// Stamped by the repository on every create and update
    pub last_updated: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub sku: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    #[serde(default)]
    pub current_stock: i64,
    #[validate(range(min = 0))]
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,
}

/// DTO for updating an existing product
///
/// Provided fields merge over the stored record; the id cannot be changed
/// and `last_updated` is restamped by the repository.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub sku: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    pub current_stock: Option<i64>,
    #[validate(range(min = 0))]
    pub low_stock_threshold: Option<i64>,
}

/// Stock adjustment request
///
/// `amount` is validated by the service, not here: a non-positive amount
/// must surface as `InvalidAmount`, not as a body validation failure.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustment {
    /// Whether to add or subtract
    pub direction: StockDirection,
    /// Number of units, must be positive
    pub amount: i64,
    /// Free-form note for audit/display; logged, never persisted
    #[validate(length(max = 500))]
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_low_stock_threshold() -> i64 {
    10
}

impl Product {
    /// Build a stored record from a create request and an assigned id
    pub fn new(id: i64, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            sku: input.sku,
            price: input.price,
            current_stock: input.current_stock,
            low_stock_threshold: input.low_stock_threshold,
            last_updated: Utc::now(),
        }
    }

    /// Apply updates from UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(sku) = update.sku {
            self.sku = sku;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(current_stock) = update.current_stock {
            self.current_stock = current_stock;
        }
        if let Some(low_stock_threshold) = update.low_stock_threshold {
            self.low_stock_threshold = low_stock_threshold;
        }
        self.last_updated = Utc::now();
    }

    /// Classify the current stock against the threshold
    pub fn stock_level(&self) -> StockLevel {
        if self.current_stock == 0 {
            StockLevel::Out
        } else if self.current_stock <= self.low_stock_threshold {
            StockLevel::Low
        } else if self.current_stock <= self.low_stock_threshold * 2 {
            StockLevel::Medium
        } else {
            StockLevel::High
        }
    }

    /// Value of the on-hand stock at the current price
    pub fn inventory_value(&self) -> f64 {
        self.price * self.current_stock as f64
    }
}
