//! Filtered, sorted views over product snapshots
//!
//! Pure functions: the source collection is never mutated, every step
//! works on a copy. Filtering runs before sorting.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};

use crate::models::Product;

/// Stock status filter for product views
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
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatusFilter {
    /// No status filtering
    #[default]
    All,
    /// Stock above the low-stock threshold
    Normal,
    /// Stock above zero, at or below the threshold
    Low,
    /// Zero stock
    Out,
}

/// Sortable product fields
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
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortField {
    #[default]
    Name,
    Sku,
    Price,
    CurrentStock,
}

/// Sort direction
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
    Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// A sort choice: field plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ToSchema)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Ascending sort on the given field
    pub fn new(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    /// Pick a sort field the way a column header click does: picking the
    /// active field flips the direction, a new field starts ascending.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self::new(field)
        }
    }
}

/// Query parameters for the filtered, sorted product list
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ProductQuery {
    /// Substring to match against name or SKU (case-insensitive)
    pub search: Option<String>,
    /// Stock status to keep
    #[serde(default)]
    pub status: StatusFilter,
    /// Field to sort by
    #[serde(default)]
    pub sort_by: SortField,
    /// Sort direction
    #[serde(default)]
    pub sort_dir: SortDirection,
}

/// Case-insensitive substring filter against name or SKU
///
/// An empty or whitespace-only term returns the snapshot unfiltered.
pub fn search(products: &[Product], term: &str) -> Vec<Product> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&term) || p.sku.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Keep only products matching the given stock status
pub fn filter_by_status(products: &[Product], status: StatusFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| match status {
            StatusFilter::All => true,
            StatusFilter::Normal => p.current_stock > p.low_stock_threshold,
            StatusFilter::Low => {
                p.current_stock > 0 && p.current_stock <= p.low_stock_threshold
            }
            StatusFilter::Out => p.current_stock == 0,
        })
        .cloned()
        .collect()
}

/// Stable sort by the chosen field and direction
///
/// String fields compare case-insensitively; equal keys keep their input
/// order in either direction.
pub fn sort(products: &[Product], spec: SortSpec) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match spec.field {
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Sku => a.sku.to_lowercase().cmp(&b.sku.to_lowercase()),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::CurrentStock => a.current_stock.cmp(&b.current_stock),
        };
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Run the full pipeline: search filter, then status filter, then sort
pub fn apply(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    let filtered = match query.search {
        Some(ref term) => search(products, term),
        None => products.to_vec(),
    };
    let filtered = filter_by_status(&filtered, query.status);
    sort(
        &filtered,
        SortSpec {
            field: query.sort_by,
            direction: query.sort_dir,
        },
    )
}
