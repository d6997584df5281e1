//! Products Data

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub code: String,
    pub price: u64,
}

/// Sparse product update. `None` leaves the column untouched; `Some("")`
/// is written as an empty code.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub code: Option<String>,
    pub price: Option<u64>,
}

impl ProductPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.price.is_none()
    }
}

/// Product listing filter. Supplied filters are ANDed together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Case-sensitive substring of `code`.
    pub code: Option<String>,

    /// Inclusive lower bound on `price`.
    pub min_price: Option<u64>,
}

impl ProductFilter {
    /// Build a filter from raw query string values.
    ///
    /// An empty `code` disables the code filter, and a `price` that is not a
    /// non-negative integer disables the price filter.
    #[must_use]
    pub fn from_query(code: Option<&str>, price: Option<&str>) -> Self {
        Self {
            code: code.filter(|code| !code.is_empty()).map(ToOwned::to_owned),
            min_price: price.and_then(|price| price.trim().parse::<u64>().ok()),
        }
    }
}
