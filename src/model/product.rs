use serde::{Deserialize, Serialize};

/// Category name that stands for the whole catalog
pub const ALL_CATEGORY: &str = "all";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub title: String,
    pub price_cents: u64,
    pub image_url: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: String,
    pub product_count: u32,
}

/// Formats an amount of cents as a dollar string, e.g. `1234` as `$12.34`
pub fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}


#[cfg(test)]
mod tests {
    mod format_price_tests {
        use crate::model::product::format_price;

        /// Expect whole dollars to carry two zero cents
        #[test]
        fn test_format_price_whole_dollars() {
            assert_eq!(format_price(500), "$5.00");
        }

        /// Expect cents below ten to be zero padded
        #[test]
        fn test_format_price_pads_cents() {
            assert_eq!(format_price(1205), "$12.05");
        }

        /// Expect zero to format as zero dollars
        #[test]
        fn test_format_price_zero() {
            assert_eq!(format_price(0), "$0.00");
        }
    }
}
