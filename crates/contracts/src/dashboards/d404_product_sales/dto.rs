use crate::shared::calendar::CalendarDate;
use serde::{Deserialize, Serialize};

/// One weekly sales observation for a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    /// Closing day of the week
    pub week_ending: CalendarDate,
    pub retail_sales: f64,
    pub wholesale_sales: f64,
    pub units_sold: u64,
    /// May be negative
    pub retailer_margin: f64,
}

/// Product as delivered by the sales data source.
///
/// Unknown fields (brand, retailer, details, reviews, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// URI or path of the product picture
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sales: Vec<SalesRecord>,
}

impl ProductDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Product title must not be empty".into());
        }

        for record in &self.sales {
            record
                .validate()
                .map_err(|e| format!("{}: {}", self.title, e))?;
        }

        Ok(())
    }
}

impl SalesRecord {
    pub fn validate(&self) -> Result<(), String> {
        let week = self.week_ending;
        if !self.retail_sales.is_finite() || self.retail_sales < 0.0 {
            return Err(format!("week {}: invalid retailSales {}", week, self.retail_sales));
        }
        if !self.wholesale_sales.is_finite() || self.wholesale_sales < 0.0 {
            return Err(format!(
                "week {}: invalid wholesaleSales {}",
                week, self.wholesale_sales
            ));
        }
        if !self.retailer_margin.is_finite() {
            return Err(format!(
                "week {}: invalid retailerMargin {}",
                week, self.retailer_margin
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {
            "id": "B007TIE0GQ",
            "title": "Shark Ninja",
            "image": "https://images-na.ssl-images-amazon.com/images/I/51h-a5IaHeL.jpg",
            "subtitle": "Magic Bullet NutriBullet Pro",
            "brand": "Nutribullet",
            "reviews": [{ "customer": "Anonymous", "review": "Works", "score": 5 }],
            "retailer": "Amazon",
            "details": ["Kitchen"],
            "tags": ["Pantry", "Obsolete"],
            "sales": [
                { "weekEnding": "2017-01-01", "retailSales": 348123, "wholesaleSales": 255721, "unitsSold": 887, "retailerMargin": 123294 },
                { "weekEnding": "2017-01-08", "retailSales": 434286, "wholesaleSales": 312158, "unitsSold": 1143, "retailerMargin": -2010 }
            ]
        }
    ]"#;

    #[test]
    fn test_payload_decodes_and_ignores_extra_fields() {
        let products: Vec<ProductDto> = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(products.len(), 1);

        let product = &products[0];
        assert_eq!(product.title, "Shark Ninja");
        assert_eq!(product.tags, vec!["Pantry", "Obsolete"]);
        assert_eq!(product.sales.len(), 2);
        assert_eq!(product.sales[1].week_ending.to_us_string(), "01-08-2017");
        assert_eq!(product.sales[1].retailer_margin, -2010.0);
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_malformed_date_is_rejected_at_decode() {
        let raw = r#"[{ "title": "X", "sales": [
            { "weekEnding": "01/08/2017", "retailSales": 1, "wholesaleSales": 1, "unitsSold": 1, "retailerMargin": 1 }
        ]}]"#;
        assert!(serde_json::from_str::<Vec<ProductDto>>(raw).is_err());
    }

    #[test]
    fn test_negative_units_are_rejected_at_decode() {
        let raw = r#"[{ "title": "X", "sales": [
            { "weekEnding": "2017-01-08", "retailSales": 1, "wholesaleSales": 1, "unitsSold": -4, "retailerMargin": 1 }
        ]}]"#;
        assert!(serde_json::from_str::<Vec<ProductDto>>(raw).is_err());
    }

    #[test]
    fn test_validate_rejects_negative_sales() {
        let mut products: Vec<ProductDto> = serde_json::from_str(PAYLOAD).unwrap();
        products[0].sales[0].wholesale_sales = -1.0;

        let err = products[0].validate().unwrap_err();
        assert!(err.contains("wholesaleSales"), "{err}");
        assert!(err.contains("2017-01-01"), "{err}");
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let mut products: Vec<ProductDto> = serde_json::from_str(PAYLOAD).unwrap();
        products[0].title = "  ".into();
        assert!(products[0].validate().is_err());
    }
}
