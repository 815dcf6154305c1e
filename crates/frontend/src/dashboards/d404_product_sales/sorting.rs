use crate::shared::list_utils::{sorted_list, SortDirection, SortValue, Sortable};
use contracts::dashboards::d404_product_sales::SalesRecord;

/// Column of the sales table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    WeekEnding,
    RetailSales,
    WholesaleSales,
    UnitsSold,
    RetailerMargin,
}

impl SortKey {
    /// Table column order
    pub const ALL: [SortKey; 5] = [
        SortKey::WeekEnding,
        SortKey::RetailSales,
        SortKey::WholesaleSales,
        SortKey::UnitsSold,
        SortKey::RetailerMargin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::WeekEnding => "Week Ending",
            SortKey::RetailSales => "Retail Sales",
            SortKey::WholesaleSales => "Wholesale Sales",
            SortKey::UnitsSold => "Units Sold",
            SortKey::RetailerMargin => "Retailer Margin",
        }
    }
}

/// Current ordering of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Ordering after the user asks to sort by `key`.
    ///
    /// Only a repeated request on a column that is already ascending flips it
    /// to descending; everything else starts ascending.
    pub fn request(current: Option<SortConfig>, key: SortKey) -> SortConfig {
        let direction = match current {
            Some(current) if current.key == key && current.direction == SortDirection::Asc => {
                SortDirection::Desc
            }
            _ => SortDirection::Asc,
        };
        SortConfig { key, direction }
    }
}

impl Sortable for SalesRecord {
    type Key = SortKey;

    fn sort_value(&self, key: SortKey) -> SortValue {
        match key {
            // ISO form, so text order is calendar order
            SortKey::WeekEnding => SortValue::Text(self.week_ending.to_string()),
            SortKey::RetailSales => SortValue::Number(self.retail_sales),
            SortKey::WholesaleSales => SortValue::Number(self.wholesale_sales),
            SortKey::UnitsSold => SortValue::Number(self.units_sold as f64),
            SortKey::RetailerMargin => SortValue::Number(self.retailer_margin),
        }
    }
}

/// Records in presentation order. `None` keeps fetch order.
pub fn sort_records(records: &[SalesRecord], sort: Option<SortConfig>) -> Vec<SalesRecord> {
    match sort {
        Some(config) => sorted_list(records, config.key, config.direction),
        None => records.to_vec(),
    }
}
