pub mod dashboard;
pub mod product_details;
pub mod sales_chart;
pub mod sales_table;

pub use dashboard::ProductSalesDashboard;
