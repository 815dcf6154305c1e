pub mod aggregation;
pub mod api;
pub mod sorting;
pub mod state;
pub mod ui;

pub use state::SalesStore;
pub use ui::ProductSalesDashboard;
