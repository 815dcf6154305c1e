pub mod dto;

pub use dto::{ProductDto, SalesRecord};
