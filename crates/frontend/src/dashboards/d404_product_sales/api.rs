use contracts::dashboards::d404_product_sales::ProductDto;
use gloo_net::http::Request;

/// Everything that can go wrong while retrieving the sales payload
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {status}")]
    HttpStatus { status: u16 },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Invalid sales data: {0}")]
    Invalid(String),
}

/// Получить список продуктов с продажами
pub async fn fetch_products(url: &str) -> Result<Vec<ProductDto>, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::HttpStatus {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    decode_products(&body)
}

/// Decode and validate the payload body.
pub fn decode_products(body: &str) -> Result<Vec<ProductDto>, FetchError> {
    let products: Vec<ProductDto> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    for product in &products {
        product.validate().map_err(FetchError::Invalid)?;
    }

    Ok(products)
}
