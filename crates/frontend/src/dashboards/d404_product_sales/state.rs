use super::api::{self, FetchError};
use crate::config::AppConfig;
use contracts::dashboards::d404_product_sales::{ProductDto, SalesRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Lifecycle of the sales data retrieval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Ties a fetch resolution to the `load` that started it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Result of one fetch task
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Success(Vec<ProductDto>),
    Failure(FetchError),
}

impl From<Result<Vec<ProductDto>, FetchError>> for FetchOutcome {
    fn from(result: Result<Vec<ProductDto>, FetchError>) -> Self {
        match result {
            Ok(products) => FetchOutcome::Success(products),
            Err(e) => FetchOutcome::Failure(e),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SalesState {
    products: Vec<ProductDto>,
    status: FetchStatus,
    error: Option<FetchError>,
    generation: u64,
}

impl SalesState {
    /// Start a new fetch. Any fetch still in flight is superseded.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.status = FetchStatus::Loading;
        LoadTicket(self.generation)
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when a newer load has
    /// been issued since. A failure keeps the previously fetched products.
    pub fn resolve(&mut self, ticket: LoadTicket, outcome: FetchOutcome) -> bool {
        if ticket.0 != self.generation {
            log::debug!(
                "Dropping superseded sales fetch #{} (current #{})",
                ticket.0,
                self.generation
            );
            return false;
        }

        match outcome {
            FetchOutcome::Success(products) => {
                log::info!(
                    "Loaded {} products, {} sales records for the first",
                    products.len(),
                    products.first().map(|p| p.sales.len()).unwrap_or(0)
                );
                self.products = products;
                self.status = FetchStatus::Succeeded;
                self.error = None;
            }
            FetchOutcome::Failure(err) => {
                log::error!("Failed to fetch sales data: {}", err);
                self.status = FetchStatus::Failed;
                self.error = Some(err);
            }
        }
        true
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn products(&self) -> &[ProductDto] {
        &self.products
    }

    /// Only the first product is displayed
    pub fn product(&self) -> Option<&ProductDto> {
        self.products.first()
    }

    pub fn records(&self) -> &[SalesRecord] {
        self.product().map(|p| p.sales.as_slice()).unwrap_or(&[])
    }
}

/// Reactive handle to the sales state.
///
/// Created once in `App` and handed to the dashboard through context.
#[derive(Clone, Copy)]
pub struct SalesStore {
    state: RwSignal<SalesState>,
    data_url: StoredValue<String>,
}

impl SalesStore {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: RwSignal::new(SalesState::default()),
            data_url: StoredValue::new(config.data_url.clone()),
        }
    }

    /// Read-only view of the current state
    pub fn snapshot(&self) -> ReadSignal<SalesState> {
        self.state.read_only()
    }

    /// Fetch the sales payload in the background.
    pub fn load(&self) {
        let Some(ticket) = self.state.try_update(SalesState::begin_load) else {
            return;
        };

        let url = self.data_url.get_value();
        log::debug!("Fetching sales data #{} from {}", ticket.0, url);

        let state = self.state;
        spawn_local(async move {
            let outcome = FetchOutcome::from(api::fetch_products(&url).await);
            state.update(|s| {
                s.resolve(ticket, outcome);
            });
        });
    }
}
