use storefront_domain::place::{Prediction, is_autocomplete_query};

use crate::domain::repository::AutocompletePort;
use crate::error::OrdersServiceError;

/// Proxy an address autocomplete query to the map provider.
///
/// Inputs of two characters or fewer answer empty without reaching the provider.
pub struct AutocompleteAddressUseCase<P: AutocompletePort> {
    pub port: P,
}

impl<P: AutocompletePort> AutocompleteAddressUseCase<P> {
    pub async fn execute(&self, input: &str) -> Result<Vec<Prediction>, OrdersServiceError> {
        if !is_autocomplete_query(input) {
            return Ok(Vec::new());
        }
        self.port.autocomplete(input).await
    }
}
