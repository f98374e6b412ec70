use tracing::error;

use crate::api::ProductApi;
use crate::domain::ListState;
use crate::view::View;

pub struct ListLoader<'a, A: ProductApi> {
    api: &'a A,
}

impl<'a, A: ProductApi> ListLoader<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Show the loading placeholder, fetch the collection and render the outcome.
    /// Failures end up in the view as `ListState::Error`; nothing is retried.
    pub fn load<V: View>(&self, view: &mut V) -> ListState {
        view.render(&ListState::Loading);

        let state = match self.api.list() {
            Ok(products) => ListState::from_products(&products),
            Err(e) => {
                error!(error = %e, "Error fetching products");
                ListState::load_failed()
            }
        };

        view.render(&state);
        state
    }
}
