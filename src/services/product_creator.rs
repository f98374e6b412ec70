use products_api::Product;
use tracing::{debug, error};

use crate::api::ProductApi;
use crate::domain::{ListState, ProductForm};
use crate::services::ListLoader;
use crate::view::View;

pub const INVALID_FORM_MESSAGE: &str = "Please fill in all fields correctly.";
pub const ADD_FAILED_MESSAGE: &str = "Failed to add product. Please check your backend connection.";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The form did not validate; nothing was sent
    Rejected,
    /// The backend refused the product or could not be reached
    Failed,
    /// The product was stored and the list reloaded
    Created {
        product: Option<Product>,
        list: ListState,
    },
}

impl SubmitOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created { .. })
    }
}

pub struct ProductCreator<'a, A: ProductApi> {
    api: &'a A,
    loader: ListLoader<'a, A>,
}

impl<'a, A: ProductApi> ProductCreator<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            loader: ListLoader::new(api),
        }
    }

    pub fn loader(&self) -> &ListLoader<'a, A> {
        &self.loader
    }

    /// Validate the form and send it. On success the form is cleared and the
    /// list is loaded again; on failure the form keeps what the user typed.
    ///
    /// Takes `&mut self` so a second submission cannot start while one is pending.
    pub fn submit<V: View>(&mut self, form: &mut ProductForm, view: &mut V) -> SubmitOutcome {
        let new_product = match form.validate() {
            Ok(product) => product,
            Err(e) => {
                debug!(reason = %e, "rejected product form");
                view.alert(&format!("{} ({})", INVALID_FORM_MESSAGE, e));
                return SubmitOutcome::Rejected;
            }
        };

        match self.api.create(&new_product) {
            Ok(product) => {
                form.reset();
                let list = self.loader.load(view);
                SubmitOutcome::Created { product, list }
            }
            Err(e) => {
                error!(error = %e, name = %new_product.name, "Error adding product");
                view.alert(ADD_FAILED_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }
}
