use serde_json::Value;
use tracing::debug;

use crate::error::FormError;
use crate::form::cuota::compute_cuota;
use crate::form::update::FormPatch;
use crate::models::{EventForm, Product};

/// What to do when a product with an already-present `external_id` is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Accumulate the quantity onto the existing line.
    #[default]
    MergeQuantities,
    /// Keep a distinct cart line per add.
    AppendLine,
}

/// Owns the single form value on behalf of the hosting screen and serializes
/// every mutation through it. Whenever a mutation touches `productos` or
/// `cantidadInvitados`, the derived `cuota_calculada` is recomputed before
/// the call returns, so the invariant between the two is never observable as
/// broken.
#[derive(Debug, Clone)]
pub struct FormController {
    form: EventForm,
    duplicate_policy: DuplicatePolicy,
}

impl FormController {
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    pub fn with_policy(duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            form: EventForm::new(),
            duplicate_policy,
        }
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    pub fn into_form(self) -> EventForm {
        self.form
    }

    /// Applies a `(key, value)` edit from the UI. A rejected edit leaves the
    /// form exactly as it was.
    pub fn update(&mut self, key: &str, value: Value) -> Result<(), FormError> {
        let patch = FormPatch::from_key_value(key, value)?;
        let recompute = patch.affects_cuota();

        self.form = self.form.clone().apply(patch);

        if recompute {
            self.recompute();
        }

        Ok(())
    }

    /// Adds a product line, honoring the duplicate policy. Negative prices
    /// are rejected at this entry point so the derivation stays total.
    pub fn add_product(&mut self, product: Product) -> Result<(), FormError> {
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(FormError::NegativeAmount {
                field: format!("productos[{}].price", product.external_id),
            });
        }

        match self.duplicate_policy {
            DuplicatePolicy::MergeQuantities => {
                if let Some(line) = self
                    .form
                    .productos
                    .iter_mut()
                    .find(|p| p.external_id == product.external_id)
                {
                    line.quantity += product.quantity;
                } else {
                    self.form.productos.push(product);
                }
            }
            DuplicatePolicy::AppendLine => self.form.productos.push(product),
        }

        self.recompute();
        Ok(())
    }

    /// Removes every line with the given id. Returns whether anything was
    /// removed.
    pub fn remove_product(&mut self, external_id: &str) -> bool {
        let before = self.form.productos.len();
        self.form.productos.retain(|p| p.external_id != external_id);

        let removed = self.form.productos.len() != before;
        if removed {
            self.recompute();
        }
        removed
    }

    /// Sets the quantity of the first line with the given id; zero removes
    /// the line. Returns whether a line was found.
    pub fn set_quantity(&mut self, external_id: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove_product(external_id);
        }

        let Some(line) = self
            .form
            .productos
            .iter_mut()
            .find(|p| p.external_id == external_id)
        else {
            return false;
        };

        line.quantity = quantity;
        self.recompute();
        true
    }

    /// Discards the form, as when the user navigates away from the creation
    /// screen.
    pub fn reset(&mut self) {
        self.form = EventForm::new();
    }

    pub fn validate(&self) -> Result<(), FormError> {
        self.form.validate()
    }

    fn recompute(&mut self) {
        self.form.cuota_calculada =
            compute_cuota(&self.form.productos, &self.form.cantidad_invitados);

        debug!(
            "Recomputed cuota: total {} across {} personas",
            self.form.cuota_calculada.total_productos,
            self.form.cuota_calculada.cantidad_personas
        );
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
