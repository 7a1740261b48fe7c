pub mod event_form;
pub mod product;

pub use event_form::{CuotaCalculada, EventForm, Requerimientos, Ubicacion, DEFAULT_COORDINATES};
pub use product::Product;
