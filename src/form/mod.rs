pub mod controller;
pub mod cuota;
pub mod update;

pub use controller::{DuplicatePolicy, FormController};
pub use cuota::compute_cuota;
pub use update::{update_form, FormPatch};
