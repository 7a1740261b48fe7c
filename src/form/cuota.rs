use crate::models::{CuotaCalculada, Product};

/// Recomputes the derived due amounts from the product list and the guest
/// count field. Total and pure: a guest count that does not parse, or parses
/// to zero, yields zero people and a zero per-person due rather than an
/// error.
pub fn compute_cuota(productos: &[Product], cantidad_invitados: &str) -> CuotaCalculada {
    let cantidad_personas = cantidad_invitados.trim().parse::<u32>().unwrap_or(0);

    let total_productos: f64 = productos.iter().map(Product::subtotal).sum();

    let cuota_por_persona = if cantidad_personas > 0 {
        total_productos / f64::from(cantidad_personas)
    } else {
        0.0
    };

    CuotaCalculada {
        total_productos,
        cuota_por_persona,
        cantidad_personas,
    }
}
