use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::models::Product;

/// Fallback map point used until the user picks a location.
pub const DEFAULT_COORDINATES: [f64; 2] = [14.6349, -90.5069];

/// The in-progress event creation form. A flat value object owned by the
/// hosting screen: replaced wholesale on each edit, never mutated in place by
/// nested components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventForm {
    /// URI of the selected image; empty string means unset.
    pub imagen: String,

    pub nombre: String,

    pub descripcion: String,

    pub duracion: String,

    pub tipo: String,

    pub notas_adicionales: String,

    pub fecha_inicio: Option<DateTime<Utc>>,

    pub fecha_fin: Option<DateTime<Utc>>,

    pub ubicacion: Ubicacion,

    /// Insertion order is display order.
    pub productos: Vec<Product>,

    /// Numeric string; empty while the field is being edited.
    pub cantidad_invitados: String,

    pub requerimientos: Requerimientos,

    pub requires_payment: bool,

    pub cuota_amount: String,

    /// Derived from `productos` and `cantidad_invitados`; never authored by
    /// the user. The hosting controller recomputes it after every relevant
    /// mutation.
    pub cuota_calculada: CuotaCalculada,
}

/// Picked map location. Coordinates are `[lat, lng]`; keep that ordering on
/// both the producer and consumer side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ubicacion {
    pub coordinates: [f64; 2],
    pub address: String,
}

/// Free-text guest constraints. No validation by design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Requerimientos {
    pub codigo_vestimenta: String,
    pub alimentacion: String,
    pub edad_minima: String,
    pub llevar: String,
}

/// Derived due amounts. See [`crate::form::compute_cuota`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CuotaCalculada {
    pub total_productos: f64,
    pub cuota_por_persona: f64,
    pub cantidad_personas: u32,
}

impl EventForm {
    /// Empty form for a freshly mounted creation screen. Deterministic:
    /// repeated calls are deep-equal and share no state.
    pub fn new() -> Self {
        Self {
            imagen: String::new(),
            nombre: String::new(),
            descripcion: String::new(),
            duracion: String::new(),
            tipo: String::new(),
            notas_adicionales: String::new(),
            fecha_inicio: None,
            fecha_fin: None,
            ubicacion: Ubicacion::default(),
            productos: Vec::new(),
            cantidad_invitados: String::new(),
            requerimientos: Requerimientos::default(),
            requires_payment: false,
            cuota_amount: String::new(),
            cuota_calculada: CuotaCalculada::default(),
        }
    }

    /// Submission gate. Field updates stay permissive so mid-edit states are
    /// representable; this is where the form must be whole.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.nombre.trim().is_empty() {
            return Err(FormError::MissingField("nombre"));
        }

        if let (Some(inicio), Some(fin)) = (self.fecha_inicio, self.fecha_fin) {
            if fin < inicio {
                return Err(FormError::DateRangeInverted);
            }
        }

        if !self.cantidad_invitados.is_empty()
            && self.cantidad_invitados.trim().parse::<u32>().is_err()
        {
            return Err(FormError::InvalidValue {
                field: "cantidadInvitados".to_string(),
                reason: "expected a non-negative integer".to_string(),
            });
        }

        for producto in &self.productos {
            if !producto.price.is_finite() || producto.price < 0.0 {
                return Err(FormError::NegativeAmount {
                    field: format!("productos[{}].price", producto.external_id),
                });
            }
        }

        if self.requires_payment {
            let monto = self.cuota_amount.trim();
            if monto.is_empty() {
                return Err(FormError::MissingField("cuotaAmount"));
            }
            match monto.parse::<f64>() {
                Ok(valor) if valor >= 0.0 => {}
                _ => {
                    return Err(FormError::InvalidValue {
                        field: "cuotaAmount".to_string(),
                        reason: "expected a non-negative amount".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for EventForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for Ubicacion {
    fn default() -> Self {
        Self {
            coordinates: DEFAULT_COORDINATES,
            address: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_form_uses_fallback_coordinates() {
        let form = EventForm::new();
        assert_eq!(form.ubicacion.coordinates, DEFAULT_COORDINATES);
        assert!(form.ubicacion.address.is_empty());
    }

    #[test]
    fn test_validate_rejects_inverted_dates() {
        let mut form = EventForm::new();
        form.nombre = "Cumpleaños".to_string();
        form.fecha_inicio = Some(Utc.with_ymd_and_hms(2026, 9, 12, 18, 0, 0).unwrap());
        form.fecha_fin = Some(Utc.with_ymd_and_hms(2026, 9, 12, 15, 0, 0).unwrap());

        assert_eq!(form.validate(), Err(FormError::DateRangeInverted));
    }

    #[test]
    fn test_validate_requires_cuota_amount_when_payment_enabled() {
        let mut form = EventForm::new();
        form.nombre = "Asado".to_string();
        form.requires_payment = true;

        assert_eq!(form.validate(), Err(FormError::MissingField("cuotaAmount")));

        form.cuota_amount = "150".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_wire_keys_are_camel_case() {
        let json = serde_json::to_string(&EventForm::new()).unwrap();
        assert!(json.contains("notasAdicionales"));
        assert!(json.contains("cantidadInvitados"));
        assert!(json.contains("requiresPayment"));
        assert!(json.contains("cuotaCalculada"));
    }
}
