use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FormError;
use crate::models::{EventForm, Product, Requerimientos, Ubicacion};

/// A single-field edit of the event form, typed at the UI boundary.
///
/// The UI hands over `(field key, JSON value)` pairs; parsing them into a
/// patch rejects unknown keys and wrongly shaped values before anything
/// touches the form. `cuotaCalculada` has no variant on purpose: it is
/// derived and never authored by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum FormPatch {
    Imagen(String),
    Nombre(String),
    Descripcion(String),
    Duracion(String),
    Tipo(String),
    NotasAdicionales(String),
    FechaInicio(Option<DateTime<Utc>>),
    FechaFin(Option<DateTime<Utc>>),
    Ubicacion(Ubicacion),
    UbicacionAddress(String),
    UbicacionCoordinates([f64; 2]),
    Productos(Vec<Product>),
    CantidadInvitados(String),
    Requerimientos(Requerimientos),
    CodigoVestimenta(String),
    Alimentacion(String),
    EdadMinima(String),
    Llevar(String),
    RequiresPayment(bool),
    CuotaAmount(String),
}

impl FormPatch {
    /// Parses a `(key, value)` edit coming from the UI. Keys are the
    /// camelCase wire names; nested edits use dotted keys
    /// (`requerimientos.llevar`, `ubicacion.address`).
    pub fn from_key_value(key: &str, value: Value) -> Result<Self, FormError> {
        let patch = match key {
            "imagen" => Self::Imagen(parse(key, value)?),
            "nombre" => Self::Nombre(parse(key, value)?),
            "descripcion" => Self::Descripcion(parse(key, value)?),
            "duracion" => Self::Duracion(parse(key, value)?),
            "tipo" => Self::Tipo(parse(key, value)?),
            "notasAdicionales" => Self::NotasAdicionales(parse(key, value)?),
            "fechaInicio" => Self::FechaInicio(parse(key, value)?),
            "fechaFin" => Self::FechaFin(parse(key, value)?),
            "ubicacion" => Self::Ubicacion(parse(key, value)?),
            "ubicacion.address" => Self::UbicacionAddress(parse(key, value)?),
            "ubicacion.coordinates" => Self::UbicacionCoordinates(parse(key, value)?),
            "productos" => {
                let productos: Vec<Product> = parse(key, value)?;
                reject_negative_prices(&productos)?;
                Self::Productos(productos)
            }
            "cantidadInvitados" => {
                let cantidad: String = parse(key, value)?;
                if !cantidad.is_empty() && cantidad.trim().parse::<u32>().is_err() {
                    return Err(FormError::InvalidValue {
                        field: key.to_string(),
                        reason: "expected a non-negative integer".to_string(),
                    });
                }
                Self::CantidadInvitados(cantidad)
            }
            "requerimientos" => Self::Requerimientos(parse(key, value)?),
            "requerimientos.codigoVestimenta" => Self::CodigoVestimenta(parse(key, value)?),
            "requerimientos.alimentacion" => Self::Alimentacion(parse(key, value)?),
            "requerimientos.edadMinima" => Self::EdadMinima(parse(key, value)?),
            "requerimientos.llevar" => Self::Llevar(parse(key, value)?),
            "requiresPayment" => Self::RequiresPayment(parse(key, value)?),
            "cuotaAmount" => Self::CuotaAmount(parse(key, value)?),
            _ => return Err(FormError::InvalidField(key.to_string())),
        };

        Ok(patch)
    }

    /// Whether applying this patch invalidates `cuota_calculada`.
    pub fn affects_cuota(&self) -> bool {
        matches!(self, Self::Productos(_) | Self::CantidadInvitados(_))
    }
}

fn parse<T: DeserializeOwned>(field: &str, value: Value) -> Result<T, FormError> {
    serde_json::from_value(value).map_err(|err| FormError::InvalidValue {
        field: field.to_string(),
        reason: err.to_string(),
    })
}

fn reject_negative_prices(productos: &[Product]) -> Result<(), FormError> {
    for producto in productos {
        if !producto.price.is_finite() || producto.price < 0.0 {
            return Err(FormError::NegativeAmount {
                field: format!("productos[{}].price", producto.external_id),
            });
        }
    }
    Ok(())
}

impl EventForm {
    /// Applies one patch, replacing exactly that field. Pure: no
    /// recomputation happens here; refreshing `cuota_calculada` is the
    /// controller's explicit follow-up step.
    #[must_use]
    pub fn apply(mut self, patch: FormPatch) -> EventForm {
        match patch {
            FormPatch::Imagen(v) => self.imagen = v,
            FormPatch::Nombre(v) => self.nombre = v,
            FormPatch::Descripcion(v) => self.descripcion = v,
            FormPatch::Duracion(v) => self.duracion = v,
            FormPatch::Tipo(v) => self.tipo = v,
            FormPatch::NotasAdicionales(v) => self.notas_adicionales = v,
            FormPatch::FechaInicio(v) => self.fecha_inicio = v,
            FormPatch::FechaFin(v) => self.fecha_fin = v,
            FormPatch::Ubicacion(v) => self.ubicacion = v,
            FormPatch::UbicacionAddress(v) => self.ubicacion.address = v,
            FormPatch::UbicacionCoordinates(v) => self.ubicacion.coordinates = v,
            FormPatch::Productos(v) => self.productos = v,
            FormPatch::CantidadInvitados(v) => self.cantidad_invitados = v,
            FormPatch::Requerimientos(v) => self.requerimientos = v,
            FormPatch::CodigoVestimenta(v) => self.requerimientos.codigo_vestimenta = v,
            FormPatch::Alimentacion(v) => self.requerimientos.alimentacion = v,
            FormPatch::EdadMinima(v) => self.requerimientos.edad_minima = v,
            FormPatch::Llevar(v) => self.requerimientos.llevar = v,
            FormPatch::RequiresPayment(v) => self.requires_payment = v,
            FormPatch::CuotaAmount(v) => self.cuota_amount = v,
        }

        self
    }
}

/// Single update entry point: parse the edit, then apply it to a copy of the
/// form. On error the caller still holds the untouched original.
pub fn update_form(form: &EventForm, key: &str, value: Value) -> Result<EventForm, FormError> {
    let patch = FormPatch::from_key_value(key, value)?;
    Ok(form.clone().apply(patch))
}
