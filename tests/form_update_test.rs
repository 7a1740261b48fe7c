use planea::error::FormError;
use planea::form::update_form;
use planea::models::{EventForm, Product, DEFAULT_COORDINATES};
use serde_json::json;

fn producto(id: &str, price: f64, quantity: u32) -> Product {
    Product {
        external_id: id.to_string(),
        name: format!("Producto {}", id),
        price,
        quantity,
        ..Product::default()
    }
}

#[test]
fn test_initial_form_is_deterministic_and_unshared() {
    let a = EventForm::new();
    let mut b = EventForm::new();

    assert_eq!(a, b);

    b.productos.push(producto("p-1", 10.0, 1));
    assert!(a.productos.is_empty());
}

#[test]
fn test_update_replaces_exactly_one_field() {
    let form = EventForm::new();

    let updated = update_form(&form, "nombre", json!("Asado de fin de año")).unwrap();

    let mut expected = form.clone();
    expected.nombre = "Asado de fin de año".to_string();
    assert_eq!(updated, expected);
}

#[test]
fn test_unknown_key_is_rejected_and_form_untouched() {
    let form = EventForm::new();

    let result = update_form(&form, "presupuesto", json!(1000));

    assert_eq!(
        result,
        Err(FormError::InvalidField("presupuesto".to_string()))
    );
    assert_eq!(form, EventForm::new());
}

#[test]
fn test_derived_field_cannot_be_authored() {
    let form = EventForm::new();

    let result = update_form(&form, "cuotaCalculada", json!({"totalProductos": 1.0}));

    assert!(matches!(result, Err(FormError::InvalidField(_))));
}

#[test]
fn test_wrong_shape_value_is_rejected() {
    let form = EventForm::new();

    let result = update_form(&form, "requiresPayment", json!("sí"));

    assert!(matches!(
        result,
        Err(FormError::InvalidValue { field, .. }) if field == "requiresPayment"
    ));
}

#[test]
fn test_cantidad_invitados_must_be_numeric_or_empty() {
    let form = EventForm::new();

    assert!(update_form(&form, "cantidadInvitados", json!("12")).is_ok());
    assert!(update_form(&form, "cantidadInvitados", json!("")).is_ok());
    assert!(matches!(
        update_form(&form, "cantidadInvitados", json!("doce")),
        Err(FormError::InvalidValue { .. })
    ));
    assert!(matches!(
        update_form(&form, "cantidadInvitados", json!("-4")),
        Err(FormError::InvalidValue { .. })
    ));
}

#[test]
fn test_nested_requerimientos_keys() {
    let form = EventForm::new();

    let updated = update_form(&form, "requerimientos.codigoVestimenta", json!("Formal")).unwrap();
    let updated = update_form(&updated, "requerimientos.llevar", json!("Bebidas")).unwrap();

    assert_eq!(updated.requerimientos.codigo_vestimenta, "Formal");
    assert_eq!(updated.requerimientos.llevar, "Bebidas");
    assert!(updated.requerimientos.alimentacion.is_empty());
}

#[test]
fn test_nested_ubicacion_keys() {
    let form = EventForm::new();
    assert_eq!(form.ubicacion.coordinates, DEFAULT_COORDINATES);

    let updated = update_form(&form, "ubicacion.address", json!("5a Avenida 12-01")).unwrap();
    assert_eq!(updated.ubicacion.address, "5a Avenida 12-01");
    assert_eq!(updated.ubicacion.coordinates, DEFAULT_COORDINATES);

    let updated = update_form(&updated, "ubicacion.coordinates", json!([14.55, -90.73])).unwrap();
    assert_eq!(updated.ubicacion.coordinates, [14.55, -90.73]);
    assert_eq!(updated.ubicacion.address, "5a Avenida 12-01");
}

#[test]
fn test_fecha_fields_accept_rfc3339_and_null() {
    let form = EventForm::new();

    let updated = update_form(&form, "fechaInicio", json!("2026-09-12T18:00:00Z")).unwrap();
    assert!(updated.fecha_inicio.is_some());

    let cleared = update_form(&updated, "fechaInicio", json!(null)).unwrap();
    assert!(cleared.fecha_inicio.is_none());
}

#[test]
fn test_updater_does_not_recompute_cuota() {
    let form = EventForm::new();

    let updated = update_form(&form, "productos", json!([{
        "externalId": "p-1",
        "name": "Carne",
        "brand": "",
        "quantity": 2,
        "price": 100.0,
        "imageUrl": ""
    }]))
    .unwrap();

    // Recomputation is the controller's explicit step, not the updater's.
    assert_eq!(updated.cuota_calculada.total_productos, 0.0);
    assert_eq!(updated.productos.len(), 1);
}

#[test]
fn test_negative_product_price_rejected_at_entry() {
    let form = EventForm::new();

    let result = update_form(&form, "productos", json!([{
        "externalId": "p-1",
        "name": "Carne",
        "quantity": 1,
        "price": -5.0
    }]));

    assert!(matches!(result, Err(FormError::NegativeAmount { .. })));
}
