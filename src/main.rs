use std::io::Read;

use planea::form::compute_cuota;
use planea::models::EventForm;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reads an event form as JSON on stdin, recomputes the derived due amounts,
/// validates it and prints the normalized form — the same step the creation
/// screen runs before submitting.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "planea=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting planea v{}", env!("CARGO_PKG_VERSION"));

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let mut form: EventForm = serde_json::from_str(&input)?;
    form.cuota_calculada = compute_cuota(&form.productos, &form.cantidad_invitados);
    form.validate()?;

    info!(
        "Form '{}' valid: total {} split across {} personas",
        form.nombre,
        form.cuota_calculada.total_productos,
        form.cuota_calculada.cantidad_personas
    );

    println!("{}", serde_json::to_string_pretty(&form)?);

    Ok(())
}
