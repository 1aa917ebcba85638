/// Initializes the tracing subscriber of the application.
///
/// Verbosity comes from the `RUST_LOG` environment variable:
/// - `RUST_LOG=info` - registrations and request outcomes
/// - `RUST_LOG=debug` - also mapper selection and skipped relations
/// - `RUST_LOG=hypermedia_framework=debug` - debug only for the engine
///
/// Calling it twice is harmless; the second call keeps the first subscriber.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
