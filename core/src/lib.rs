//! Core engine for the quill expression language.
//!
//! The crate is organized around an immutable [`api::Engine`] rebuilt on
//! configuration change by the [`api::ExpressionFactory`] facade:
//!
//! - [`parser`]: pest grammar and the owned expression tree.
//! - [`evaluator`]: tree-walking evaluation and its error model.
//! - [`introspection`]: property and index resolution strategies.
//! - [`values`]: the dynamic value representation and host seams.
//! - [`stdlib`]: built-in function namespaces.
//! - [`api`]: the embedding surface.

pub mod api;
pub mod context;
pub mod evaluator;
pub mod introspection;
pub mod parser;
pub mod stdlib;
pub mod values;

#[cfg(test)]
pub(crate) mod test_utils {
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Route tracing output through the test harness. Safe to call from
    /// every test; only the first call installs the subscriber.
    pub(crate) fn init_test_logging() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
                )
                .with_test_writer()
                .try_init();
        });
    }
}
