//! Logging - inizializzazione del subscriber di tracing

use tracing_subscriber::EnvFilter;

/// Installa un subscriber `fmt` globale.
///
/// `RUST_LOG` ha la precedenza su `default_filter`. Se un subscriber è già
/// installato (tipico nei test) la chiamata non fa nulla e ritorna `false`.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing("announcements=debug");
        assert!(!init_tracing("announcements=debug"));
    }
}
