//! Process-wide TLS setup for the `awc` clients

/// Install ring as the rustls crypto provider
///
/// Must happen before the first `awc::Client` is built. Later calls are
/// no-ops.
pub fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_ok()
    {
        tracing::debug!("Installed ring as the rustls crypto provider");
    }
}
