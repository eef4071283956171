/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports describe what the scan pipeline needs from the
/// outside world: a fingerprint source, the identification service, and
/// somewhere to send diagnostics and output.
pub mod outbound;
