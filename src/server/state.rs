use crate::daily::DailyLocationProvider;

/// Shared handler state. The provider is safe to share by reference: a
/// same-day race regenerates an identical payload, so no lock is needed.
pub struct AppState {
    pub provider: DailyLocationProvider,
}
