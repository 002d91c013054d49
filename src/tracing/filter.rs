use tracing::Level;
use tracing::Metadata;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::Filter;
use tracing_subscriber::registry::LookupSpan;

/// Only the crate's own events reach the sinks; dependency chatter
/// (reqwest, hyper, mio) stays out of the log files.
fn own_event(meta: &Metadata<'_>) -> bool {
    meta.target().starts_with("walletgraph")
}

/// Debug file sink: exactly DEBUG, nothing louder.
pub struct DebugOnlyFilter;

impl<S> Filter<S> for DebugOnlyFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        own_event(meta) && meta.level() == &Level::DEBUG
    }
}

/// Error file sink: WARN and ERROR, the fail-soft trail of a scan.
pub struct ErrorWarnFilter;

impl<S> Filter<S> for ErrorWarnFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        let level = meta.level();
        own_event(meta) && (level == &Level::ERROR || level == &Level::WARN)
    }
}

/// Dev console and info file: INFO exactly, the per-network scan lines.
#[cfg(feature = "dev")]
pub struct InfoOnlyFilter;

#[cfg(feature = "dev")]
impl<S> Filter<S> for InfoOnlyFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        own_event(meta) && meta.level() == &Level::INFO
    }
}

/// Prod console: errors only, everything else goes to the files.
pub struct ErrorOnlyFilter;

impl<S> Filter<S> for ErrorOnlyFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        own_event(meta) && meta.level() == &Level::ERROR
    }
}
