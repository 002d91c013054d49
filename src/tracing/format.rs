use tracing::Event;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::FormatFields;
use tracing_subscriber::registry::LookupSpan;

/// Renders `LEVEL timestamp::engine::file::line:: message`, the line
/// shape shared by every sink.
#[derive(Clone)]
pub struct WalletgraphFormat {
    pub engine_name: String,
}

impl<S, N> FormatEvent<S, N> for WalletgraphFormat
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();

        // Events without a source location are synthesized by dependencies;
        // they only matter when deep tracing is compiled in.
        let (file, line) = match (metadata.file(), metadata.line()) {
            (Some(file), line) => (file, line.unwrap_or(0)),
            (None, _) if cfg!(feature = "deep-trace") => ("unknown", 0),
            (None, _) => return Ok(()),
        };

        write!(
            writer,
            "{} {}::{}::{}::{}::",
            metadata.level(),
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S"),
            self.engine_name,
            file,
            line
        )?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
