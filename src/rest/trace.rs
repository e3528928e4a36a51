use crate::error::Error;

/// Side channel that receives every error rendered to a client.
/// Recording never changes the response.
pub trait ErrorRecorder: Send + Sync {
    fn record(&self, err: &Error);
}

/// Records errors as events inside a `rest.render_error_response` span.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpanRecorder;

impl ErrorRecorder for SpanRecorder {
    fn record(&self, err: &Error) {
        let span = tracing::error_span!("rest.render_error_response", code = ?err.code());
        // the guard exits the span on drop, whatever happens below
        let _entered = span.enter();

        tracing::error!(error = %err, "request failed");
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRecorder;

impl ErrorRecorder for NoopRecorder {
    fn record(&self, _err: &Error) {}
}
