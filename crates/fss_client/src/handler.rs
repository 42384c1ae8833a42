use std::error::Error;
use std::future::Future;

use fss_core::{render_error_page, Element, Failure};
use fss_logging::fss_error;

use crate::ClientError;

/// Terminal sink for every failure of a request chain.
pub trait ErrorHandler {
    fn handle(&mut self, err: &(dyn Error + 'static));
}

/// Logs the error and replaces the whole body with the error page.
pub struct BodyErrorHandler<'a, E: Element + ?Sized> {
    body: &'a mut E,
    handled: usize,
}

impl<'a, E: Element + ?Sized> BodyErrorHandler<'a, E> {
    pub fn new(body: &'a mut E) -> Self {
        Self { body, handled: 0 }
    }

    /// Number of errors rendered so far.
    pub fn handled(&self) -> usize {
        self.handled
    }
}

impl<E: Element + ?Sized> ErrorHandler for BodyErrorHandler<'_, E> {
    fn handle(&mut self, err: &(dyn Error + 'static)) {
        fss_error!("{}", err);
        self.body
            .set_inner_html(render_error_page(&Failure::from_error(err)));
        self.handled += 1;
    }
}

/// Awaits `operation` and continues with `on_success`, or reports to `handler`.
///
/// Exactly one of the two runs. A failure returned by `on_success` itself is
/// also reported, mirroring a rejected continuation. Returns whether the whole
/// chain succeeded.
pub async fn dispatch<T, Fut, F, R>(
    operation: Fut,
    on_success: F,
    handler: &mut dyn ErrorHandler,
) -> bool
where
    Fut: Future<Output = Result<T, ClientError>>,
    F: FnOnce(T) -> Result<(), R>,
    R: Error + 'static,
{
    match operation.await {
        Ok(value) => match on_success(value) {
            Ok(()) => true,
            Err(err) => {
                handler.handle(&err);
                false
            }
        },
        Err(err) => {
            handler.handle(&err);
            false
        }
    }
}
