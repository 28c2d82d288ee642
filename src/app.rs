use crate::environ::Environ;
use crate::response::Responder;

/// A synchronous HTTP application.
///
/// The application reads the request from `environ`, calls
/// [`Responder::start_response`] once to declare status and headers, and
/// returns the body as a sequence of byte chunks.
pub trait Application {
    type Body: IntoIterator<Item: Into<Vec<u8>>>;

    fn call(&self, environ: &mut Environ, responder: &mut Responder) -> Self::Body;
}

impl<F, B> Application for F
where
    F: Fn(&mut Environ, &mut Responder) -> B,
    B: IntoIterator<Item: Into<Vec<u8>>>,
{
    type Body = B;

    fn call(&self, environ: &mut Environ, responder: &mut Responder) -> B {
        self(environ, responder)
    }
}
