//! The request collaborator of the router.
//!
//! The router reads exactly one thing from a request: its raw path, not yet URL decoded.
//! [`RequestPath`] abstracts over whatever request type the surrounding framework uses.

use http::Uri;
use http::request::{Parts, Request};

pub trait RequestPath {
    /// Returns the raw request path, or `None` when the request carries no path.
    fn raw_path(&self) -> Option<&str>;
}

impl RequestPath for str {
    #[inline]
    fn raw_path(&self) -> Option<&str> {
        Some(self)
    }
}

impl RequestPath for String {
    #[inline]
    fn raw_path(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<S: AsRef<str>> RequestPath for Option<S> {
    #[inline]
    fn raw_path(&self) -> Option<&str> {
        self.as_ref().map(AsRef::as_ref)
    }
}

impl RequestPath for Uri {
    #[inline]
    fn raw_path(&self) -> Option<&str> {
        Some(self.path())
    }
}

impl RequestPath for Parts {
    #[inline]
    fn raw_path(&self) -> Option<&str> {
        self.uri.raw_path()
    }
}

impl<B> RequestPath for Request<B> {
    #[inline]
    fn raw_path(&self) -> Option<&str> {
        self.uri().raw_path()
    }
}

impl<T: RequestPath + ?Sized> RequestPath for &T {
    #[inline]
    fn raw_path(&self) -> Option<&str> {
        (**self).raw_path()
    }
}
