//! Request body size limit.

use salvo::prelude::*;

/// Sets how much of a request body extractors will read.
///
/// Salvo's own default is 64 KiB, well under a base64 camera frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BodyLimit(usize);

impl BodyLimit {
    pub(crate) fn new(max_bytes: u64) -> Self {
        Self(usize::try_from(max_bytes).unwrap_or(usize::MAX))
    }
}

#[handler]
impl BodyLimit {
    async fn handle(&self, req: &mut Request) {
        req.set_secure_max_size(self.0);
    }
}
