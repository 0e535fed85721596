/// The parts of an inbound request the CORS policy looks at.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub path: &'a str,
    /// Raw `Origin` header. `None` when absent or not valid UTF-8.
    pub origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    /// The origin as the policy sees it; a missing header reads as empty.
    pub fn origin_or_empty(&self) -> &'a str {
        self.origin.unwrap_or_default()
    }
}
