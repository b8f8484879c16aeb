use tracing::info;

/// One-way sink for the human readable message each engine command produces.
pub trait StatusSink {
    fn report(&mut self, message: &str);
}

/// Keeps the latest message for display and logs every message under the
/// `status` target.
#[derive(Debug, Default, Clone)]
pub struct StatusLine {
    latest: Option<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent message, if any command has run yet
    pub fn latest(&self) -> Option<&str> {
        self.latest.as_deref()
    }
}

impl StatusSink for StatusLine {
    fn report(&mut self, message: &str) {
        info!(target: "status", "{message}");
        self.latest = Some(message.to_owned());
    }
}

/// Collects every message, handy for headless runs
impl StatusSink for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

impl<T: StatusSink + ?Sized> StatusSink for &mut T {
    fn report(&mut self, message: &str) {
        (**self).report(message);
    }
}
