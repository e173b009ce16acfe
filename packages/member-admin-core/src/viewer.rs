//! Popup member detail viewer.

pub const VIEWER_TITLE: &str = "Member Details";

/// At most one open viewer; opening again retargets it.
#[derive(Debug, Default)]
pub struct DetailViewer {
    url: Option<String>,
}

impl DetailViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the viewer on `url`. Returns true if a new viewer was created,
    /// false if the open one was pointed at `url`.
    pub fn open(&mut self, url: impl Into<String>) -> bool {
        let created = self.url.is_none();
        self.url = Some(url.into());
        created
    }

    pub fn close(&mut self) -> Option<String> {
        self.url.take()
    }

    pub fn is_open(&self) -> bool {
        self.url.is_some()
    }

    pub fn current_url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
