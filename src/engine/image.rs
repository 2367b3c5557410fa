/// Source URL of an image that may be swapped for a placeholder once.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSource {
    src: String,
    current: String,
    fallback: String,
    failed: bool,
}

impl ImageSource {
    pub fn new(src: impl Into<String>, fallback: impl Into<String>) -> Self {
        let src = src.into();
        Self {
            current: src.clone(),
            src,
            fallback: fallback.into(),
            failed: false,
        }
    }

    /// Whether this state was built from these exact URLs.
    pub fn is_for(&self, src: &str, fallback: &str) -> bool {
        self.src == src && self.fallback == fallback
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Handles a load error. Only the first one swaps in the fallback, so a
    /// broken placeholder cannot start an error loop.
    pub fn fail(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        self.current = self.fallback.clone();
        true
    }
}

/// Square placeholder.co image with `text` written on it.
pub fn placeholder(size: u32, background: &str, foreground: &str, text: &str) -> String {
    format!(
        "https://placehold.co/{size}x{size}/{background}/{foreground}?text={}",
        urlencoding::encode(text)
    )
}
