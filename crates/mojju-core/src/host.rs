//! Rendering surface seam.
//!
//! [`PageHost`] is everything the landing page needs from the document it
//! is rendered into. The desktop shell implements it over the webview;
//! [`RecordingHost`] implements it in memory for tests.
//!
//! Host failures are cosmetic. Callers pass results through [`quietly`],
//! which logs and drops them, so a missing element never takes the page
//! down.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::audio::VideoAudio;
use crate::error::{LandingError, LandingResult};

/// Side effects on the document hosting the page
pub trait PageHost {
    /// Suppress (`true`) or restore (`false`) document scrolling
    fn set_scroll_locked(&self, locked: bool) -> LandingResult<()>;

    /// Smooth-scroll the window to the top of the page
    fn scroll_to_top(&self) -> LandingResult<()>;

    /// Smooth-scroll the element with `id` into view
    fn scroll_to_element(&self, id: &str) -> LandingResult<()>;

    /// Write `muted` and `volume` onto the video element with `id`
    fn apply_video_audio(&self, id: &str, audio: VideoAudio) -> LandingResult<()>;
}

/// Check that `id` can name an element: non-empty, no whitespace.
pub fn validate_element_id(id: &str) -> LandingResult<()> {
    if id.is_empty() || id.chars().any(char::is_whitespace) {
        return Err(LandingError::InvalidElementId(id.to_string()));
    }
    Ok(())
}

/// Drop a host failure after logging it.
pub fn quietly(result: LandingResult<()>, action: &str) {
    if let Err(e) = result {
        tracing::debug!(action, error = %e, "Host action skipped");
    }
}

/// Document scroll lock held for as long as this value lives.
///
/// Acquiring locks scrolling; dropping the guard, on any path, releases it.
pub struct ScrollLock<H: PageHost> {
    host: H,
}

impl<H: PageHost> ScrollLock<H> {
    pub fn acquire(host: H) -> Self {
        quietly(host.set_scroll_locked(true), "lock scroll");
        tracing::debug!("Document scroll locked");
        Self { host }
    }
}

impl<H: PageHost> Drop for ScrollLock<H> {
    fn drop(&mut self) {
        quietly(self.host.set_scroll_locked(false), "unlock scroll");
        tracing::debug!("Document scroll released");
    }
}

/// A single call made against a [`RecordingHost`]
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    ScrollLocked(bool),
    ScrollToTop,
    ScrollToElement(String),
    VideoAudio { id: String, audio: VideoAudio },
}

#[derive(Default)]
struct Recorded {
    calls: Vec<HostCall>,
    elements: HashSet<String>,
    scroll_locked: bool,
    videos: HashMap<String, VideoAudio>,
}

/// In-memory host that records every call.
///
/// Clones share the same record, so a test can keep one handle while the
/// code under test owns another.
#[derive(Clone, Default)]
pub struct RecordingHost {
    inner: Arc<Mutex<Recorded>>,
}

impl RecordingHost {
    /// Host with an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose document contains elements with the given ids
    pub fn with_elements<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let host = Self::new();
        for id in ids {
            host.add_element(id);
        }
        host
    }

    pub fn add_element(&self, id: &str) {
        self.inner.lock().elements.insert(id.to_string());
    }

    /// All calls in order
    pub fn calls(&self) -> Vec<HostCall> {
        self.inner.lock().calls.clone()
    }

    /// Whether document scrolling is currently suppressed
    pub fn scroll_locked(&self) -> bool {
        self.inner.lock().scroll_locked
    }

    /// Last audio properties written to the video element `id`
    pub fn video_audio(&self, id: &str) -> Option<VideoAudio> {
        self.inner.lock().videos.get(id).copied()
    }

    /// Ids that were successfully scrolled into view, in order
    pub fn scrolled_to(&self) -> Vec<String> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                HostCall::ScrollToElement(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }

    fn require_element(&self, id: &str) -> LandingResult<()> {
        validate_element_id(id)?;
        if !self.inner.lock().elements.contains(id) {
            return Err(LandingError::ElementNotFound(id.to_string()));
        }
        Ok(())
    }
}

impl PageHost for RecordingHost {
    fn set_scroll_locked(&self, locked: bool) -> LandingResult<()> {
        let mut inner = self.inner.lock();
        inner.scroll_locked = locked;
        inner.calls.push(HostCall::ScrollLocked(locked));
        Ok(())
    }

    fn scroll_to_top(&self) -> LandingResult<()> {
        self.inner.lock().calls.push(HostCall::ScrollToTop);
        Ok(())
    }

    fn scroll_to_element(&self, id: &str) -> LandingResult<()> {
        self.require_element(id)?;
        self.inner
            .lock()
            .calls
            .push(HostCall::ScrollToElement(id.to_string()));
        Ok(())
    }

    fn apply_video_audio(&self, id: &str, audio: VideoAudio) -> LandingResult<()> {
        self.require_element(id)?;
        let mut inner = self.inner.lock();
        inner.videos.insert(id.to_string(), audio);
        inner.calls.push(HostCall::VideoAudio {
            id: id.to_string(),
            audio,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_id_rules() {
        assert!(validate_element_id("contact").is_ok());
        assert!(validate_element_id("hero-video").is_ok());
        assert_eq!(
            validate_element_id(""),
            Err(LandingError::InvalidElementId(String::new()))
        );
        assert!(validate_element_id("two words").is_err());
        assert!(validate_element_id("tab\there").is_err());
    }

    #[test]
    fn lock_released_on_drop() {
        let host = RecordingHost::new();
        {
            let _lock = ScrollLock::acquire(host.clone());
            assert!(host.scroll_locked());
        }
        assert!(!host.scroll_locked());
        assert_eq!(
            host.calls(),
            vec![HostCall::ScrollLocked(true), HostCall::ScrollLocked(false)]
        );
    }

    #[test]
    fn missing_element_is_an_error() {
        let host = RecordingHost::new();
        assert_eq!(
            host.scroll_to_element("contact"),
            Err(LandingError::ElementNotFound("contact".to_string()))
        );
        assert!(host.calls().is_empty());
    }

    #[test]
    fn clones_share_state() {
        let host = RecordingHost::with_elements(["contact"]);
        let other = host.clone();
        other.scroll_to_element("contact").unwrap();
        assert_eq!(host.scrolled_to(), vec!["contact".to_string()]);
    }
}
