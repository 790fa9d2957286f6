//! Webview-backed page host.
//!
//! Implements [`PageHost`] by evaluating small scripts in the Dioxus
//! webview. Every script looks its element up by id and does nothing when
//! the element is missing.

use std::rc::Rc;

use dioxus::document::{self, Document, Eval};
use mojju_core::{validate_element_id, LandingError, LandingResult, PageHost, VideoAudio};

/// Window scroll listener. Sends `scrollY` on every scroll event.
const WATCH_SCROLL_SCRIPT: &str = r#"
if (window.__mojjuNavScroll) {
    window.removeEventListener('scroll', window.__mojjuNavScroll);
}
window.__mojjuNavScroll = () => dioxus.send(window.scrollY);
window.addEventListener('scroll', window.__mojjuNavScroll, { passive: true });
"#;

const UNWATCH_SCROLL_SCRIPT: &str = r#"
if (window.__mojjuNavScroll) {
    window.removeEventListener('scroll', window.__mojjuNavScroll);
    window.__mojjuNavScroll = undefined;
}
"#;

const SCROLL_TO_TOP_SCRIPT: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

fn js_string(value: &str) -> LandingResult<String> {
    serde_json::to_string(value).map_err(|e| LandingError::Script(e.to_string()))
}

pub(crate) fn scroll_lock_script(locked: bool) -> String {
    let overflow = if locked { "hidden" } else { "unset" };
    format!("document.body.style.overflow = '{overflow}';")
}

pub(crate) fn scroll_to_element_script(id: &str) -> LandingResult<String> {
    validate_element_id(id)?;
    Ok(format!(
        "const el = document.getElementById({}); \
         if (el) {{ el.scrollIntoView({{ behavior: 'smooth' }}); }}",
        js_string(id)?
    ))
}

pub(crate) fn video_audio_script(id: &str, audio: VideoAudio) -> LandingResult<String> {
    validate_element_id(id)?;
    let props = serde_json::to_string(&audio).map_err(|e| LandingError::Script(e.to_string()))?;
    Ok(format!(
        "const v = document.getElementById({}); \
         if (v) {{ const a = {props}; v.muted = a.muted; v.volume = a.volume; }}",
        js_string(id)?
    ))
}

/// [`PageHost`] over the current Dioxus document
#[derive(Clone)]
pub struct EvalHost {
    doc: Rc<dyn Document>,
}

impl EvalHost {
    /// Host for the document of the calling component's app
    pub fn current() -> Self {
        Self {
            doc: document::document(),
        }
    }

    fn run(&self, script: String) {
        // Scripts are fire-and-forget; the handle is dropped unread.
        let _ = self.doc.eval(script);
    }

    /// Subscribe to window scroll offsets
    pub fn watch_scroll(&self) -> ScrollWatch {
        ScrollWatch {
            eval: self.doc.eval(WATCH_SCROLL_SCRIPT.to_string()),
            doc: self.doc.clone(),
        }
    }
}

impl PageHost for EvalHost {
    fn set_scroll_locked(&self, locked: bool) -> LandingResult<()> {
        self.run(scroll_lock_script(locked));
        Ok(())
    }

    fn scroll_to_top(&self) -> LandingResult<()> {
        self.run(SCROLL_TO_TOP_SCRIPT.to_string());
        Ok(())
    }

    fn scroll_to_element(&self, id: &str) -> LandingResult<()> {
        self.run(scroll_to_element_script(id)?);
        Ok(())
    }

    fn apply_video_audio(&self, id: &str, audio: VideoAudio) -> LandingResult<()> {
        self.run(video_audio_script(id, audio)?);
        Ok(())
    }
}

/// Live window scroll subscription; removes its listener when dropped.
pub struct ScrollWatch {
    eval: Eval,
    doc: Rc<dyn Document>,
}

impl ScrollWatch {
    /// Wait for the next scroll offset
    pub async fn next_offset(&mut self) -> LandingResult<f64> {
        self.eval
            .recv::<f64>()
            .await
            .map_err(|e| LandingError::Script(e.to_string()))
    }
}

impl Drop for ScrollWatch {
    fn drop(&mut self) {
        let _ = self.doc.eval(UNWATCH_SCROLL_SCRIPT.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_script_toggles_overflow() {
        assert_eq!(
            scroll_lock_script(true),
            "document.body.style.overflow = 'hidden';"
        );
        assert_eq!(
            scroll_lock_script(false),
            "document.body.style.overflow = 'unset';"
        );
    }

    #[test]
    fn scroll_script_guards_missing_element() {
        let script = scroll_to_element_script("contact").unwrap();
        assert!(script.contains("document.getElementById(\"contact\")"));
        assert!(script.contains("if (el)"));
    }

    #[test]
    fn ids_are_validated_before_quoting() {
        assert!(matches!(
            scroll_to_element_script("a b"),
            Err(LandingError::InvalidElementId(_))
        ));
        // Quotes survive as JSON escapes instead of breaking out of the string
        let script = scroll_to_element_script("x\"y").unwrap();
        assert!(script.contains(r#"getElementById("x\"y")"#));
    }

    #[test]
    fn video_script_writes_both_properties() {
        let script = video_audio_script("hero-video", VideoAudio::for_flag(false)).unwrap();
        assert!(script.contains(r#"{"muted":false,"volume":0.7}"#));
        assert!(script.contains("v.muted = a.muted; v.volume = a.volume;"));

        let silent = video_audio_script("hero-video", VideoAudio::AUTOPLAY_SAFE).unwrap();
        assert!(silent.contains(r#"{"muted":true,"volume":0.0}"#));
    }
}
