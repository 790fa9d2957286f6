//! Background video audio rules.
//!
//! The hero owns a single mute flag. The video element's `muted` and
//! `volume` properties are derived from it, except on mount, where the
//! element is forced silent so browsers allow autoplay.

use serde::Serialize;

use crate::host::{quietly, PageHost};

/// Volume applied when the video is unmuted.
pub const UNMUTED_VOLUME: f64 = 0.7;

/// Playback properties written to the video element
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct VideoAudio {
    pub muted: bool,
    pub volume: f64,
}

impl VideoAudio {
    /// Applied once when the element mounts, regardless of the flag.
    pub const AUTOPLAY_SAFE: VideoAudio = VideoAudio {
        muted: true,
        volume: 0.0,
    };

    /// Properties for the current mute flag
    pub fn for_flag(muted: bool) -> Self {
        VideoAudio {
            muted,
            volume: if muted { 0.0 } else { UNMUTED_VOLUME },
        }
    }
}

/// Writes the hero's audio state onto its video element.
///
/// Mounting always silences the element; only later flag changes make it
/// audible.
#[derive(Clone)]
pub struct HeroAudio<H: PageHost> {
    host: H,
    video_id: &'static str,
}

impl<H: PageHost> HeroAudio<H> {
    pub fn new(host: H, video_id: &'static str) -> Self {
        Self { host, video_id }
    }

    /// Element mounted; the mute flag is deliberately not consulted
    pub fn on_mount(&self) {
        self.apply(VideoAudio::AUTOPLAY_SAFE, "silence hero video");
    }

    /// Mute flag changed (or first observed)
    pub fn on_flag(&self, muted: bool) {
        self.apply(VideoAudio::for_flag(muted), "apply hero audio");
    }

    fn apply(&self, audio: VideoAudio, action: &str) {
        tracing::debug!(muted = audio.muted, volume = audio.volume, "Applying hero audio");
        quietly(self.host.apply_video_audio(self.video_id, audio), action);
    }
}

/// Value written back by the mute button.
pub fn toggled(muted: bool) -> bool {
    !muted
}

/// Whether the "Sound On" hint is shown next to the mute button.
pub fn sound_hint_visible(muted: bool) -> bool {
    muted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    #[test]
    fn muted_flag_silences() {
        assert_eq!(VideoAudio::for_flag(true), VideoAudio::AUTOPLAY_SAFE);
    }

    #[test]
    fn unmuted_flag_uses_fixed_volume() {
        let audio = VideoAudio::for_flag(false);
        assert!(!audio.muted);
        assert_eq!(audio.volume, 0.7);
    }

    #[test]
    fn mount_ignores_nominal_flag() {
        let host = RecordingHost::with_elements(["v"]);
        let audio = HeroAudio::new(host.clone(), "v");

        // Nominal flag is unmuted, mount still silences
        let nominal = false;
        audio.on_mount();
        assert_eq!(host.video_audio("v"), Some(VideoAudio::AUTOPLAY_SAFE));

        audio.on_flag(nominal);
        assert_eq!(host.video_audio("v"), Some(VideoAudio::for_flag(false)));
    }

    #[test]
    fn hint_follows_flag() {
        assert!(sound_hint_visible(true));
        assert!(!sound_hint_visible(toggled(true)));
    }
}
