//! Reels feed: the video list, which reel is on screen, and tap gestures

use crate::error::Result;
use crate::storage::KeyValueStore;
use qoogle_types::Reel;
use tracing::warn;

/// Two taps closer together than this count as a double tap
pub const DOUBLE_TAP_WINDOW_MS: u32 = 250;

/// How long the heart overlay stays after a double tap
pub const HEART_FLASH_MS: u32 = 800;

/// Share of a reel that must be on screen for it to become the visible one
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Storage key for reels a user uploaded from the terminal client
pub fn reels_key(username: &str) -> String {
    format!("qoogle-reels-{}", username)
}

pub fn demo_reels() -> Vec<Reel> {
    let reel = |id: &str, url: &str, author: &str, description: &str| Reel {
        id: id.to_string(),
        url: url.to_string(),
        author: author.to_string(),
        description: description.to_string(),
    };

    vec![
        reel(
            "1",
            "https://videos.pexels.com/video-files/3840443/3840443-hd_720_1366_25fps.mp4",
            "@naturelover",
            "Beautiful waterfall scenery",
        ),
        reel(
            "2",
            "https://videos.pexels.com/video-files/8763290/8763290-sd_540_960_30fps.mp4",
            "@citylights",
            "Vibrant city life at night",
        ),
        reel(
            "3",
            "https://videos.pexels.com/video-files/4465124/4465124-hd_720_1366_25fps.mp4",
            "@petparadise",
            "Cute puppy playing in the park",
        ),
    ]
}

/// Ordered list of reels with at most one visible at a time
#[derive(Debug, Clone, PartialEq)]
pub struct ReelFeed {
    reels: Vec<Reel>,
    visible: Option<String>,
}

impl ReelFeed {
    pub fn new(reels: Vec<Reel>) -> Self {
        let visible = reels.first().map(|r| r.id.clone());
        Self { reels, visible }
    }

    pub fn seeded() -> Self {
        Self::new(demo_reels())
    }

    /// Demo reels followed by the user's stored uploads
    pub fn load<S: KeyValueStore>(store: &S, username: &str) -> Self {
        let mut reels = demo_reels();
        match store.get_json::<Vec<Reel>>(&reels_key(username)) {
            Ok(Some(uploads)) => reels.extend(uploads),
            Ok(None) => {}
            Err(e) => warn!("Error reading uploaded reels from storage: {}", e),
        }
        Self::new(reels)
    }

    /// Write the user's uploads (everything past the demo reels)
    pub fn save<S: KeyValueStore>(&self, store: &S, username: &str) -> Result<()> {
        let demo = demo_reels();
        let uploads: Vec<&Reel> = self
            .reels
            .iter()
            .filter(|r| !demo.iter().any(|d| d.id == r.id))
            .collect();
        store.set_json(&reels_key(username), &uploads)
    }

    pub fn reels(&self) -> &[Reel] {
        &self.reels
    }

    pub fn len(&self) -> usize {
        self.reels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reels.is_empty()
    }

    pub fn visible_id(&self) -> Option<&str> {
        self.visible.as_deref()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.as_deref() == Some(id)
    }

    /// Append a reel uploaded by the current user
    pub fn upload(&mut self, url: impl Into<String>, uploaded_at: chrono::DateTime<chrono::Utc>) -> &Reel {
        self.reels.push(Reel {
            id: uploaded_at.to_rfc3339(),
            url: url.into(),
            author: "@me".to_string(),
            description: "My new reel!".to_string(),
        });
        let index = self.reels.len() - 1;
        &self.reels[index]
    }

    /// Feed a viewport-intersection signal. Returns true if the visible reel changed.
    pub fn observe(&mut self, id: &str, is_intersecting: bool) -> bool {
        if !is_intersecting || self.is_visible(id) {
            return false;
        }
        if !self.reels.iter().any(|r| r.id == id) {
            return false;
        }
        self.visible = Some(id.to_string());
        true
    }
}

/// What a tap on the video resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// First tap; becomes a play/pause toggle unless a second tap arrives
    /// within the double-tap window
    Pending,
    DoubleTap,
}

/// Per-reel view state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReelInteraction {
    pub liked: bool,
    pub playing: bool,
    pub heart_visible: bool,
    tap_pending: bool,
}

impl ReelInteraction {
    pub fn tap(&mut self) -> TapOutcome {
        if self.tap_pending {
            self.tap_pending = false;
            self.liked = true;
            self.heart_visible = true;
            TapOutcome::DoubleTap
        } else {
            self.tap_pending = true;
            TapOutcome::Pending
        }
    }

    /// The double-tap window elapsed without a second tap
    pub fn tap_window_elapsed(&mut self) -> bool {
        if !self.tap_pending {
            return false;
        }
        self.tap_pending = false;
        self.playing = !self.playing;
        true
    }

    pub fn hide_heart(&mut self) {
        self.heart_visible = false;
    }

    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    /// Reel scrolled on or off screen
    pub fn set_visible(&mut self, visible: bool) {
        self.playing = visible;
    }
}
