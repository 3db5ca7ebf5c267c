use thiserror::Error;

/// Viewports narrower than this are treated as constrained.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

const MOBILE_USER_AGENTS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("no browser window available")]
    NoWindow,
    #[error("couldn't read {0}")]
    Unavailable(&'static str),
}

/// Raw environment readings the detector is built from.
pub trait CapabilityProbe {
    fn viewport_width(&self) -> Result<f64, ProbeError>;
    fn user_agent(&self) -> Result<String, ProbeError>;
    fn prefers_reduced_motion(&self) -> Result<bool, ProbeError>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapabilitySnapshot {
    pub is_constrained_device: bool,
    pub prefers_reduced_motion: bool,
}

impl CapabilitySnapshot {
    pub const fn should_reduce_motion(&self) -> bool {
        self.is_constrained_device || self.prefers_reduced_motion
    }
}

pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_USER_AGENTS.iter().any(|sig| ua.contains(sig))
}

pub fn is_constrained(viewport_width: f64, user_agent: &str) -> bool {
    viewport_width < MOBILE_BREAKPOINT_PX || is_mobile_user_agent(user_agent)
}

/// Build a snapshot from the probe. Every failed read counts as `false`.
pub fn detect(probe: &impl CapabilityProbe) -> CapabilitySnapshot {
    let narrow = probe
        .viewport_width()
        .map(|w| w < MOBILE_BREAKPOINT_PX)
        .unwrap_or_else(|e| {
            log::debug!("viewport width: {e}");
            false
        });
    let mobile_ua = probe
        .user_agent()
        .map(|ua| is_mobile_user_agent(&ua))
        .unwrap_or_else(|e| {
            log::debug!("user agent: {e}");
            false
        });
    let prefers_reduced_motion = probe.prefers_reduced_motion().unwrap_or_else(|e| {
        log::debug!("reduced motion preference: {e}");
        false
    });
    CapabilitySnapshot {
        is_constrained_device: narrow || mobile_ua,
        prefers_reduced_motion,
    }
}

/// Entrance animation classes for a section, collapsed when motion is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionProfile {
    reduce: bool,
}

impl MotionProfile {
    pub const fn new(snapshot: CapabilitySnapshot) -> Self {
        Self {
            reduce: snapshot.should_reduce_motion(),
        }
    }

    pub const fn is_reduced(&self) -> bool {
        self.reduce
    }

    pub const fn entrance(&self) -> &'static str {
        if self.reduce {
            ""
        } else {
            "animate-fade-up"
        }
    }

    /// Inline stagger delay for the `index`th item of a list.
    pub fn stagger(&self, index: usize, step_ms: u32) -> String {
        if self.reduce {
            String::new()
        } else {
            format!("animation-delay: {}ms", index as u32 * step_ms)
        }
    }
}

#[derive(Debug, Clone)]
pub struct FixedProbe {
    pub viewport_width: Result<f64, ProbeError>,
    pub user_agent: Result<String, ProbeError>,
    pub prefers_reduced_motion: Result<bool, ProbeError>,
}

impl FixedProbe {
    pub fn desktop() -> Self {
        Self {
            viewport_width: Ok(1440.0),
            user_agent: Ok(
                "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0".into(),
            ),
            prefers_reduced_motion: Ok(false),
        }
    }
}

impl CapabilityProbe for FixedProbe {
    fn viewport_width(&self) -> Result<f64, ProbeError> {
        self.viewport_width.clone()
    }

    fn user_agent(&self) -> Result<String, ProbeError> {
        self.user_agent.clone()
    }

    fn prefers_reduced_motion(&self) -> Result<bool, ProbeError> {
        self.prefers_reduced_motion.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_reduce_motion_is_or() {
        for constrained in [false, true] {
            for reduced in [false, true] {
                let snapshot = CapabilitySnapshot {
                    is_constrained_device: constrained,
                    prefers_reduced_motion: reduced,
                };
                assert_eq!(snapshot.should_reduce_motion(), constrained || reduced);
            }
        }
    }

    #[test]
    fn test_default_snapshot_allows_motion() {
        assert!(!CapabilitySnapshot::default().should_reduce_motion());
    }

    #[test]
    fn test_mobile_user_agents() {
        assert!(is_mobile_user_agent(
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
        ));
        assert!(is_mobile_user_agent("Mozilla/5.0 (Linux; Android 14; Pixel 8)"));
        assert!(is_mobile_user_agent("Opera/9.80 (J2ME/MIDP; Opera Mini/9.80)"));
        assert!(!is_mobile_user_agent(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
        ));
    }

    #[test]
    fn test_breakpoint_is_exclusive() {
        assert!(is_constrained(767.9, ""));
        assert!(!is_constrained(768.0, ""));
        assert!(is_constrained(1920.0, "iPad"));
    }

    #[test]
    fn test_detect_desktop() {
        let snapshot = detect(&FixedProbe::desktop());
        assert_eq!(snapshot, CapabilitySnapshot::default());
    }

    #[test]
    fn test_detect_narrow_viewport_and_reduced_motion() {
        let probe = FixedProbe {
            viewport_width: Ok(390.0),
            prefers_reduced_motion: Ok(true),
            ..FixedProbe::desktop()
        };
        let snapshot = detect(&probe);
        assert!(snapshot.is_constrained_device);
        assert!(snapshot.prefers_reduced_motion);
    }

    #[test]
    fn test_detect_fails_open() {
        let probe = FixedProbe {
            viewport_width: Err(ProbeError::NoWindow),
            user_agent: Err(ProbeError::Unavailable("user agent")),
            prefers_reduced_motion: Err(ProbeError::Unavailable("media query")),
        };
        let snapshot = detect(&probe);
        assert!(!snapshot.is_constrained_device);
        assert!(!snapshot.prefers_reduced_motion);
        assert!(!snapshot.should_reduce_motion());
    }

    #[test]
    fn test_one_failed_read_does_not_mask_another() {
        let probe = FixedProbe {
            viewport_width: Err(ProbeError::NoWindow),
            user_agent: Ok("Mozilla/5.0 (iPhone)".into()),
            prefers_reduced_motion: Err(ProbeError::NoWindow),
        };
        assert!(detect(&probe).is_constrained_device);
    }

    #[test]
    fn test_motion_profile() {
        let full = MotionProfile::new(CapabilitySnapshot::default());
        assert_eq!(full.entrance(), "animate-fade-up");
        assert_eq!(full.stagger(3, 100), "animation-delay: 300ms");

        let reduced = MotionProfile::new(CapabilitySnapshot {
            is_constrained_device: true,
            prefers_reduced_motion: false,
        });
        assert!(reduced.is_reduced());
        assert_eq!(reduced.entrance(), "");
        assert_eq!(reduced.stagger(3, 100), "");
    }
}
