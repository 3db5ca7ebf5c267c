//! Background composition for the page.
//!
//! Everything here is a pure function of the theme and the capability
//! snapshot. Element placement comes from an integer hash of the element's
//! index, so repeated renders lay out identically.

use crate::{capability::CapabilitySnapshot, theme::Theme};

pub const STAR_COUNT: usize = 60;
pub const PARTICLE_COUNT: usize = 4;

const STATIC_GRADIENT: &str = "bg-gradient-to-br from-white via-blue-50/15 to-purple-50/10 dark:from-stone-950 dark:via-blue-950/20 dark:to-purple-950/10";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub name: &'static str,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Animation {
    const fn new(name: &'static str, duration_s: f64) -> Self {
        Self {
            name,
            duration_s,
            delay_s: 0.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "animation: {} {}s ease-in-out {}s infinite",
            self.name, self.duration_s, self.delay_s
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    pub class: &'static str,
    pub gradient: &'static str,
    pub animation: Animation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub size: f64,
    pub x: f64,
    pub y: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Star {
    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {x:.2}%; top: {y:.2}%; animation-delay: {delay:.2}s; animation-duration: {dur:.2}s",
            size = self.size,
            x = self.x,
            y = self.y,
            delay = self.delay_s,
            dur = self.duration_s,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub color: &'static str,
    pub animation: Animation,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}%; top: {top}%; background: radial-gradient(circle, {color}, transparent 80%); --drift-x: {dx:.1}px; --drift-y: {dy:.1}px; {anim}",
            size = self.size,
            left = self.left,
            top = self.top,
            color = self.color,
            dx = self.drift_x,
            dy = self.drift_y,
            anim = self.animation.css(),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedSurface {
    pub theme: Theme,
    pub base: &'static str,
    pub orbs: Vec<Orb>,
    pub mesh: &'static str,
    pub mesh_animation: Animation,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Static { gradient: &'static str },
    Animated(AnimatedSurface),
}

pub fn compose(theme: Theme, capabilities: CapabilitySnapshot) -> Surface {
    if capabilities.should_reduce_motion() {
        return Surface::Static {
            gradient: STATIC_GRADIENT,
        };
    }
    Surface::Animated(match theme {
        Theme::Light => light_surface(),
        Theme::Dark => dark_surface(),
    })
}

fn light_surface() -> AnimatedSurface {
    AnimatedSurface {
        theme: Theme::Light,
        base: "bg-gradient-to-br from-white via-blue-50/15 to-purple-50/10",
        orbs: vec![
            Orb {
                class: "top-1/4 -left-40 w-[650px] h-[650px] opacity-[0.08]",
                gradient: "radial-gradient(circle, rgba(59, 130, 246, 0.15), rgba(139, 92, 246, 0.1), transparent)",
                animation: Animation::new("orb-drift-a", 28.0),
            },
            Orb {
                class: "bottom-1/3 -right-40 w-[600px] h-[600px] opacity-[0.07]",
                gradient: "radial-gradient(circle, rgba(236, 72, 153, 0.15), rgba(251, 146, 60, 0.1), transparent)",
                animation: Animation::new("orb-drift-b", 32.0),
            },
        ],
        mesh: "radial-gradient(at 18% 28%, rgba(59, 130, 246, 0.02) 0px, transparent 65%), radial-gradient(at 82% 72%, rgba(236, 72, 153, 0.02) 0px, transparent 65%), radial-gradient(at 48% 48%, rgba(139, 92, 246, 0.015) 0px, transparent 65%)",
        mesh_animation: Animation::new("mesh-pulse", 22.0),
        particles: (0..PARTICLE_COUNT).map(particle).collect(),
        stars: Vec::new(),
    }
}

fn dark_surface() -> AnimatedSurface {
    AnimatedSurface {
        theme: Theme::Dark,
        base: "bg-gradient-to-br from-stone-950 via-stone-900 to-stone-950",
        orbs: vec![
            Orb {
                class: "top-1/4 -left-40 w-[600px] h-[600px] opacity-20",
                gradient: "radial-gradient(circle, rgba(59, 130, 246, 0.15), rgba(139, 92, 246, 0.08), transparent)",
                animation: Animation::new("orb-drift-a", 25.0),
            },
            Orb {
                class: "bottom-1/3 -right-40 w-[550px] h-[550px] opacity-15",
                gradient: "radial-gradient(circle, rgba(139, 92, 246, 0.12), rgba(236, 72, 153, 0.08), transparent)",
                animation: Animation::new("orb-drift-b", 30.0),
            },
        ],
        mesh: "radial-gradient(at 20% 30%, rgba(59, 130, 246, 0.08) 0px, transparent 70%), radial-gradient(at 80% 70%, rgba(139, 92, 246, 0.06) 0px, transparent 70%), radial-gradient(at 50% 50%, rgba(236, 72, 153, 0.05) 0px, transparent 70%)",
        mesh_animation: Animation::new("mesh-pulse", 20.0),
        particles: Vec::new(),
        stars: star_field(STAR_COUNT),
    }
}

/// Maps a seed onto `[0, 1)`.
fn unit_hash(seed: u32) -> f64 {
    let n = (seed << 13) ^ seed;
    let mixed = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(15731).wrapping_add(789_221))
        .wrapping_add(1_376_312_589)
        & 0x7fff_ffff;
    f64::from(mixed) / 2_147_483_648.0
}

pub fn star(index: usize) -> Star {
    let seed = (index as u32).wrapping_mul(2_654_435_761);
    Star {
        size: unit_hash(seed) * 1.5 + 0.5,
        delay_s: unit_hash(seed.wrapping_add(1)) * 5.0,
        duration_s: unit_hash(seed.wrapping_add(2)) * 4.0 + 3.0,
        x: unit_hash(seed.wrapping_add(3)) * 100.0,
        y: unit_hash(seed.wrapping_add(4)) * 100.0,
    }
}

pub fn star_field(count: usize) -> Vec<Star> {
    (0..count).map(star).collect()
}

pub fn particle(index: usize) -> Particle {
    const COLORS: [&str; 3] = [
        "rgba(59, 130, 246, 0.04)",
        "rgba(139, 92, 246, 0.03)",
        "rgba(236, 72, 153, 0.04)",
    ];
    let i = index as f64;
    Particle {
        size: 100.0 + (index % 3) as f64 * 40.0,
        left: ((index * 20) % 100) as f64,
        top: ((index * 25) % 100) as f64,
        drift_x: (i * 0.5).sin() * 150.0,
        drift_y: (i * 0.5).cos() * 150.0,
        color: COLORS[index % COLORS.len()],
        animation: Animation {
            name: "particle-float",
            duration_s: 20.0 + (index % 4) as f64 * 4.0,
            delay_s: i * 1.2,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(reduce: bool) -> CapabilitySnapshot {
        CapabilitySnapshot {
            is_constrained_device: false,
            prefers_reduced_motion: reduce,
        }
    }

    #[test]
    fn test_reduced_motion_is_static_for_both_themes() {
        for theme in Theme::ALL {
            assert!(matches!(
                compose(theme, snapshot(true)),
                Surface::Static { .. }
            ));
        }
    }

    #[test]
    fn test_theme_chooses_palette() {
        let Surface::Animated(light) = compose(Theme::Light, snapshot(false)) else {
            panic!("light surface should animate");
        };
        let Surface::Animated(dark) = compose(Theme::Dark, snapshot(false)) else {
            panic!("dark surface should animate");
        };
        assert_eq!(light.theme, Theme::Light);
        assert_eq!(light.particles.len(), PARTICLE_COUNT);
        assert!(light.stars.is_empty());
        assert_eq!(dark.stars.len(), STAR_COUNT);
        assert!(dark.particles.is_empty());
        assert_ne!(light.base, dark.base);
    }

    #[test]
    fn test_compose_is_pure() {
        assert_eq!(
            compose(Theme::Dark, snapshot(false)),
            compose(Theme::Dark, snapshot(false))
        );
    }

    #[test]
    fn test_star_is_deterministic() {
        for i in [0, 1, 7, 59, 10_000] {
            assert_eq!(star(i), star(i));
        }
        assert_eq!(star_field(STAR_COUNT), star_field(STAR_COUNT));
        assert_ne!(star(1), star(2));
    }

    #[test]
    fn test_star_ranges() {
        for s in star_field(500) {
            assert!((0.5..2.0).contains(&s.size), "size {}", s.size);
            assert!((0.0..5.0).contains(&s.delay_s));
            assert!((3.0..7.0).contains(&s.duration_s));
            assert!((0.0..100.0).contains(&s.x));
            assert!((0.0..100.0).contains(&s.y));
        }
    }

    #[test]
    fn test_particle_layout() {
        let p = particle(2);
        assert_eq!(p.size, 180.0);
        assert_eq!(p.left, 40.0);
        assert_eq!(p.top, 50.0);
        assert_eq!(p.animation.duration_s, 28.0);
        assert_eq!(particle(3), particle(3));
        assert!(p.style().contains("--drift-x: 126.2px"));
    }
}
