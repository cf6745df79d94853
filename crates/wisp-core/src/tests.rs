//! Unit tests for wisp-core.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::{AgentId, AgentRng, CellPos, Face, Heading, ItemKind, ItemStack, Tick, Vec3};

// ── Tick ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use super::*;

    #[test]
    fn offset_and_since() {
        let t = Tick(10);
        assert_eq!(t.offset(5), Tick(15));
        assert_eq!(Tick(15).since(t), 5);
        assert_eq!(t + 7, Tick(17));
        assert_eq!(Tick(17) - t, 7);
    }

    #[test]
    fn ordering() {
        assert!(Tick(1) < Tick(2));
        assert_eq!(Tick::ZERO, Tick(0));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(42).to_string(), "T42");
    }
}

// ── Geometry ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod geom_tests {
    use super::*;

    #[test]
    fn distance_straight_line() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 0.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn yaw_along_axes() {
        let origin = Vec3::new(0.0, 0.0, 0.0);
        assert!((origin.yaw_to(Vec3::new(1.0, 0.0, 0.0)) - 0.0).abs() < 1e-6);
        assert!((origin.yaw_to(Vec3::new(0.0, 0.0, 1.0)) - FRAC_PI_2).abs() < 1e-6);
        assert!((origin.yaw_to(Vec3::new(-1.0, 0.0, 0.0)).abs() - PI).abs() < 1e-6);
    }

    #[test]
    fn yaw_ignores_vertical() {
        let origin = Vec3::new(0.0, 0.0, 0.0);
        let up_east = Vec3::new(1.0, 10.0, 0.0);
        assert!((origin.yaw_to(up_east) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn cell_center() {
        let c = CellPos::new(2, 0, -3).center();
        assert_eq!(c, Vec3::new(2.5, 0.5, -2.5));
    }

    #[test]
    fn vec_to_cell_floor() {
        assert_eq!(Vec3::new(2.9, 0.1, -0.1).cell(), CellPos::new(2, 0, -1));
    }

    #[test]
    fn cell_step() {
        let c = CellPos::new(0, 0, 0);
        assert_eq!(c.step(Heading::East), CellPos::new(1, 0, 0));
        assert_eq!(c.step(Heading::NorthWest), CellPos::new(-1, 0, -1));
    }
}

// ── Heading ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod heading_tests {
    use super::*;

    #[test]
    fn from_yaw_cardinals() {
        assert_eq!(Heading::from_yaw(0.0), Heading::East);
        assert_eq!(Heading::from_yaw(FRAC_PI_2), Heading::South);
        assert_eq!(Heading::from_yaw(PI), Heading::West);
        assert_eq!(Heading::from_yaw(-FRAC_PI_2), Heading::North);
    }

    #[test]
    fn from_yaw_ordinals() {
        assert_eq!(Heading::from_yaw(FRAC_PI_4), Heading::SouthEast);
        assert_eq!(Heading::from_yaw(3.0 * FRAC_PI_4), Heading::SouthWest);
        assert_eq!(Heading::from_yaw(-FRAC_PI_4), Heading::NorthEast);
    }

    #[test]
    fn from_yaw_rounds_to_nearest() {
        // 10° off east still rounds to east; 30° rounds to southeast.
        assert_eq!(Heading::from_yaw(10.0_f32.to_radians()), Heading::East);
        assert_eq!(Heading::from_yaw(30.0_f32.to_radians()), Heading::SouthEast);
    }

    #[test]
    fn opposite_is_involutive() {
        for h in [
            Heading::East,
            Heading::SouthEast,
            Heading::South,
            Heading::SouthWest,
            Heading::West,
            Heading::NorthWest,
            Heading::North,
            Heading::NorthEast,
        ] {
            assert_eq!(h.opposite().opposite(), h);
            let (dx, dz) = h.offset();
            let (ox, oz) = h.opposite().offset();
            assert_eq!((dx, dz), (-ox, -oz));
        }
    }

    #[test]
    fn face_default_is_up() {
        assert_eq!(Face::default(), Face::Up);
    }
}

// ── ItemStack ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod item_tests {
    use super::*;

    #[test]
    fn empty_invariants() {
        assert!(ItemStack::EMPTY.is_empty());
        assert_eq!(ItemStack::default(), ItemStack::EMPTY);
        // Empty stacks compare equal regardless of kind.
        assert_eq!(ItemStack::new(ItemKind(3), 0), ItemStack::EMPTY);
    }

    #[test]
    fn with_count() {
        let s = ItemStack::new(ItemKind(1), 10);
        assert_eq!(s.with_count(4), ItemStack::new(ItemKind(1), 4));
        assert!(s.with_count(0).is_empty());
    }

    #[test]
    fn same_kind() {
        let a = ItemStack::new(ItemKind(1), 5);
        let b = ItemStack::new(ItemKind(1), 9);
        let c = ItemStack::new(ItemKind(2), 5);
        assert!(a.same_kind(&b));
        assert!(!a.same_kind(&c));
        assert!(!a.same_kind(&ItemStack::EMPTY));
    }
}

// ── AgentRng ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rng_tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = AgentRng::new(42, AgentId(3));
        let mut b = AgentRng::new(42, AgentId(3));
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1000), b.gen_range(0..1000));
        }
    }

    #[test]
    fn different_agents_diverge() {
        let mut a = AgentRng::new(42, AgentId(0));
        let mut b = AgentRng::new(42, AgentId(1));
        let seq_a: Vec<u32> = (0..8).map(|_| a.gen_range(0..u32::MAX)).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(seq_a, seq_b);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = AgentRng::new(0, AgentId(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
