//! Unit tests for aco-core primitives.

#[cfg(test)]
mod city {
    use crate::{City, CityId};

    #[test]
    fn index_roundtrip() {
        let id = CityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(CityId(0) < CityId(1));
    }

    #[test]
    fn display() {
        let c = City::new(CityId(3), "Vienna", 48.2082, 16.3738);
        let s = c.to_string();
        assert!(s.starts_with("3 Vienna"), "got {s}");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_self_distance() {
        let p = GeoPoint::new(48.2082, 16.3738);
        assert!(p.distance_km(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_km(b);
        assert!((d - 111.195).abs() < 0.5, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(52.52, 13.405);
        let b = GeoPoint::new(41.9028, 12.4964);
        assert!((a.distance_km(b) - b.distance_km(a)).abs() < 1e-12);
    }

    #[test]
    fn berlin_rome_ballpark() {
        // Great-circle Berlin–Rome is roughly 1 181 km.
        let berlin = GeoPoint::new(52.52, 13.405);
        let rome = GeoPoint::new(41.9028, 12.4964);
        let d = berlin.distance_km(rome);
        assert!((d - 1_181.0).abs() < 15.0, "got {d}");
    }
}

#[cfg(test)]
mod config {
    use crate::ColonyConfig;

    #[test]
    fn default_is_valid() {
        assert!(ColonyConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_evaporation() {
        for rate in [0.0, 1.0, -0.5, f64::NAN] {
            let cfg = ColonyConfig { evaporation_rate: rate, ..Default::default() };
            assert!(cfg.validate().is_err(), "rate {rate} accepted");
        }
    }

    #[test]
    fn rejects_zero_iterations_and_tiny_colonies() {
        let cfg = ColonyConfig { iterations: 0, ..Default::default() };
        assert!(cfg.validate().is_err());
        let cfg = ColonyConfig { ants_per_generation: 1, ..Default::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn elite_count_is_half() {
        let cfg = ColonyConfig { ants_per_generation: 16, ..Default::default() };
        assert_eq!(cfg.elite_count(), 8);
        let cfg = ColonyConfig { ants_per_generation: 3, ..Default::default() };
        assert_eq!(cfg.elite_count(), 1);
    }
}

#[cfg(test)]
mod rng {
    use crate::AntRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = AntRng::new(7, 3);
        let mut b = AntRng::new(7, 3);
        for _ in 0..16 {
            assert_eq!(a.gen_range(0u32..1_000_000), b.gen_range(0u32..1_000_000));
        }
    }

    #[test]
    fn different_slots_diverge() {
        let mut a = AntRng::new(7, 0);
        let mut b = AntRng::new(7, 1);
        let va: Vec<u64> = (0..8).map(|_| a.gen_range(0u64..u64::MAX)).collect();
        let vb: Vec<u64> = (0..8).map(|_| b.gen_range(0u64..u64::MAX)).collect();
        assert_ne!(va, vb);
    }
}
