mod tests {
    use myrtio_eyes::{EyesConfig, LegalRange, Position};
    use rand::{SeedableRng, rngs::SmallRng};

    const RANGE: LegalRange = LegalRange {
        max_x: 46.0,
        max_y: 28.0,
    };

    #[test]
    fn test_legal_range_from_default_config() {
        assert_eq!(LegalRange::from_config(&EyesConfig::DEFAULT), RANGE);
    }

    #[test]
    fn test_legal_range_clamps_small_screens() {
        let config = EyesConfig {
            screen_width: 64.0,
            screen_height: 32.0,
            ..EyesConfig::DEFAULT
        };
        let range = LegalRange::from_config(&config);
        assert_eq!(range.max_x, 0.0);
        assert_eq!(range.max_y, 0.0);

        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(range.random_point(&mut rng), (0.0, 0.0));
    }

    #[test]
    fn test_position_resolve() {
        assert_eq!(Position::Center.resolve(RANGE), (23.0, 14.0));
        assert_eq!(Position::Top.resolve(RANGE), (23.0, 0.0));
        assert_eq!(Position::Left.resolve(RANGE), (0.0, 14.0));
        assert_eq!(Position::Bottom.resolve(RANGE), (23.0, 28.0));
        assert_eq!(Position::Right.resolve(RANGE), (46.0, 14.0));
        assert_eq!(Position::TopLeft.resolve(RANGE), (0.0, 0.0));
        assert_eq!(Position::TopRight.resolve(RANGE), (46.0, 0.0));
        assert_eq!(Position::BottomLeft.resolve(RANGE), (0.0, 28.0));
        assert_eq!(Position::BottomRight.resolve(RANGE), (46.0, 28.0));
    }

    #[test]
    fn test_random_point_stays_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..500 {
            let (x, y) = RANGE.random_point(&mut rng);
            assert!((0.0..=46.0).contains(&x));
            assert!((0.0..=28.0).contains(&y));
        }
    }

    #[test]
    fn test_position_names() {
        assert_eq!(Position::TopLeft.as_str(), "top_left");
        assert_eq!(
            Position::parse_from_str("bottom_right"),
            Some(Position::BottomRight)
        );
        assert_eq!(Position::parse_from_str("middle"), None);
        for position in Position::ALL {
            assert_eq!(Position::parse_from_str(position.as_str()), Some(position));
        }
    }

    #[test]
    fn test_position_from_raw() {
        assert_eq!(Position::from_raw(0), Some(Position::Center));
        assert_eq!(Position::from_raw(4), Some(Position::Right));
        assert_eq!(Position::from_raw(8), Some(Position::BottomRight));
        assert_eq!(Position::from_raw(9), None);
    }
}
