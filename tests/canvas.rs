mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_eyes::{
        BinaryColor, Canvas, ControlChannel, Display, EyesConfig, Mood, Point, Quad, Rect,
        Renderer, RoundedRect,
    };

    fn rounded(x0: f32, y0: f32, x1: f32, y1: f32, radius: f32, color: BinaryColor) -> RoundedRect {
        RoundedRect {
            rect: Rect::new(x0, y0, x1, y1),
            radius,
            color,
        }
    }

    #[test]
    fn test_fill_square_rect() {
        let mut canvas = Canvas::<16, 16>::new();
        canvas.fill_rounded_rect(&rounded(2.0, 2.0, 12.0, 12.0, 0.0, BinaryColor::On));
        assert_eq!(canvas.lit_pixels(), 100);
        assert!(canvas.pixel(2, 2));
        assert!(canvas.pixel(11, 11));
        assert!(!canvas.pixel(12, 12));
        assert!(!canvas.pixel(1, 5));
    }

    #[test]
    fn test_fill_rounded_corners() {
        let mut canvas = Canvas::<16, 16>::new();
        canvas.fill_rounded_rect(&rounded(2.0, 2.0, 12.0, 12.0, 4.0, BinaryColor::On));
        assert!(!canvas.pixel(2, 2));
        assert!(!canvas.pixel(11, 2));
        assert!(!canvas.pixel(2, 11));
        assert!(!canvas.pixel(11, 11));
        assert!(canvas.pixel(7, 2));
        assert!(canvas.pixel(2, 7));
        assert!(canvas.pixel(7, 7));
        assert!(canvas.lit_pixels() < 100);
    }

    #[test]
    fn test_flat_rect_draws_a_line() {
        let mut canvas = Canvas::<16, 16>::new();
        canvas.fill_rounded_rect(&rounded(2.0, 5.0, 12.0, 6.0, 8.0, BinaryColor::On));
        assert!(canvas.pixel(7, 5));
        assert_eq!(canvas.rows()[5].iter().filter(|lit| **lit).count(), 10);
        assert_eq!(canvas.lit_pixels(), 10);
    }

    #[test]
    fn test_inverted_rect_draws_nothing() {
        let mut canvas = Canvas::<16, 16>::new();
        canvas.fill_rounded_rect(&rounded(2.0, 8.0, 12.0, 4.0, 0.0, BinaryColor::On));
        assert_eq!(canvas.lit_pixels(), 0);
    }

    #[test]
    fn test_fill_quad() {
        let mut canvas = Canvas::<8, 8>::new();
        canvas.fill_quad(&Quad {
            points: [
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, 4.0),
                Point::new(0.0, 4.0),
            ],
            color: BinaryColor::On,
        });
        assert_eq!(canvas.lit_pixels(), 16);
        assert!(canvas.pixel(3, 3));
        assert!(!canvas.pixel(4, 4));
    }

    #[test]
    fn test_unlit_quad_erases_and_clips() {
        let mut canvas = Canvas::<8, 8>::new();
        canvas.fill_rounded_rect(&rounded(0.0, 0.0, 8.0, 8.0, 0.0, BinaryColor::On));
        assert_eq!(canvas.lit_pixels(), 64);

        // Slanted lower edge from y = 2 on the left to y = 6 on the right
        canvas.fill_quad(&Quad {
            points: [
                Point::new(-2.0, -2.0),
                Point::new(10.0, -2.0),
                Point::new(10.0, 7.0),
                Point::new(-2.0, 1.0),
            ],
            color: BinaryColor::Off,
        });
        assert!(!canvas.pixel(0, 0));
        assert!(canvas.pixel(0, 4));
        assert!(!canvas.pixel(7, 4));
        assert!(canvas.pixel(7, 7));
    }

    #[test]
    fn test_present_clears_previous_frame() {
        let channel = ControlChannel::new();
        let mut renderer = Renderer::new(channel.receiver(), &EyesConfig::DEFAULT, 1);
        let mut canvas = Canvas::<128, 64>::new();
        canvas.fill_rounded_rect(&rounded(0.0, 0.0, 128.0, 64.0, 0.0, BinaryColor::On));

        let frame = renderer.render(Instant::from_millis(0));
        canvas.present(frame).unwrap();

        // Closed eyes are two thin lines
        assert!(canvas.lit_pixels() > 0);
        assert!(canvas.lit_pixels() <= 2 * 36 * 2);
        assert!(!canvas.pixel(0, 0));
    }

    fn render_mood(mood: Mood) -> Canvas<128, 64> {
        let channel = ControlChannel::new();
        let remote = channel.remote();
        let mut renderer = Renderer::new(channel.receiver(), &EyesConfig::DEFAULT, 2);
        remote.open();
        remote.set_mood(mood);

        let mut now = Instant::from_millis(0);
        for _ in 0..100 {
            renderer.render(now);
            now += Duration::from_millis(20);
        }
        let mut canvas = Canvas::<128, 64>::new();
        canvas.present(renderer.render(now)).unwrap();
        canvas
    }

    #[test]
    fn test_neutral_eyes() {
        let canvas = render_mood(Mood::Neutral);
        assert_eq!(canvas.width(), 128);
        assert_eq!(canvas.height(), 64);
        // Eye centers
        assert!(canvas.pixel(41, 32));
        assert!(canvas.pixel(87, 32));
        // Gap between the eyes
        assert!(!canvas.pixel(64, 32));
        assert!(!canvas.pixel(5, 5));
        assert!(canvas.pixel(57, 25));
        assert!(canvas.pixel(41, 40));
    }

    #[test]
    fn test_angry_eyes_slant_inwards() {
        let canvas = render_mood(Mood::Angry);
        // Inner top corners are covered, outer top corners are not
        assert!(!canvas.pixel(57, 25));
        assert!(canvas.pixel(25, 25));
        assert!(!canvas.pixel(71, 25));
        assert!(canvas.pixel(103, 25));
        assert!(canvas.pixel(41, 40));
    }

    #[test]
    fn test_happy_eyes_cover_lower_part() {
        let canvas = render_mood(Mood::Happy);
        assert!(canvas.pixel(41, 20));
        assert!(!canvas.pixel(41, 40));
        assert!(!canvas.pixel(87, 40));
    }
}
