mod tests {
    use std::future::Future;
    use std::pin::pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};
    use std::thread::{self, Thread};

    use embassy_time::{Duration, Instant};
    use myrtio_eyes::{ControlChannel, Display, EyesConfig, Frame, FrameScheduler, Renderer};

    #[derive(Default)]
    struct RecordingDisplay {
        presented: usize,
        last: Option<Frame>,
    }

    impl Display for RecordingDisplay {
        type Error = ();

        fn present(&mut self, frame: &Frame) -> Result<(), Self::Error> {
            self.presented += 1;
            self.last = Some(*frame);
            Ok(())
        }
    }

    #[derive(Debug, PartialEq, Eq)]
    struct Disconnected;

    struct FailingDisplay {
        frames_left: usize,
    }

    impl Display for FailingDisplay {
        type Error = Disconnected;

        fn present(&mut self, _frame: &Frame) -> Result<(), Self::Error> {
            if self.frames_left == 0 {
                return Err(Disconnected);
            }
            self.frames_left -= 1;
            Ok(())
        }
    }

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    struct ThreadWaker(Thread);

    impl Wake for ThreadWaker {
        fn wake(self: Arc<Self>) {
            self.0.unpark();
        }
    }

    /// Poll a future on the current thread, parking between wakeups
    fn block_on<F: Future>(future: F) -> F::Output {
        let mut future = pin!(future);
        let waker = Waker::from(Arc::new(ThreadWaker(thread::current())));
        let mut cx = Context::from_waker(&waker);
        loop {
            if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
                return output;
            }
            thread::park();
        }
    }

    #[test]
    fn test_tick_paces_frames() {
        let channel = ControlChannel::new();
        let renderer = Renderer::new(channel.receiver(), &EyesConfig::DEFAULT, 1);
        let mut scheduler = FrameScheduler::new(renderer, RecordingDisplay::default());

        let result = scheduler.tick(at(0)).unwrap();
        assert_eq!(result.next_deadline, at(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        let result = scheduler.tick(at(5)).unwrap();
        assert_eq!(result.next_deadline, at(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(35));

        assert_eq!(scheduler.display().presented, 2);
        assert_eq!(
            scheduler.display().last.as_ref(),
            Some(scheduler.renderer().frame())
        );
    }

    #[test]
    fn test_tick_skips_backlog() {
        let channel = ControlChannel::new();
        let renderer = Renderer::new(channel.receiver(), &EyesConfig::DEFAULT, 1);
        let mut scheduler = FrameScheduler::new(renderer, RecordingDisplay::default());

        scheduler.tick(at(0)).unwrap();
        let result = scheduler.tick(at(1_000)).unwrap();
        assert_eq!(result.next_deadline, at(1_020));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        // Slightly late frames catch up without sleeping
        let result = scheduler.tick(at(1_040)).unwrap();
        assert_eq!(result.next_deadline, at(1_040));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_uses_configured_frame_duration() {
        let channel = ControlChannel::new();
        let config = EyesConfig {
            frame_duration: Duration::from_millis(50),
            ..EyesConfig::DEFAULT
        };
        let renderer = Renderer::new(channel.receiver(), &config, 1);
        let mut scheduler = FrameScheduler::new(renderer, RecordingDisplay::default());

        let result = scheduler.tick(at(0)).unwrap();
        assert_eq!(result.next_deadline, at(50));
    }

    #[test]
    fn test_display_error_stops_ticking() {
        let channel = ControlChannel::new();
        let renderer = Renderer::new(channel.receiver(), &EyesConfig::DEFAULT, 1);
        let mut scheduler = FrameScheduler::new(renderer, FailingDisplay { frames_left: 2 });

        assert!(scheduler.tick(at(0)).is_ok());
        assert!(scheduler.tick(at(20)).is_ok());
        assert_eq!(scheduler.tick(at(40)), Err(Disconnected));
    }

    #[test]
    fn test_intents_reach_scheduled_renderer() {
        let channel = ControlChannel::new();
        let remote = channel.remote();
        let renderer = Renderer::new(channel.receiver(), &EyesConfig::DEFAULT, 1);
        let mut scheduler = FrameScheduler::new(renderer, RecordingDisplay::default());

        remote.open();
        scheduler.tick(at(0)).unwrap();
        assert!(scheduler.renderer().state().is_open);
        assert_eq!(scheduler.display_mut().presented, 1);
    }

    #[test]
    fn test_run_returns_first_display_error() {
        let channel = ControlChannel::new();
        let remote = channel.remote();
        let renderer = Renderer::new(channel.receiver(), &EyesConfig::DEFAULT, 1);
        let scheduler = FrameScheduler::new(renderer, FailingDisplay { frames_left: 3 });

        remote.open();
        let result = block_on(scheduler.run());

        assert_eq!(result, Err(Disconnected));
        assert!(!channel.has_pending());
    }
}
