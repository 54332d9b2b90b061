#[cfg(test)]
mod tests {
    use crate::core::{
        Accordion, BillingPeriod, CountUp, DemoState, FAQS, GENERATION_DELAY_MS, PLANS, PlanPrice,
        Reveal, TRUST_STATS, is_scrolled,
    };

    /// Simulated clock for driving the demo timer.
    struct FakeTimer {
        now_ms: u32,
        due_at: Option<u32>,
    }

    impl FakeTimer {
        fn new() -> Self {
            Self {
                now_ms: 0,
                due_at: None,
            }
        }

        fn schedule(&mut self, delay_ms: u32) {
            self.due_at = Some(self.now_ms + delay_ms);
        }

        /// Advance the clock; returns true if the pending timer fired.
        fn advance(&mut self, ms: u32) -> bool {
            self.now_ms += ms;
            match self.due_at {
                Some(due) if due <= self.now_ms => {
                    self.due_at = None;
                    true
                }
                _ => false,
            }
        }
    }

    fn run_demo(prompt: &str) -> (DemoState, FakeTimer) {
        let mut state = DemoState::default();
        let mut timer = FakeTimer::new();
        if let Some(delay) = state.trigger(prompt) {
            timer.schedule(delay);
        }
        (state, timer)
    }

    // ========================================================================
    // Interactive demo
    // ========================================================================

    #[test]
    fn test_demo_shows_result_after_fixed_delay() {
        for prompt in ["test", "Лендинг для кофейни", "  a  "] {
            let (mut state, mut timer) = run_demo(prompt);
            assert_eq!(state, DemoState::Generating, "prompt {prompt:?}");

            assert!(!timer.advance(GENERATION_DELAY_MS - 1));
            assert_eq!(state, DemoState::Generating);

            assert!(timer.advance(1));
            assert!(state.complete());
            assert_eq!(state, DemoState::ResultShown);
        }
    }

    #[test]
    fn test_demo_blank_prompt_stays_idle() {
        for prompt in ["", " ", "\t\n  "] {
            let (state, timer) = run_demo(prompt);
            assert_eq!(state, DemoState::Idle);
            assert!(timer.due_at.is_none());
        }
    }

    #[test]
    fn test_demo_trigger_while_generating_is_noop() {
        let (mut state, mut timer) = run_demo("test");
        assert!(!state.can_trigger("test"));
        assert_eq!(state.trigger("test"), None);

        // The original timer is still the only one pending
        assert!(timer.advance(GENERATION_DELAY_MS));
        assert!(state.complete());
        assert!(state.shows_result());
    }

    // ========================================================================
    // FAQ accordion
    // ========================================================================

    #[test]
    fn test_accordion_single_open() {
        let mut accordion = Accordion::default();
        assert!(!accordion.is_open(2));

        accordion.toggle(2);
        assert!(accordion.is_open(2));

        accordion.toggle(5);
        assert!(accordion.is_open(5));
        assert!(!accordion.is_open(2));

        accordion.toggle(5);
        assert_eq!(accordion, Accordion::default());
    }

    #[test]
    fn test_accordion_never_has_two_open() {
        let mut accordion = Accordion::default();
        let clicks = [0, 1, 1, 7, 3, 3, 3, 0, 6];
        for index in clicks {
            accordion.toggle(index);
            let open = (0..FAQS.len()).filter(|&i| accordion.is_open(i)).count();
            assert!(open <= 1);
        }
    }

    // ========================================================================
    // Count-up timer
    // ========================================================================

    #[test]
    fn test_count_up_monotonic_and_reaches_target() {
        for target in [0, 1, 10_000, 50_000] {
            let mut counter = CountUp::new(target, 2000);
            counter.start(0.0);

            let mut previous = 0;
            let mut t = 0.0;
            while t <= 2500.0 {
                let value = counter.sample(t);
                assert!(value >= previous, "target {target} decreased at {t}");
                assert!(value <= target);
                previous = value;
                t += 16.7;
            }
            assert_eq!(counter.sample(2000.0), target);
            assert_eq!(counter.sample(10_000.0), target);
            assert!(counter.is_finished(2000.0));
        }
    }

    #[test]
    fn test_count_up_scenario_creators() {
        let mut counter = CountUp::new(10_000, 2000);
        counter.start(0.0);
        assert_eq!(counter.sample(0.0), 0);
        assert_eq!(counter.sample(2000.0), 10_000);
        assert_eq!(counter.sample(2001.0), 10_000);
    }

    #[test]
    fn test_trust_stats_reach_their_targets() {
        for stat in TRUST_STATS {
            let mut counter = CountUp::new(stat.target, stat.duration_ms);
            counter.start(1000.0);
            assert_eq!(
                counter.sample(1000.0 + f64::from(stat.duration_ms)),
                stat.target
            );
        }
    }

    // ========================================================================
    // Pricing toggle
    // ========================================================================

    #[test]
    fn test_yearly_toggle_only_changes_paid_plans() {
        for plan in PLANS {
            let monthly = plan.displayed_price(BillingPeriod::Monthly);
            let yearly = plan.displayed_price(BillingPeriod::Yearly);
            match plan.price {
                PlanPrice::Free => {
                    assert_eq!(monthly, Some(0));
                    assert_eq!(yearly, Some(0));
                }
                PlanPrice::Paid { .. } => assert_ne!(monthly, yearly),
                PlanPrice::Contact => {
                    assert_eq!(monthly, None);
                    assert_eq!(yearly, None);
                }
            }
        }
    }

    #[test]
    fn test_pro_plan_prices() {
        let pro = PLANS.iter().find(|p| p.name == "Pro").unwrap();
        assert_eq!(pro.displayed_price(BillingPeriod::Monthly), Some(2490));
        assert_eq!(pro.displayed_price(BillingPeriod::Yearly), Some(1990));
    }

    // ========================================================================
    // Scroll-driven state
    // ========================================================================

    #[test]
    fn test_reveal_fires_once() {
        let mut reveal = Reveal::default();
        assert!(reveal.observe(true));
        assert!(!reveal.observe(true));
        assert!(!reveal.observe(false));
        assert!(reveal.is_visible());
    }

    #[test]
    fn test_header_scroll_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }
}
