use gloo::timers::callback::Interval;
use snake_core::TickScheduler;
use yew::Callback;

/// Periodic tick backed by a single `setInterval`; dropping the old [`Interval`] clears it, so
/// scheduling again replaces rather than stacks.
#[derive(Debug)]
pub(crate) struct TickTimer {
    on_tick: Callback<()>,
    interval: Option<Interval>,
}

impl TickTimer {
    pub(crate) fn new(on_tick: Callback<()>) -> Self {
        Self {
            on_tick,
            interval: None,
        }
    }
}

impl TickScheduler for TickTimer {
    fn schedule(&mut self, interval_ms: u32) {
        let on_tick = self.on_tick.clone();
        let previous = self
            .interval
            .replace(Interval::new(interval_ms, move || on_tick.emit(())));
        drop(previous);
        log::trace!("ticking every {}ms", interval_ms);
    }

    fn cancel(&mut self) {
        if self.interval.take().is_some() {
            log::trace!("tick cancelled");
        }
    }
}
