use contact_form_domain::{CountdownTick, SuccessCountdown};
use gloo::timers::callback::Interval;
use yew::prelude::*;

use crate::services::logging::Logger;

const TICK_MS: u32 = 1000;

pub struct UseCountdownResult {
    pub remaining: u32,
    pub status_text: String,
    /// Stop counting and fire `on_finish` now
    pub finish_now: Callback<()>,
}

/// One-second countdown that calls `on_finish` exactly once, either on
/// expiry or via `finish_now`. Unmounting stops the ticker without firing.
#[hook]
pub fn use_countdown(start_secs: u32, on_finish: Callback<()>) -> UseCountdownResult {
    let countdown = use_mut_ref(|| SuccessCountdown::new(start_secs));
    let remaining = use_state(|| start_secs);

    {
        let countdown = countdown.clone();
        let remaining = remaining.clone();
        let on_finish = on_finish.clone();

        use_effect_with((), move |_| {
            let ticker_countdown = countdown.clone();
            let interval = Interval::new(TICK_MS, move || {
                let tick = ticker_countdown.borrow_mut().tick();
                match tick {
                    CountdownTick::Remaining(secs) => remaining.set(secs),
                    CountdownTick::Expired => {
                        remaining.set(0);
                        Logger::debug_with_component("countdown-hook", "Countdown expired");
                        on_finish.emit(());
                    }
                    CountdownTick::Stopped => {}
                }
            });

            move || {
                countdown.borrow_mut().cancel();
                drop(interval);
                Logger::debug_with_component("countdown-hook", "Countdown cleaned up");
            }
        });
    }

    let finish_now = {
        let countdown = countdown.clone();
        Callback::from(move |_| {
            let fire = countdown.borrow_mut().reset_now();
            if fire {
                on_finish.emit(());
            }
        })
    };

    let status_text = countdown.borrow().status_text();

    UseCountdownResult {
        remaining: *remaining,
        status_text,
        finish_now,
    }
}
