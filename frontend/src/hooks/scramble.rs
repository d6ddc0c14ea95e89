use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config::SCRAMBLE_TICK_MS;
use crate::motion::scramble::Scrambler;

/// Current frame of a scramble reveal of `text`.
///
/// Each new `text` starts a fresh reveal. The interval is dropped as soon as
/// the reveal completes, or earlier if the text changes or the caller unmounts.
#[hook]
pub fn use_scramble(text: &str) -> String {
    let display = use_state(String::new);

    {
        let display = display.clone();
        use_effect_with_deps(
            move |text: &String| {
                let mut scrambler = Scrambler::new(text);
                display.set(scrambler.start(&mut rand::thread_rng()));

                let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if !scrambler.is_complete() {
                    let scrambler = Rc::new(RefCell::new(scrambler));
                    let handle = interval.clone();
                    let tick = Interval::new(SCRAMBLE_TICK_MS, move || {
                        let mut scrambler = scrambler.borrow_mut();
                        display.set(scrambler.tick(&mut rand::thread_rng()));
                        if scrambler.is_complete() {
                            debug!("scramble of {:?} done after {} ticks", scrambler.target(), scrambler.ticks());
                            handle.borrow_mut().take();
                        }
                    });
                    *interval.borrow_mut() = Some(tick);
                }

                move || {
                    interval.borrow_mut().take();
                }
            },
            text.to_string(),
        );
    }

    (*display).clone()
}
