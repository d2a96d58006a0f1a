//! Waiting for the real clock to reach the next tick
//!
//! The wait first polls in a tight loop, yielding every `spin_yield_every`
//! polls, and then sleeps. Sleeps start at 50 µs and double up to one tick.

use std::hint;
use std::thread;
use std::time::Duration;

use crate::options::Options;

const FIRST_PAUSE: Duration = Duration::from_micros(50);
const LONGEST_PAUSE: Duration = Duration::from_millis(1);

/// Block until `read_tick` reports a tick after `last_tick`, and return it
pub(crate) fn wait_next_tick<F>(last_tick: i64, options: &Options, read_tick: F) -> i64
where
    F: Fn() -> i64,
{
    let busy_polls = if options.spin_enabled() {
        options.spin_loops()
    } else {
        0
    };
    let yield_every = options.spin_yield_every();
    let mut polls = 0u32;
    let mut pause = FIRST_PAUSE;

    loop {
        let tick = read_tick();
        if tick > last_tick {
            return tick;
        }

        if polls < busy_polls {
            polls += 1;
            if yield_every != 0 && polls % yield_every == 0 {
                thread::yield_now();
            } else {
                hint::spin_loop();
            }
        } else {
            thread::sleep(pause);
            pause = (pause * 2).min(LONGEST_PAUSE);
        }
    }
}
