//! Recognition of button gestures on a single analog line.
//!
//! Multiple buttons may share one analog input through a resistor ladder,
//! each of them pulling the line into its own range of readings. This crate
//! turns a stream of such noisy readings into presses, releases, clicks
//! and long presses.
//!
//! It is targeted to run in a firmware main loop, but it does not touch any
//! hardware itself. The clock and the analog readings are provided by the
//! caller:
//!
//! ```text
//!   [ Clock ]      [ Sampler ]
//!       |               |
//!       | (now)         | (reading)
//!       V               V
//!     [     ButtonGroup     ]
//!       |       |       |
//!   [Button] [Button] [Button]
//!       |       |       |
//!       V       V       V
//!    (Event)  (Event)  (Event)
//! ```
//!
//! ```
//! use analog_buttons_control::{Button, ButtonGroup, Channel, Event, Range};
//!
//! fn on_play(_event: Event) {}
//! fn on_stop(_event: Event) {}
//!
//! let mut group: ButtonGroup<fn(Event), 2> = ButtonGroup::new(0);
//! assert!(group
//!     .add_button(Button::new(Range::new(0, 500), on_play as fn(Event)))
//!     .is_ok());
//! assert!(group
//!     .add_button(Button::new(Range::around(800, 100), on_stop as fn(Event)))
//!     .is_ok());
//!
//! let now = 0_u32;
//! let reading = 220_u16;
//! assert!(group.poll(&|| now, &mut |_: Channel| reading).is_ok());
//! assert_eq!(group.active(), Some(0));
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]

mod button;
mod configuration;
mod event;
mod group;
mod log;
mod range;
mod source;

pub use button::Button;
pub use configuration::Configuration;
pub use event::{Event, Handler, Silent, Split};
pub use group::ButtonGroup;
pub use range::Range;
pub use source::{Channel, Clock, Sampler};
