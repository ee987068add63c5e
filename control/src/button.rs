//! Manage button's state.

use crate::event::{Event, Handler, Split};
use crate::range::Range;

/// Use this to hold state of a single button on a shared analog line.
///
/// The button is passive. It neither reads the line nor measures time, its
/// group decides when it is pressed, released, clicked or long pressed.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button<H> {
    range: Range,
    pressed: bool,
    long_pressed: bool,
    handler: H,
}

impl<H: Handler> Button<H> {
    pub fn new(range: Range, handler: H) -> Self {
        Self {
            range,
            pressed: false,
            long_pressed: false,
            handler,
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn contains(&self, value: u16) -> bool {
        self.range.contains(value)
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_long_pressed(&self) -> bool {
        self.long_pressed
    }

    pub(crate) fn press(&mut self) {
        self.pressed = true;
        self.handler.handle(Event::Pressed);
    }

    pub(crate) fn release(&mut self) {
        self.pressed = false;
        self.long_pressed = false;
        self.handler.handle(Event::Released);
    }

    pub(crate) fn mark_long_pressed(&mut self) {
        if self.long_pressed {
            return;
        }
        self.long_pressed = true;
        self.handler.handle(Event::LongPressed);
    }

    pub(crate) fn click(&mut self) {
        self.handler.handle(Event::Clicked);
    }
}

impl<C, L> Button<Split<C, L>>
where
    C: FnMut(),
    L: FnMut(),
{
    /// Button reporting only clicks and long presses, each to its own callback.
    pub fn split(range: Range, on_click: C, on_long_press: L) -> Self {
        Self::new(range, Split::new(on_click, on_long_press))
    }
}
