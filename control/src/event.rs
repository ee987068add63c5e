//! Gestures reported to the consumer and the handlers receiving them.

/// Gesture recognized on a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Event {
    Pressed = 0,
    Released = 1,
    /// Released before reaching the long press threshold.
    Clicked = 2,
    /// Held past the long press threshold. Reported once per press.
    LongPressed = 3,
}

impl From<Event> for u8 {
    fn from(event: Event) -> Self {
        event as u8
    }
}

/// Consumer of button events.
///
/// Implemented for any `FnMut(Event)`, so a closure, a function pointer, or
/// `&mut dyn FnMut(Event)` can be used directly. Since all buttons of a group
/// share the handler type, the latter two are the way to give each button
/// its own logic.
pub trait Handler {
    fn handle(&mut self, event: Event);
}

impl<F> Handler for F
where
    F: FnMut(Event),
{
    fn handle(&mut self, event: Event) {
        self(event);
    }
}

/// Handler ignoring all events.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Silent;

impl Handler for Silent {
    fn handle(&mut self, _event: Event) {}
}

/// Pair of independent click and long press callbacks.
///
/// Pressed and released notifications are swallowed.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Split<C, L> {
    on_click: C,
    on_long_press: L,
}

impl<C, L> Split<C, L>
where
    C: FnMut(),
    L: FnMut(),
{
    pub fn new(on_click: C, on_long_press: L) -> Self {
        Self {
            on_click,
            on_long_press,
        }
    }
}

impl<C, L> Handler for Split<C, L>
where
    C: FnMut(),
    L: FnMut(),
{
    fn handle(&mut self, event: Event) {
        match event {
            Event::Clicked => (self.on_click)(),
            Event::LongPressed => (self.on_long_press)(),
            Event::Pressed | Event::Released => (),
        }
    }
}
