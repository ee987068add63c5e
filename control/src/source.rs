//! Collaborators providing time and raw readings of the analog line.

use core::convert::Infallible;

/// Identifier of the analog input shared by a group of buttons.
pub type Channel = u8;

/// Monotonic clock counting milliseconds.
///
/// The counter is expected to wrap around once it overflows `u32`.
pub trait Clock {
    fn now(&self) -> u32;
}

impl<F> Clock for F
where
    F: Fn() -> u32,
{
    fn now(&self) -> u32 {
        self()
    }
}

/// Source of instantaneous readings of an analog channel.
pub trait Sampler {
    type Error;

    /// # Errors
    ///
    /// Fails when the underlying converter could not provide a reading.
    fn read(&mut self, channel: Channel) -> Result<u16, Self::Error>;
}

impl<F> Sampler for F
where
    F: FnMut(Channel) -> u16,
{
    type Error = Infallible;

    fn read(&mut self, channel: Channel) -> Result<u16, Self::Error> {
        Ok(self(channel))
    }
}
