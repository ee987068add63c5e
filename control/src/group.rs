//! Polling and classification of buttons sharing one analog line.

use fugit::MillisDurationU32;
use heapless::Vec;

use crate::button::Button;
use crate::configuration::Configuration;
use crate::event::Handler;
use crate::log;
use crate::source::{Channel, Clock, Sampler};

/// Buttons connected to a single analog input.
///
/// Call `poll` as often as possible from the main loop. The line is sampled
/// at most once per sampling interval, the reading is matched against the
/// ranges of registered buttons and the matching button is driven through
/// press, long press and release.
///
/// Since a ladder can report only one button at a time, at most one button
/// of the group is pressed at any moment. The group, not the button, owns the
/// timestamp of the ongoing press.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonGroup<H, const N: usize> {
    channel: Channel,
    configuration: Configuration,
    last_sample_time: Option<u32>,
    press_start_time: u32,
    buttons: Vec<Button<H>, N>,
}

impl<H: Handler, const N: usize> ButtonGroup<H, N> {
    #[must_use]
    pub fn new(channel: Channel) -> Self {
        Self::with_configuration(channel, Configuration::default())
    }

    #[must_use]
    pub fn with_configuration(channel: Channel, configuration: Configuration) -> Self {
        Self {
            channel,
            configuration,
            last_sample_time: None,
            press_start_time: 0,
            buttons: Vec::new(),
        }
    }

    /// Register a button. Buttons registered earlier take priority when
    /// their ranges overlap.
    ///
    /// # Errors
    ///
    /// Returns the button back when the group is already at its capacity.
    pub fn add_button(&mut self, button: Button<H>) -> Result<(), Button<H>> {
        if self
            .buttons
            .iter()
            .any(|registered| registered.range().overlaps(&button.range()))
        {
            log::warning!(
                "Range {} overlaps an existing button on channel {}",
                button.range(),
                self.channel
            );
        }

        self.buttons.push(button).map_err(|button| {
            log::warning!("Group on channel {} is full", self.channel);
            button
        })?;

        log::info!(
            "Registered button {} on channel {}",
            self.buttons.len() - 1,
            self.channel
        );
        Ok(())
    }

    /// Analog input shared by the buttons.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Timing policy applied to every poll.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Registered buttons in the order of their priority.
    pub fn buttons(&self) -> &[Button<H>] {
        &self.buttons
    }

    /// Index of the currently pressed button.
    pub fn active(&self) -> Option<usize> {
        self.buttons.iter().position(Button::is_pressed)
    }

    /// Whether a press began less than the debounce duration ago.
    pub fn is_debouncing(&self, now: u32) -> bool {
        self.active().is_some()
            && elapsed(now, self.press_start_time) < self.configuration.debounce
    }

    /// Sample the line if the sampling interval elapsed and update buttons.
    ///
    /// # Errors
    ///
    /// Passes through the failure of the sampler. State of buttons is left
    /// untouched and the next attempt is made after the sampling interval.
    pub fn poll<C, S>(&mut self, clock: &C, sampler: &mut S) -> Result<(), S::Error>
    where
        C: Clock,
        S: Sampler,
    {
        let now = clock.now();

        if let Some(last_sample_time) = self.last_sample_time {
            if elapsed(now, last_sample_time) < self.configuration.sampling_interval {
                return Ok(());
            }
        }

        self.last_sample_time = Some(now);
        let value = sampler.read(self.channel)?;
        self.process(now, value);

        Ok(())
    }

    fn process(&mut self, now: u32, value: u16) {
        // Contact bounce right after the press would be seen as a release or
        // as a neighbouring button, so the whole group waits.
        if self.is_debouncing(now) {
            return;
        }

        let matching = self.buttons.iter().position(|button| button.contains(value));

        if let Some(active) = self.active() {
            if matching != Some(active) {
                self.release(active, now);
            }
        }

        if let Some(index) = matching {
            let held = elapsed(now, self.press_start_time);
            let button = &mut self.buttons[index];
            if !button.is_pressed() {
                log::debug!("Button {} pressed at {}", index, now);
                self.press_start_time = now;
                button.press();
            } else if !button.is_long_pressed() && held >= self.configuration.long_press {
                log::debug!("Button {} long pressed after {}", index, held);
                button.mark_long_pressed();
            }
        }
    }

    fn release(&mut self, index: usize, now: u32) {
        let held = elapsed(now, self.press_start_time);
        let button = &mut self.buttons[index];

        log::debug!("Button {} released after {}", index, held);
        button.release();
        if held < self.configuration.long_press {
            log::debug!("Button {} clicked", index);
            button.click();
        }

        self.press_start_time = 0;
    }
}

fn elapsed(now: u32, since: u32) -> MillisDurationU32 {
    MillisDurationU32::millis(now.wrapping_sub(since))
}
