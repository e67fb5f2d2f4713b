//! The device bus: demultiplexes the 16-slot port window `[240, 256)` onto
//! the MMIO peripherals.
//!
//! Port routing here is a small `match` on `addr - 240` rather than a chain
//! of equality tests: the port space is a closed 16-element set, so an
//! exhaustive match is both clearer and branch-free to reason about.
//! Unimplemented ports read as 0 and discard writes; this keeps every port
//! address defined.

use crate::peripherals::{CharOutput, Controller, Framebuffer, NumberDisplay, RandomByteSource};

/// The 16-slot memory-mapped port window and the devices it addresses.
pub struct DeviceBus<R: RandomByteSource> {
    pub framebuffer: Framebuffer,
    pub char_output: CharOutput,
    pub number_display: NumberDisplay,
    pub controller: Controller,
    rng: R,
}

impl<R: RandomByteSource> DeviceBus<R> {
    pub fn new(rng: R) -> DeviceBus<R> {
        DeviceBus {
            framebuffer: Framebuffer::new(),
            char_output: CharOutput::new(),
            number_display: NumberDisplay::new(),
            controller: Controller::new(),
            rng,
        }
    }

    /// Read port `addr - 240`. `addr` must be in `[240, 256)`.
    pub fn read(&mut self, addr: u8) -> u8 {
        match addr - 240 {
            4 => self.framebuffer.load_pixel(),
            14 => self.rng.next_byte(),
            15 => self.controller.read(),
            _ => 0,
        }
    }

    /// Write `value` to port `addr - 240`. `addr` must be in `[240, 256)`.
    pub fn write(&mut self, addr: u8, value: u8) {
        match addr - 240 {
            0 => self.framebuffer.set_cursor_x(value),
            1 => self.framebuffer.set_cursor_y(value),
            2 => self.framebuffer.draw_pixel(),
            3 => self.framebuffer.clear_pixel(),
            7 => self.char_output.write(value),
            10 => self.number_display.show(value),
            11 => self.number_display.clear(),
            12 => self.number_display.set_signed(true),
            13 => self.number_display.set_signed(false),
            _ => {}
        }
    }

    pub fn reset(&mut self) {
        self.framebuffer.reset();
        self.char_output.reset();
        self.number_display.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peripherals::Rng;

    fn bus() -> DeviceBus<Rng> {
        DeviceBus::new(Rng::new())
    }

    #[test]
    fn draw_pixel_then_load_pixel_round_trips() {
        let mut b = bus();
        b.write(240, 3); // pixel_x
        b.write(241, 5); // pixel_y
        b.write(242, 0); // draw_pixel
        b.write(240, 3);
        b.write(241, 5);
        assert_eq!(b.read(244), 1); // load_pixel
    }

    #[test]
    fn write_char_appends_to_char_output() {
        let mut b = bus();
        b.write(247, 8); // 'h'
        assert_eq!(b.char_output.contents(), "h");
    }

    #[test]
    fn show_number_in_signed_mode() {
        let mut b = bus();
        b.write(252, 0); // signed_mode (write-any-value)
        b.write(250, 200); // show_number
        assert_eq!(b.number_display.value(), Some(-56));
    }

    #[test]
    fn controller_input_reads_zero() {
        let mut b = bus();
        assert_eq!(b.read(255), 0);
    }

    #[test]
    fn unimplemented_ports_read_zero_and_discard_writes() {
        let mut b = bus();
        b.write(245, 77); // no device at port 5
        assert_eq!(b.read(245), 0);
        b.write(246, 77); // no device at port 6
        assert_eq!(b.read(246), 0);
    }

    #[test]
    fn reset_clears_device_state_but_not_the_rng() {
        let mut b = bus();
        b.write(247, 8);
        b.reset();
        assert_eq!(b.char_output.contents(), "");
    }
}
