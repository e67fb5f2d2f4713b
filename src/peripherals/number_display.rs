//! The numeric display device (ports 10-13).

/// An optional numeric readout with a signed/unsigned rendering mode.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
pub struct NumberDisplay {
    value: Option<i16>,
    signed: bool,
}

impl NumberDisplay {
    pub fn new() -> NumberDisplay {
        NumberDisplay {
            value: None,
            signed: false,
        }
    }

    /// Latch a byte per the port 10 contract: in signed mode, values `>=
    /// 128` wrap to their negative two's-complement reading.
    pub fn show(&mut self, value: u8) {
        self.value = Some(if self.signed && value >= 128 {
            value as i16 - 256
        } else {
            value as i16
        });
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    pub fn set_signed(&mut self, signed: bool) {
        self.signed = signed;
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// The currently latched value, if any.
    pub fn value(&self) -> Option<i16> {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = None;
        self.signed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_mode_wraps_high_values_negative() {
        let mut d = NumberDisplay::new();
        d.set_signed(true);
        d.show(200);
        assert_eq!(d.value(), Some(-56));
    }

    #[test]
    fn unsigned_mode_keeps_raw_byte() {
        let mut d = NumberDisplay::new();
        d.show(200);
        assert_eq!(d.value(), Some(200));
    }

    #[test]
    fn clear_removes_the_value() {
        let mut d = NumberDisplay::new();
        d.show(10);
        d.clear();
        assert_eq!(d.value(), None);
    }

    #[test]
    fn reset_clears_value_and_mode() {
        let mut d = NumberDisplay::new();
        d.set_signed(true);
        d.show(10);
        d.reset();
        assert_eq!(d.value(), None);
        assert!(!d.is_signed());
    }
}
