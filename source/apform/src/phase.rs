use num_complex::Complex64;

/// A per-qubit power of the imaginary unit. Arithmetic wraps and reads
/// reduce modulo 4, so the raw byte never escapes the `[0, 4)` range for
/// long.
#[must_use]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PhasePower(u8);

impl PhasePower {
    pub const ZERO: PhasePower = PhasePower(0);

    pub fn new(value: u8) -> Self {
        PhasePower(value % 4)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0 % 4
    }

    #[must_use]
    pub fn is_even(self) -> bool {
        self.0 & 1 == 0
    }

    #[must_use]
    pub fn is_odd(self) -> bool {
        self.0 & 1 != 0
    }

    /// The exponent, negated modulo 4 when `negate` holds.
    #[must_use]
    pub fn negated_if(self, negate: bool) -> u8 {
        if negate {
            (4 - self.value()) % 4
        } else {
            self.value()
        }
    }
}

impl std::ops::AddAssign<u8> for PhasePower {
    fn add_assign(&mut self, value: u8) {
        self.0 = self.0.wrapping_add(value) % 4;
    }
}

/// Maps an exponent of `i` to the unit it denotes: `[1, i, -1, -i]`.
#[must_use]
pub fn phase_factor(exponent: u8) -> Complex64 {
    match exponent % 4 {
        0 => Complex64::new(1.0, 0.0),
        1 => Complex64::new(0.0, 1.0),
        2 => Complex64::new(-1.0, 0.0),
        _ => Complex64::new(0.0, -1.0),
    }
}
