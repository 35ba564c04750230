//! Number formatting for the textual `(x y z w)` form.

/// Renders one vector component.
///
/// Implemented for [`DecimalFormat`] and for any `Fn(f32) -> String`.
pub trait NumberFormat {
    fn format(&self, value: f32) -> String;
}

impl<F: Fn(f32) -> String> NumberFormat for F {
    fn format(&self, value: f32) -> String {
        self(value)
    }
}

/// How [`DecimalFormat`] lays out digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `1.500E0`
    Scientific,
    /// `1.500`
    Fixed,
}

/// Decimal formatter with a fixed number of fraction digits.
///
/// Every output is accepted by `f32::from_str`, so formatted vectors parse
/// back (to the chosen precision).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalFormat {
    pub notation: Notation,
    pub precision: usize,
}

impl DecimalFormat {
    pub const fn scientific(precision: usize) -> Self {
        Self {
            notation: Notation::Scientific,
            precision,
        }
    }

    pub const fn fixed(precision: usize) -> Self {
        Self {
            notation: Notation::Fixed,
            precision,
        }
    }
}

impl Default for DecimalFormat {
    fn default() -> Self {
        Self::scientific(3)
    }
}

impl NumberFormat for DecimalFormat {
    fn format(&self, value: f32) -> String {
        match self.notation {
            Notation::Scientific => format!("{:.*E}", self.precision, value),
            Notation::Fixed => format!("{:.*}", self.precision, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_scientific() {
        let fmt = DecimalFormat::default();
        assert_eq!(fmt.format(1.5), "1.500E0");
        assert_eq!(fmt.format(-0.0025), "-2.500E-3");
        assert_eq!("1.500E0".parse::<f32>().unwrap(), 1.5);
    }

    #[test]
    fn test_fixed() {
        assert_eq!(DecimalFormat::fixed(2).format(3.14159), "3.14");
    }

    #[test]
    fn test_closure_formatter() {
        let fmt = |v: f32| format!("<{}>", v);
        assert_eq!(fmt.format(2.0), "<2>");
    }
}
