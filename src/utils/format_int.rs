use std::fmt;

/// Integer displayed with `'` between groups of three digits.
pub struct NiceInt(i128);

impl NiceInt {
    pub fn from(value: impl Into<i128>) -> Self {
        Self(value.into())
    }

    pub fn from_usize(value: usize) -> Self {
        Self(value as i128)
    }
}

impl fmt::Display for NiceInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        if self.0 < 0 {
            write!(f, "-")?;
        }
        for (i, digit) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                write!(f, "'")?;
            }
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}
