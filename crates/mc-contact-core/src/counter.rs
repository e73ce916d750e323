/// Character counter shown under the message textarea.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub max_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterLevel {
    Normal,
    Warning,
    Critical,
}

impl CounterLevel {
    pub fn color(self) -> &'static str {
        match self {
            CounterLevel::Normal => "#666",
            CounterLevel::Warning => "#f39c12",
            CounterLevel::Critical => "#e74c3c",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterReading {
    pub text: String,
    pub level: CounterLevel,
}

impl CharCounter {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }

    /// Lengths are in UTF-16 code units, the unit `maxlength` enforces.
    pub fn read(&self, value: &str) -> CounterReading {
        let length = value.encode_utf16().count();
        let remaining = self.max_length.saturating_sub(length);
        let level = if remaining < 50 {
            CounterLevel::Critical
        } else if remaining < 100 {
            CounterLevel::Warning
        } else {
            CounterLevel::Normal
        };
        CounterReading {
            text: format!("{length}/{}", self.max_length),
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_follow_remaining_characters() {
        let counter = CharCounter::new(500);
        assert_eq!(counter.read("").level, CounterLevel::Normal);
        assert_eq!(counter.read(&"a".repeat(400)).level, CounterLevel::Normal);
        assert_eq!(counter.read(&"a".repeat(401)).level, CounterLevel::Warning);
        assert_eq!(counter.read(&"a".repeat(451)).level, CounterLevel::Critical);
        assert_eq!(counter.read(&"a".repeat(500)).text, "500/500");
    }

    #[test]
    fn counts_utf16_units() {
        let counter = CharCounter::new(500);
        assert_eq!(counter.read("ação").text, "4/500");
        assert_eq!(counter.read("🪵").text, "2/500");
    }
}
