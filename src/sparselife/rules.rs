//! Outer-totalistic birth/survival rules, Conway's B3/S23 by default.

use std::fmt;
use std::str::FromStr;

use crate::error::RuleParseError;

/// Birth and survival conditions keyed by live-neighbour count (0..=8).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    birth: u16,
    survival: u16,
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

impl Rule {
    pub const fn conway() -> Self {
        Self {
            birth: 1 << 3,
            survival: (1 << 2) | (1 << 3),
        }
    }

    /// Build a rule from explicit neighbour counts. Counts above 8 are ignored.
    pub fn from_counts(birth: &[u8], survival: &[u8]) -> Self {
        let mask = |counts: &[u8]| {
            counts
                .iter()
                .filter(|&&n| n <= 8)
                .fold(0u16, |acc, &n| acc | (1 << n))
        };
        Self {
            birth: mask(birth),
            survival: mask(survival),
        }
    }

    /// Next state of a cell given its current state and live-neighbour count.
    #[inline(always)]
    pub fn next_alive(&self, alive: bool, neighbors: u8) -> bool {
        let table = if alive { self.survival } else { self.birth };
        neighbors <= 8 && (table >> neighbors) & 1 == 1
    }

    /// Parse `B<digits>/S<digits>` (case-insensitive, either order).
    pub fn parse(text: &str) -> Result<Self, RuleParseError> {
        let mut birth = None;
        let mut survival = None;
        for part in text.trim().split('/') {
            let mut chars = part.chars();
            let slot = match chars.next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut birth,
                Some('S') => &mut survival,
                _ => return Err(RuleParseError::Syntax(text.to_string())),
            };
            if slot.is_some() {
                return Err(RuleParseError::Syntax(text.to_string()));
            }
            let mut counts = Vec::new();
            for c in chars {
                match c.to_digit(10) {
                    Some(d) if d <= 8 => counts.push(d as u8),
                    _ => return Err(RuleParseError::Count(c)),
                }
            }
            *slot = Some(counts);
        }
        match (birth, survival) {
            (Some(b), Some(s)) => Ok(Self::from_counts(&b, &s)),
            _ => Err(RuleParseError::Syntax(text.to_string())),
        }
    }
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in 0..=8u8 {
            if (self.birth >> n) & 1 == 1 {
                write!(f, "{n}")?;
            }
        }
        f.write_str("/S")?;
        for n in 0..=8u8 {
            if (self.survival >> n) & 1 == 1 {
                write!(f, "{n}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Rule;

    fn expected_conway(alive: bool, neighbors: u8) -> bool {
        if alive {
            neighbors == 2 || neighbors == 3
        } else {
            neighbors == 3
        }
    }

    #[test]
    fn conway_matches_reference() {
        let rule = Rule::conway();
        for alive in [false, true] {
            for n in 0..=8u8 {
                assert_eq!(
                    rule.next_alive(alive, n),
                    expected_conway(alive, n),
                    "alive={alive} neighbors={n}"
                );
            }
        }
    }

    #[test]
    fn parse_round_trips_through_display() {
        let rule: Rule = "B36/S23".parse().unwrap();
        assert_eq!(rule.to_string(), "B36/S23");
        assert!(rule.next_alive(false, 6));
        assert_eq!(Rule::parse("s23/b3").unwrap(), Rule::conway());
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Rule::parse("B3").is_err());
        assert!(Rule::parse("B9/S23").is_err());
        assert!(Rule::parse("B3/B3").is_err());
        assert!(Rule::parse("X3/S23").is_err());
    }
}
