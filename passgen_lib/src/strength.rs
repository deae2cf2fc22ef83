use std::fmt::Display;

use serde::Serialize;

use crate::charset::CharacterClass;

const LENGTH_STEPS: [(usize, u8); 3] = [(8, 25), (12, 10), (16, 5)];
const CLASS_POINTS: u8 = 15;
const MAX_SCORE: u8 = 100;

const STRONG_THRESHOLD: u8 = 80;
const MEDIUM_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= STRONG_THRESHOLD {
            Self::Strong
        } else if score >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Weak
        }
    }
}

impl Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        };

        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    /// Length in characters.
    pub length: usize,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub score: u8,
    pub label: Strength,
}

impl StrengthReport {
    /// Number of character classes present, from 0 to 4.
    #[must_use]
    pub fn diversity(&self) -> u8 {
        [self.has_lower, self.has_upper, self.has_digit, self.has_symbol]
            .into_iter()
            .map(u8::from)
            .sum()
    }

    /// Hints on how the password could score higher.
    #[must_use]
    pub fn suggestions(&self) -> Vec<&'static str> {
        let mut suggestions = Vec::new();

        if self.length < 12 {
            suggestions.push("Use at least 12 characters");
        } else if self.length < 16 {
            suggestions.push("Use 16 or more characters for maximum length score");
        }

        if !self.has_lower {
            suggestions.push("Add lowercase letters");
        }
        if !self.has_upper {
            suggestions.push("Add uppercase letters");
        }
        if !self.has_digit {
            suggestions.push("Add digits");
        }
        if !self.has_symbol {
            suggestions.push("Add symbols");
        }

        suggestions
    }
}

/// Scores any string from 0 to 100. Never fails and has no hidden state.
#[must_use]
pub fn score(password: &str) -> StrengthReport {
    let mut length = 0;
    let (mut has_lower, mut has_upper, mut has_digit, mut has_symbol) = (false, false, false, false);

    for c in password.chars() {
        length += 1;

        match CharacterClass::of(c) {
            Some(CharacterClass::Lowercase) => has_lower = true,
            Some(CharacterClass::Uppercase) => has_upper = true,
            Some(CharacterClass::Digit) => has_digit = true,
            Some(CharacterClass::Symbol) => has_symbol = true,
            None => {}
        }
    }

    let length_score: u8 = LENGTH_STEPS
        .iter()
        .filter(|(min, _)| length >= *min)
        .map(|(_, points)| points)
        .sum();

    let classes = [has_lower, has_upper, has_digit, has_symbol]
        .into_iter()
        .filter(|present| *present)
        .count();

    // NOTE: At most 4 classes, cast cannot truncate
    #[allow(clippy::cast_possible_truncation)]
    let class_score = classes as u8 * CLASS_POINTS;

    let score = length_score.saturating_add(class_score).min(MAX_SCORE);

    StrengthReport {
        length,
        has_lower,
        has_upper,
        has_digit,
        has_symbol,
        score,
        label: Strength::from_score(score),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use paste::paste;

    macro_rules! test_label {
        ($score:literal, $label:ident) => {
            paste! {
                #[test]
                fn [<test_label_ $score>]() {
                    assert_eq!(Strength::from_score($score), Strength::$label);
                }
            }
        };
    }

    test_label!(0, Weak);
    test_label!(59, Weak);
    test_label!(60, Medium);
    test_label!(79, Medium);
    test_label!(80, Strong);
    test_label!(100, Strong);

    #[test]
    fn test_empty() {
        let report = score("");

        assert_eq!(report.score, 0);
        assert_eq!(report.length, 0);
        assert_eq!(report.label, Strength::Weak);
        assert!(!report.has_lower);
        assert!(!report.has_upper);
        assert!(!report.has_digit);
        assert!(!report.has_symbol);
        assert_eq!(report.diversity(), 0);
    }

    #[test]
    fn test_all_classes() {
        let report = score("MyPassword123!");

        assert_eq!(report.length, 14);
        assert!(report.has_lower);
        assert!(report.has_upper);
        assert!(report.has_digit);
        assert!(report.has_symbol);
        assert_eq!(report.diversity(), 4);
        assert_eq!(report.score, 95);
        assert_eq!(report.label, Strength::Strong);
    }

    #[test]
    fn test_maximum() {
        let report = score("MyStr0ng!P@ssw0rd");

        assert_eq!(report.score, 100);
        assert!(report.suggestions().is_empty());
    }

    #[test]
    fn test_weak_below_strong() {
        let weak = score("abc");
        let strong = score("MyStr0ng!P@ssw0rd");

        assert_eq!(weak.score, 15);
        assert_eq!(weak.label, Strength::Weak);
        assert!(strong.score > weak.score);
    }

    #[test]
    fn test_length_steps() {
        assert_eq!(score("aaaaaaa").score, 15);
        assert_eq!(score("aaaaaaaa").score, 40);
        assert_eq!(score("aaaaaaaaaaaa").score, 50);
        assert_eq!(score("aaaaaaaaaaaaaaaa").score, 55);
        assert_eq!(score(&"a".repeat(200)).score, 55);
    }

    #[test]
    fn test_score_exact_thresholds() {
        // 25 + 10 + 15 + 15 = 65
        assert_eq!(score("abcdefGHIJKL").label, Strength::Medium);
        // 25 + 10 + 5 + 15 + 15 + 15 = 85
        assert_eq!(score("abcdefGHIJKL1234").label, Strength::Strong);
        // 25 + 15 + 15 = 55
        assert_eq!(score("abcdEFGH").label, Strength::Weak);
    }

    #[test]
    fn test_score_lands_on_thresholds() {
        let medium = score("aA1!");
        assert_eq!(medium.score, 60);
        assert_eq!(medium.label, Strength::Medium);

        let strong = score("abcdefGHIJK1");
        assert_eq!(strong.score, 80);
        assert_eq!(strong.label, Strength::Strong);

        let below_medium = score("abcdEFGH");
        assert_eq!(below_medium.score, 55);
        assert_eq!(below_medium.label, Strength::Weak);

        let below_strong = score("abcdEFG1");
        assert_eq!(below_strong.score, 70);
        assert_eq!(below_strong.label, Strength::Medium);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let report = score("ééééééé");

        assert_eq!(report.length, 7);
        assert_eq!(report.score, 15);
    }

    #[test]
    fn test_unclassified_characters() {
        let report = score("漢字漢字漢字漢字");

        assert_eq!(report.length, 8);
        assert_eq!(report.diversity(), 0);
        assert_eq!(report.score, 25);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(score("correct horse"), score("correct horse"));
    }

    #[test]
    fn test_suggestions() {
        let report = score("abc");

        assert_eq!(
            report.suggestions(),
            [
                "Use at least 12 characters",
                "Add uppercase letters",
                "Add digits",
                "Add symbols"
            ]
        );
    }
}
