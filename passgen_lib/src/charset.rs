use rand::distr::Uniform;

use crate::config::GenerationConfig;
use crate::error::ConfigurationError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// Punctuation drawn by the generator. Changing it changes generated output
/// for a fixed seed.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Pool concatenation order.
    pub const ALL: [Self; 4] = [Self::Lowercase, Self::Uppercase, Self::Digit, Self::Symbol];

    #[must_use]
    pub const fn chars(self) -> &'static str {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digit => DIGITS,
            Self::Symbol => SYMBOLS,
        }
    }

    const fn enabled(self, config: &GenerationConfig) -> bool {
        match self {
            Self::Lowercase => config.use_lowercase,
            Self::Uppercase => config.use_uppercase,
            Self::Digit => config.use_digits,
            Self::Symbol => config.use_symbols,
        }
    }

    /// Classifies any character for strength scoring.
    ///
    /// This is broader than the generator sets: case and digits follow
    /// Unicode, and every non alphanumeric character counts as a symbol.
    /// Letters without case return `None`.
    #[must_use]
    pub fn of(c: char) -> Option<Self> {
        if c.is_lowercase() {
            Some(Self::Lowercase)
        } else if c.is_uppercase() {
            Some(Self::Uppercase)
        } else if c.is_numeric() {
            Some(Self::Digit)
        } else if c.is_alphanumeric() {
            None
        } else {
            Some(Self::Symbol)
        }
    }
}

/// The characters eligible for a single generation call.
#[derive(Debug, Clone)]
pub struct CharacterPool {
    chars: Vec<char>,
    index: Uniform<usize>,
}

impl CharacterPool {
    pub fn build(config: &GenerationConfig) -> Result<Self, ConfigurationError> {
        let classes = CharacterClass::ALL
            .into_iter()
            .filter(|class| class.enabled(config))
            .collect::<Vec<_>>();

        if classes.is_empty() {
            return Err(ConfigurationError::NoCharacterSets);
        }

        let chars = classes
            .into_iter()
            .flat_map(|class| class.chars().chars())
            .filter(|c| !config.exclude_chars.contains(c))
            .collect::<Vec<char>>();

        let index =
            Uniform::new(0, chars.len()).map_err(|_| ConfigurationError::AllCharactersExcluded)?;

        log::debug!("Character pool built with {} characters", chars.len());

        Ok(Self { chars, index })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a built pool.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    #[must_use]
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    pub(crate) const fn index(&self) -> &Uniform<usize> {
        &self.index
    }

    /// Entropy in bits of a password of `length` uniform draws from this pool.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn entropy_bits(&self, length: usize) -> f64 {
        length as f64 * (self.chars.len() as f64).log2()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_full_pool_order() -> Result<(), ConfigurationError> {
        let pool = CharacterPool::build(&GenerationConfig::default())?;

        assert_eq!(pool.len(), 26 + 26 + 10 + 26);

        let expected = [LOWERCASE, UPPERCASE, DIGITS, SYMBOLS].concat();
        assert_eq!(pool.as_chars().iter().collect::<String>(), expected);

        Ok(())
    }

    #[test]
    fn test_symbols_are_unique_ascii() {
        let mut symbols = SYMBOLS.chars().collect::<Vec<_>>();
        symbols.sort_unstable();
        symbols.dedup();

        assert_eq!(symbols.len(), 26);
        assert!(symbols.iter().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn test_exclusion_keeps_order() -> Result<(), ConfigurationError> {
        let config = GenerationConfig::default()
            .lowercase(false)
            .uppercase(false)
            .symbols(false)
            .exclude("13579".chars());

        let pool = CharacterPool::build(&config)?;

        assert_eq!(pool.as_chars(), ['0', '2', '4', '6', '8']);

        Ok(())
    }

    #[test]
    fn test_exclusion_order_independent() -> Result<(), ConfigurationError> {
        let a = CharacterPool::build(&GenerationConfig::default().exclude("0O1l".chars()))?;
        let b = CharacterPool::build(&GenerationConfig::default().exclude("l1O0".chars()))?;

        assert_eq!(a.as_chars(), b.as_chars());
        assert!(!a.contains('0'));
        assert!(!a.contains('O'));
        assert!(!a.contains('1'));
        assert!(!a.contains('l'));
        assert_eq!(a.len(), 88 - 4);

        Ok(())
    }

    #[test]
    fn test_no_classes() {
        let config = GenerationConfig::default()
            .lowercase(false)
            .uppercase(false)
            .digits(false)
            .symbols(false);

        let error = CharacterPool::build(&config).unwrap_err();

        assert_eq!(error, ConfigurationError::NoCharacterSets);
    }

    #[test]
    fn test_everything_excluded() {
        let config = GenerationConfig::default()
            .lowercase(false)
            .uppercase(false)
            .symbols(false)
            .exclude(DIGITS.chars());

        let error = CharacterPool::build(&config).unwrap_err();

        assert_eq!(error, ConfigurationError::AllCharactersExcluded);
    }

    #[test]
    fn test_entropy() -> Result<(), ConfigurationError> {
        let config = GenerationConfig::default()
            .lowercase(false)
            .uppercase(false)
            .symbols(false)
            .exclude("23456789".chars());

        let pool = CharacterPool::build(&config)?;

        assert_eq!(pool.len(), 2);
        assert!((pool.entropy_bits(10) - 10.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[test]
    fn test_classify() {
        assert_eq!(CharacterClass::of('a'), Some(CharacterClass::Lowercase));
        assert_eq!(CharacterClass::of('Z'), Some(CharacterClass::Uppercase));
        assert_eq!(CharacterClass::of('7'), Some(CharacterClass::Digit));
        assert_eq!(CharacterClass::of('!'), Some(CharacterClass::Symbol));
        assert_eq!(CharacterClass::of('~'), Some(CharacterClass::Symbol));
        assert_eq!(CharacterClass::of(' '), Some(CharacterClass::Symbol));
        assert_eq!(CharacterClass::of('é'), Some(CharacterClass::Lowercase));
        assert_eq!(CharacterClass::of('漢'), None);
    }
}
