//! Character classification into half-alphabet substitution groups.

/// Substitution group of a single character.
///
/// Every `char` belongs to exactly one class. Only ASCII Latin letters are
/// mapped; digits, punctuation, whitespace and non-ASCII symbols (including
/// accented letters) are [`CharClass::Unmapped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `a`..=`m`
    LowerFirst,
    /// `n`..=`z`
    LowerSecond,
    /// `A`..=`M`
    UpperFirst,
    /// `N`..=`Z`
    UpperSecond,
    /// Passes through both directions unchanged.
    Unmapped,
}

impl CharClass {
    /// All four mapped classes, in alphabet order.
    pub const MAPPED: [CharClass; 4] = [
        CharClass::LowerFirst,
        CharClass::LowerSecond,
        CharClass::UpperFirst,
        CharClass::UpperSecond,
    ];

    /// Classifies a character.
    ///
    /// # Examples
    ///
    /// ```
    /// use splitshift::CharClass;
    ///
    /// assert_eq!(CharClass::of('a'), CharClass::LowerFirst);
    /// assert_eq!(CharClass::of('n'), CharClass::LowerSecond);
    /// assert_eq!(CharClass::of('M'), CharClass::UpperFirst);
    /// assert_eq!(CharClass::of('Z'), CharClass::UpperSecond);
    /// assert_eq!(CharClass::of('7'), CharClass::Unmapped);
    /// ```
    pub fn of(c: char) -> CharClass {
        match c {
            'a'..='m' => CharClass::LowerFirst,
            'n'..='z' => CharClass::LowerSecond,
            'A'..='M' => CharClass::UpperFirst,
            'N'..='Z' => CharClass::UpperSecond,
            _ => CharClass::Unmapped,
        }
    }

    /// First character of the half-alphabet, or `None` for unmapped.
    pub fn base(self) -> Option<char> {
        match self {
            CharClass::LowerFirst => Some('a'),
            CharClass::LowerSecond => Some('n'),
            CharClass::UpperFirst => Some('A'),
            CharClass::UpperSecond => Some('N'),
            CharClass::Unmapped => None,
        }
    }

    /// Whether the class is subject to substitution.
    pub fn is_mapped(self) -> bool {
        self != CharClass::Unmapped
    }
}
