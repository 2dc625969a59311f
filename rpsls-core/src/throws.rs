//! Throw definitions and the fixed beats/beaten-by relation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RpslsError;

/// One of the five hand signs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Throw {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
    Lizard = 3,
    Spock = 4,
}

/// Entry of the relation table
#[derive(Clone, Debug)]
pub struct Relation {
    pub code: char,
    pub name: &'static str,
    /// Throws this one beats
    pub prey: [Throw; 2],
    /// Throws that beat this one. The first entry is the canonical counter.
    pub predators: [Throw; 2],
}

impl Relation {
    const fn new(code: char, name: &'static str, prey: [Throw; 2], predators: [Throw; 2]) -> Self {
        Self {
            code,
            name,
            prey,
            predators,
        }
    }
}

/// Relation table, indexed by `Throw as usize`
pub static RELATIONS: [Relation; 5] = [
    Relation::new(
        'r',
        "Rock",
        [Throw::Lizard, Throw::Scissors],
        [Throw::Spock, Throw::Paper],
    ),
    Relation::new(
        'p',
        "Paper",
        [Throw::Spock, Throw::Rock],
        [Throw::Lizard, Throw::Scissors],
    ),
    Relation::new(
        's',
        "Scissors",
        [Throw::Lizard, Throw::Paper],
        [Throw::Spock, Throw::Rock],
    ),
    Relation::new(
        'l',
        "Lizard",
        [Throw::Spock, Throw::Paper],
        [Throw::Rock, Throw::Scissors],
    ),
    Relation::new(
        'k',
        "Spock",
        [Throw::Rock, Throw::Scissors],
        [Throw::Lizard, Throw::Paper],
    ),
];

impl Throw {
    /// All throws in cycle order (Rock, Paper, Scissors, Lizard, Spock)
    pub const ALL: [Throw; 5] = [
        Throw::Rock,
        Throw::Paper,
        Throw::Scissors,
        Throw::Lizard,
        Throw::Spock,
    ];

    pub fn from_index(idx: usize) -> Throw {
        Self::ALL[idx % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    fn relation(self) -> &'static Relation {
        &RELATIONS[self.index()]
    }

    pub fn prey(self) -> [Throw; 2] {
        self.relation().prey
    }

    pub fn predators(self) -> [Throw; 2] {
        self.relation().predators
    }

    /// Canonical counter: the first predator listed in the table
    pub fn predator(self) -> Throw {
        self.relation().predators[0]
    }

    pub fn beats(self, other: Throw) -> bool {
        self.prey().contains(&other)
    }

    /// Next throw in the Rock -> Paper -> Scissors -> Lizard -> Spock -> Rock cycle
    pub fn next_in_cycle(self) -> Throw {
        Self::from_index(self.index() + 1)
    }

    /// Single-letter console code
    pub fn code(self) -> char {
        self.relation().code
    }

    pub fn name(self) -> &'static str {
        self.relation().name
    }
}

impl fmt::Display for Throw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Throw {
    type Err = RpslsError;

    /// Accepts the single-letter code or the full name, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Throw::ALL
            .iter()
            .copied()
            .find(|t| {
                trimmed.eq_ignore_ascii_case(t.name())
                    || (trimmed.len() == 1
                        && trimmed
                            .chars()
                            .next()
                            .is_some_and(|c| c.eq_ignore_ascii_case(&t.code())))
            })
            .ok_or_else(|| RpslsError::InvalidThrow(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_exact() {
        for t in Throw::ALL {
            let prey = t.prey();
            let predators = t.predators();
            assert_ne!(prey[0], prey[1]);
            assert_ne!(predators[0], predators[1]);
            for p in prey {
                assert_ne!(p, t, "{} cannot prey on itself", t);
                assert!(
                    !predators.contains(&p),
                    "{} both prey and predator of {}",
                    p,
                    t
                );
            }
            assert!(!predators.contains(&t));
        }
    }

    #[test]
    fn test_relation_is_antisymmetric() {
        for a in Throw::ALL {
            for b in Throw::ALL {
                assert!(!(a.beats(b) && b.beats(a)));
                if a.beats(b) {
                    assert!(b.predators().contains(&a));
                }
            }
        }
    }

    #[test]
    fn test_canonical_predator() {
        assert_eq!(Throw::Rock.predator(), Throw::Spock);
        assert_eq!(Throw::Paper.predator(), Throw::Lizard);
        assert_eq!(Throw::Scissors.predator(), Throw::Spock);
        assert_eq!(Throw::Lizard.predator(), Throw::Rock);
        assert_eq!(Throw::Spock.predator(), Throw::Lizard);
        for t in Throw::ALL {
            assert!(t.predator().beats(t));
        }
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Throw::Rock.next_in_cycle(), Throw::Paper);
        assert_eq!(Throw::Lizard.next_in_cycle(), Throw::Spock);
        assert_eq!(Throw::Spock.next_in_cycle(), Throw::Rock);
    }

    #[test]
    fn test_parse() {
        assert_eq!("r".parse::<Throw>(), Ok(Throw::Rock));
        assert_eq!("K".parse::<Throw>(), Ok(Throw::Spock));
        assert_eq!(" lizard ".parse::<Throw>(), Ok(Throw::Lizard));
        assert_eq!("SCISSORS".parse::<Throw>(), Ok(Throw::Scissors));
        assert!(matches!("x".parse::<Throw>(), Err(RpslsError::InvalidThrow(_))));
        assert!("rp".parse::<Throw>().is_err());
        assert!("".parse::<Throw>().is_err());
    }
}
