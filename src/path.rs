use std::{fmt::Display, str::FromStr};

use crate::Error;

/// A single step when navigating a [`Tree`](crate::Tree) by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Follow the left child.
    Left,
    /// Follow the right child.
    Right,
}

impl Direction {
    /// Parse a path such as `"LRL"` or `"L R L"` into its steps.
    ///
    /// Whitespace between steps is ignored and steps are case-insensitive.
    ///
    /// ```
    /// use ordtree::Direction;
    ///
    /// let path = Direction::parse_path("L r L").unwrap();
    /// assert_eq!(path, [Direction::Left, Direction::Right, Direction::Left]);
    ///
    /// assert!(Direction::parse_path("LX").is_err());
    /// ```
    pub fn parse_path(s: &str) -> Result<Vec<Self>, Error> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(Self::try_from)
            .collect()
    }
}

impl TryFrom<char> for Direction {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'L' | 'l' => Ok(Self::Left),
            'R' | 'r' => Ok(Self::Right),
            v => Err(Error::InvalidDirection(v.to_string())),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Self::Left),
            "r" | "right" => Ok(Self::Right),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "L"),
            Self::Right => write!(f, "R"),
        }
    }
}
