use serde::{Serialize, Serializer};
use std::fmt;

/// Twelve-year animal cycle keyed by birth year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zodiac {
    Monkey,
    Rooster,
    Dog,
    Pig,
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
}

/// Ordered so that `year % 12` indexes directly (year 0 is a Monkey year).
const ZODIAC_CYCLE: [Zodiac; 12] = [
    Zodiac::Monkey,
    Zodiac::Rooster,
    Zodiac::Dog,
    Zodiac::Pig,
    Zodiac::Rat,
    Zodiac::Ox,
    Zodiac::Tiger,
    Zodiac::Rabbit,
    Zodiac::Dragon,
    Zodiac::Snake,
    Zodiac::Horse,
    Zodiac::Goat,
];

impl Zodiac {
    pub fn from_year(year: u32) -> Self {
        ZODIAC_CYCLE[(year % 12) as usize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Zodiac::Monkey => "Monkey",
            Zodiac::Rooster => "Rooster",
            Zodiac::Dog => "Dog",
            Zodiac::Pig => "Pig",
            Zodiac::Rat => "Rat",
            Zodiac::Ox => "Ox",
            Zodiac::Tiger => "Tiger",
            Zodiac::Rabbit => "Rabbit",
            Zodiac::Dragon => "Dragon",
            Zodiac::Snake => "Snake",
            Zodiac::Horse => "Horse",
            Zodiac::Goat => "Goat",
        }
    }
}

/// Western astrological sign keyed by month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarSign {
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
}

/// (start month, start day, sign), one entry per calendar month.
const CUTOVERS: [(u32, u32, StarSign); 12] = [
    (1, 20, StarSign::Aquarius),
    (2, 19, StarSign::Pisces),
    (3, 21, StarSign::Aries),
    (4, 20, StarSign::Taurus),
    (5, 21, StarSign::Gemini),
    (6, 22, StarSign::Cancer),
    (7, 23, StarSign::Leo),
    (8, 23, StarSign::Virgo),
    (9, 23, StarSign::Libra),
    (10, 24, StarSign::Scorpio),
    (11, 23, StarSign::Sagittarius),
    (12, 22, StarSign::Capricorn),
];

impl StarSign {
    /// A date belongs to a sign from its start day through the day before the next
    /// sign's start day; Capricorn wraps from December into January.
    pub fn from_month_day(month: u32, day: u32) -> Self {
        for (idx, &(start_month, start_day, sign)) in CUTOVERS.iter().enumerate() {
            let (next_month, next_day, _) = CUTOVERS[(idx + 1) % CUTOVERS.len()];
            if (month == start_month && day >= start_day) || (month == next_month && day < next_day)
            {
                return sign;
            }
        }
        StarSign::Capricorn
    }

    pub fn name(&self) -> &'static str {
        match self {
            StarSign::Aquarius => "Aquarius",
            StarSign::Pisces => "Pisces",
            StarSign::Aries => "Aries",
            StarSign::Taurus => "Taurus",
            StarSign::Gemini => "Gemini",
            StarSign::Cancer => "Cancer",
            StarSign::Leo => "Leo",
            StarSign::Virgo => "Virgo",
            StarSign::Libra => "Libra",
            StarSign::Scorpio => "Scorpio",
            StarSign::Sagittarius => "Sagittarius",
            StarSign::Capricorn => "Capricorn",
        }
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for StarSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Zodiac {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for StarSign {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
