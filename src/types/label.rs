use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub const LUCKY: &str = "lucky";
pub const FIZZ: &str = "fizz";
pub const BUZZ: &str = "buzz";
pub const FIZZBUZZ: &str = "fizzbuzz";
pub const INTEGER: &str = "integer";

/// The categorical or numeric outcome for a single integer.
///
/// The string form (via `Display`) is the label as it appears in rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Lucky,
    Fizz,
    Buzz,
    FizzBuzz,
    Number(i64),
}

impl Label {
    /// The report bucket this label is counted under.
    pub fn bucket(&self) -> Bucket {
        match self {
            Label::Lucky => Bucket::Lucky,
            Label::Fizz => Bucket::Fizz,
            Label::Buzz => Bucket::Buzz,
            Label::FizzBuzz => Bucket::FizzBuzz,
            Label::Number(_) => Bucket::Integer,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Label::Number(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Lucky => f.write_str(LUCKY),
            Label::Fizz => f.write_str(FIZZ),
            Label::Buzz => f.write_str(BUZZ),
            Label::FizzBuzz => f.write_str(FIZZBUZZ),
            Label::Number(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unrecognised label: {0:?}")]
pub struct ParseLabelError(pub String);

impl FromStr for Label {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            LUCKY => Ok(Label::Lucky),
            FIZZ => Ok(Label::Fizz),
            BUZZ => Ok(Label::Buzz),
            FIZZBUZZ => Ok(Label::FizzBuzz),
            other => other
                .parse::<i64>()
                .map(Label::Number)
                .map_err(|_| ParseLabelError(other.to_string())),
        }
    }
}

// Labels travel as their rendered string so serialized output matches the text form.
impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A named aggregation slot in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Fizz,
    Buzz,
    FizzBuzz,
    Lucky,
    Integer,
}

impl Bucket {
    /// Fixed order in which buckets are appended to a report.
    pub const REPORT_ORDER: [Bucket; 5] = [
        Bucket::Fizz,
        Bucket::Buzz,
        Bucket::FizzBuzz,
        Bucket::Lucky,
        Bucket::Integer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Bucket::Fizz => FIZZ,
            Bucket::Buzz => BUZZ,
            Bucket::FizzBuzz => FIZZBUZZ,
            Bucket::Lucky => LUCKY,
            Bucket::Integer => INTEGER,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
