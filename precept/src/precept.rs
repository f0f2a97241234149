//! Parsed precept types.

use std::fmt;

/// Time unit accepted by `NOW`.
///
/// Selects the magnitude of the returned integer timestamp: whole seconds,
/// milliseconds, microseconds, or nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    /// Seconds since epoch (the default when NOW gets no argument).
    #[default]
    Sec,
    /// Milliseconds since epoch.
    Milli,
    /// Microseconds since epoch.
    Micro,
    /// Nanoseconds since epoch.
    Nano,
}

impl TimeUnit {
    /// Resolve a unit token, case-insensitively.
    pub fn parse(token: &str) -> Option<TimeUnit> {
        match token.to_uppercase().as_str() {
            "SEC" => Some(TimeUnit::Sec),
            "MSEC" => Some(TimeUnit::Milli),
            "USEC" => Some(TimeUnit::Micro),
            "NSEC" => Some(TimeUnit::Nano),
            _ => None,
        }
    }

    /// Canonical grammar token for this unit.
    pub fn token(&self) -> &'static str {
        match self {
            TimeUnit::Sec => "SEC",
            TimeUnit::Milli => "MSEC",
            TimeUnit::Micro => "USEC",
            TimeUnit::Nano => "NSEC",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// The closed set of precept functions, resolved at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// Current timestamp in the given unit.
    Now(TimeUnit),
    /// Next value of the per-(namespace, field) serial counter.
    Serial,
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionKind::Now(unit) => write!(f, "NOW({})", unit),
            FunctionKind::Serial => write!(f, "SERIAL()"),
        }
    }
}

/// A parsed precept: one field to auto-populate and the function that
/// computes its value. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Precept {
    pub(crate) field: String,
    pub(crate) function: FunctionKind,
}

impl Precept {
    /// Target field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The function to evaluate.
    pub fn function(&self) -> FunctionKind {
        self.function
    }
}

impl fmt::Display for Precept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field, self.function)
    }
}
