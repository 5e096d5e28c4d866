use std::time::Duration;

pub const UNCONSTRAINED_VALUE: bool = false;
pub const DECISION_POLARITY: bool = true;
pub const TIME_LIMIT: Option<Duration> = None;
