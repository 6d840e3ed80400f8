use reliability_metrics::component::{Available, Component, Failure};
use reliability_metrics::core::types::Timestamp;

/// Builds test components from Unix-second interval bounds
pub struct TestComponentBuilder {
    failures: Vec<Failure>,
    availability: Vec<Available>,
}

impl TestComponentBuilder {
    pub fn new() -> Self {
        Self { failures: Vec::new(), availability: Vec::new() }
    }

    /// Appends a failure record; call in chronological order
    pub fn failure(mut self, start: i64, end: i64, cause: &str) -> Self {
        self.failures.push(Failure::new(
            Timestamp::from_unix(start),
            Timestamp::from_unix(end),
            cause,
        ));
        self
    }

    /// Appends an availability window; call in chronological order
    pub fn window(mut self, start: i64, end: i64) -> Self {
        self.availability.push(Available::new(
            Timestamp::from_unix(start),
            Timestamp::from_unix(end),
        ));
        self
    }

    pub fn build(self) -> Component {
        Component::new(self.failures, self.availability)
    }
}
