use super::*;
use crate::prelude::*;

// The signal kinds a receiver can collect, in the order their config trees
// merge into the combined receiver config
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Signal {
    Metrics,
    Logs,
    Traces,
}

impl Signal {
    pub const ALL: [Signal; 3] = [Signal::Metrics, Signal::Logs, Signal::Traces];

    pub fn hints_prefix(self) -> &'static str {
        match self {
            Signal::Metrics => METRICS_HINTS_PREFIX,
            Signal::Logs => LOGS_HINTS_PREFIX,
            Signal::Traces => TRACES_HINTS_PREFIX,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SignalSet {
    pub metrics: bool,
    pub logs: bool,
    pub traces: bool,
}

impl SignalSet {
    pub fn contains(self, signal: Signal) -> bool {
        match signal {
            Signal::Metrics => self.metrics,
            Signal::Logs => self.logs,
            Signal::Traces => self.traces,
        }
    }

    pub fn enabled(self) -> impl Iterator<Item = Signal> {
        Signal::ALL.into_iter().filter(move |s| self.contains(*s))
    }

    pub fn any(self) -> bool {
        self.metrics || self.logs || self.traces
    }
}

// Everything the discovery loop needs to start one receiver instance for an
// observed endpoint; ownership passes to the loop as soon as it's built
#[derive(Clone, Debug, PartialEq)]
pub struct ReceiverTemplate {
    pub id: ReceiverId,
    pub config: ReceiverConfig,
    pub signals: SignalSet,
}
