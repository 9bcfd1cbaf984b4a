use depcheck_comment::prelude::*;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Progress,
    Error,
    Completion,
}

/// Mock ProgressReporter that records every message with its channel
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    entries: Arc<Mutex<Vec<(Channel, String)>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages_on(&self, channel: Channel) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, channel: Channel, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((channel, message.to_string()));
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(Channel::Progress, message);
    }

    fn report_error(&self, message: &str) {
        self.push(Channel::Error, message);
    }

    fn report_completion(&self, message: &str) {
        self.push(Channel::Completion, message);
    }
}
