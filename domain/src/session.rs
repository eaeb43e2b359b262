use crate::classification::ClassificationResult;
use crate::history::{HistoryEntry, HistoryLedger};
use crate::message::Message;

/// One interactive session. Owns its ledger; nothing is persisted.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    history: HistoryLedger,
}

impl Session {
    pub fn new(id: String) -> Self {
        Self {
            id,
            history: HistoryLedger::new(),
        }
    }

    pub fn record(
        &mut self,
        message: Message,
        result: ClassificationResult,
    ) -> Option<HistoryEntry> {
        self.history.push_front(HistoryEntry::new(message, result))
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn last(&self) -> Option<&HistoryEntry> {
        self.history.most_recent()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
