use super::{RecordEntry, RecordKind};

/// How the lookup for one record kind ended. An empty list can mean either
/// "no such records" or "nothing answered"; this tells them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupStatus {
    /// At least one server answered and matching records were collected.
    Answered,
    /// A server answered, but nothing of this kind was in the answer.
    NoMatchingRecords,
    /// No server produced a usable answer.
    #[default]
    Unanswered,
}

impl LookupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupStatus::Answered => "answered",
            LookupStatus::NoMatchingRecords => "no-records",
            LookupStatus::Unanswered => "unanswered",
        }
    }

    /// Combines the outcome of two lookups of the same kind (e.g. against two
    /// alias targets). The more informative outcome wins.
    pub fn merge(self, other: LookupStatus) -> LookupStatus {
        use LookupStatus::*;
        match (self, other) {
            (Answered, _) | (_, Answered) => Answered,
            (NoMatchingRecords, _) | (_, NoMatchingRecords) => NoMatchingRecords,
            _ => Unanswered,
        }
    }
}

/// Records collected for one requested name.
///
/// All four kinds are always present; each list keeps the order in which the
/// servers returned the entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolutionResult {
    records: [Vec<RecordEntry>; 4],
    statuses: [LookupStatus; 4],
}

impl ResolutionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self, kind: RecordKind) -> &[RecordEntry] {
        &self.records[kind.index()]
    }

    pub fn status(&self, kind: RecordKind) -> LookupStatus {
        self.statuses[kind.index()]
    }

    /// Appends an entry under its own kind.
    pub fn push(&mut self, entry: RecordEntry) {
        self.records[entry.kind().index()].push(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = RecordEntry>) {
        for entry in entries {
            self.push(entry);
        }
    }

    pub fn record_status(&mut self, kind: RecordKind, status: LookupStatus) {
        let slot = &mut self.statuses[kind.index()];
        *slot = slot.merge(status);
    }

    pub fn is_empty(&self) -> bool {
        self.records.iter().all(Vec::is_empty)
    }

    pub fn len(&self) -> usize {
        self.records.iter().map(Vec::len).sum()
    }

    /// Iterates `(kind, entries)` in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordKind, &[RecordEntry])> {
        RecordKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.records(kind)))
    }
}
