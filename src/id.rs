/// Monotonic uid allocator for signal-carrying entities.
/// A uid is never handed out twice, including uids restored from a snapshot.
#[derive(Debug)]
pub struct UidGenerator {
    next: u64,
}

impl UidGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn starting_from(start: u64) -> Self {
        Self { next: start }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Mark `uid` as taken so later allocations skip past it.
    pub fn reserve(&mut self, uid: u64) {
        if uid >= self.next {
            self.next = uid + 1;
        }
    }

    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for UidGenerator {
    fn default() -> Self {
        Self::new()
    }
}
