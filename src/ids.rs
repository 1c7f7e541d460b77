use chrono::Utc;

/// Issues record ids from the millisecond clock. Ids are monotonically
/// increasing even when several are requested within the same millisecond,
/// and never reused after a record is deleted.
#[derive(Debug, Default)]
pub(crate) struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Advance past an id seen during hydration so fresh ids never collide
    /// with records from earlier sessions.
    pub fn observe(&mut self, id: &str) {
        if let Ok(value) = id.parse::<i64>() {
            if value > self.last {
                self.last = value;
            }
        }
    }

    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last.to_string()
    }
}
