use chrono::Utc;
use rand::Rng;

/// Upper bound (exclusive) of the random id component
const RANDOM_COMPONENT_BOUND: u64 = 10_000_000_000_000_000;

/// Source of fresh item ids for `Action::Add`
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Default generator: `<millis base36>-<random base36>`
///
/// Unique within a process with overwhelming probability. A collision is not
/// fatal; the reducer simply asks for another id.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIdGenerator;

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> String {
        let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let random = rand::rng().random_range(0..RANDOM_COMPONENT_BOUND);
        format!("{}-{}", to_base36(millis), to_base36(random))
    }
}

/// Deterministic generator producing `#1`, `#2`, ...
#[derive(Debug, Default, Clone)]
pub struct SequentialIdGenerator {
    counter: u32,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("#{}", self.counter)
    }
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut buf = Vec::new();
    while value > 0 {
        buf.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    buf.reverse();
    // Only ASCII digits were pushed
    String::from_utf8(buf).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn test_timestamp_ids_have_two_components() {
        let id = TimestampIdGenerator.next_id();
        let parts: Vec<&str> = id.split('-').collect();

        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|p| !p.is_empty()));
        assert!(id.chars().all(|c| c == '-' || c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_timestamp_ids_are_unique() {
        let mut generator = TimestampIdGenerator;
        let ids: HashSet<String> = (0..1000).map(|_| generator.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_sequential_ids() {
        let mut generator = SequentialIdGenerator::new();
        assert_eq!(generator.next_id(), "#1");
        assert_eq!(generator.next_id(), "#2");
        assert_eq!(generator.next_id(), "#3");
    }
}
