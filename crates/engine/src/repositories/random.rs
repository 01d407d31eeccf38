//! Random number generation wrapper.

use std::sync::Arc;

use crate::infrastructure::ports::RandomPort;

/// Random service wrapper for use cases.
pub struct RandomService {
    random: Arc<dyn RandomPort>,
}

impl RandomService {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    pub fn gen_range(&self, min: i32, max: i32) -> i32 {
        self.random.gen_range(min, max)
    }

    pub fn next_i63(&self) -> i64 {
        self.random.next_i63()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedRandom;
    use crate::infrastructure::ports::MockRandomPort;
    use mockall::predicate::*;

    #[test]
    fn stub_source_drives_the_service() {
        let service = RandomService::new(Arc::new(FixedRandom(123)));
        assert_eq!(service.next_i63(), 123);
    }

    #[test]
    fn range_bounds_are_forwarded() {
        let mut random = MockRandomPort::new();
        random
            .expect_gen_range()
            .with(eq(1), eq(20))
            .times(1)
            .returning(|_, _| 17);

        let service = RandomService::new(Arc::new(random));

        assert_eq!(service.gen_range(1, 20), 17);
    }
}
