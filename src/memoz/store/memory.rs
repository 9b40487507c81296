use super::MemoSlot;
use crate::error::Result;
use crate::model::Memo;

/// In-memory slot for testing and development.
/// Holds the written sequence without touching the filesystem.
#[derive(Default)]
pub struct MemorySlot {
    memos: Vec<Memo>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MemoSlot for MemorySlot {
    fn load(&self) -> Result<Vec<Memo>> {
        Ok(self.memos.clone())
    }

    fn save(&mut self, memos: &[Memo]) -> Result<()> {
        self.memos = memos.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::MemozError;
    use crate::model::{Category, Memo};

    /// A slot pre-seeded with memos in the given display order.
    pub fn seeded(texts: &[&str]) -> MemorySlot {
        MemorySlot {
            memos: texts
                .iter()
                .map(|t| Memo::new(t.to_string(), Category::default()))
                .collect(),
        }
    }

    /// A slot whose writes always fail, for exercising the write-failure
    /// policy. Loads succeed and yield `loaded`.
    #[derive(Default)]
    pub struct FailingSlot {
        pub loaded: Vec<Memo>,
    }

    impl MemoSlot for FailingSlot {
        fn load(&self) -> Result<Vec<Memo>> {
            Ok(self.loaded.clone())
        }

        fn save(&mut self, _memos: &[Memo]) -> Result<()> {
            Err(MemozError::Store("slot write rejected".to_string()))
        }
    }

    /// A slot whose contents cannot be parsed, for exercising fail-open
    /// hydration.
    pub struct CorruptSlot;

    impl MemoSlot for CorruptSlot {
        fn load(&self) -> Result<Vec<Memo>> {
            serde_json::from_str("this is not a memo array").map_err(MemozError::Serialization)
        }

        fn save(&mut self, _memos: &[Memo]) -> Result<()> {
            Ok(())
        }
    }
}
