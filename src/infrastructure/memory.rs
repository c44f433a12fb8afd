use async_trait::async_trait;

use crate::domain::{DataAccessError, Entity, Repository};

/// メモリ上のリポジトリ
#[derive(Clone, Debug)]
pub struct MemoryRepository<E> {
    entities: Vec<E>,
}

impl<E> MemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Vec<E>> for MemoryRepository<E> {
    fn from(value: Vec<E>) -> Self {
        Self { entities: value }
    }
}

#[async_trait]
impl<E: Entity + 'static> Repository<E> for MemoryRepository<E> {
    async fn load(&self) -> Result<Vec<E>, DataAccessError> {
        Ok(self.entities.clone())
    }

    async fn save(&mut self, entities: &[E]) -> Result<(), DataAccessError> {
        self.entities = entities.to_vec();
        Ok(())
    }
}
