use std::{io::ErrorKind, marker::PhantomData, path::PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::domain::{DataAccessError, Entity, Repository};

/// JSONファイルリポジトリ
///
/// 1ファイルに1種類のエンティティを配列として保存する。
/// 読み書きのたびにファイル全体を扱い、ロックは取らない。
pub struct JsonFileRepository<E> {
    path: PathBuf,
    _entity: PhantomData<fn() -> E>,
}

impl<E> JsonFileRepository<E> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for JsonFileRepository<E> {
    fn clone(&self) -> Self {
        Self::new(self.path.clone())
    }
}

#[async_trait]
impl<E: Entity + 'static> Repository<E> for JsonFileRepository<E> {
    async fn load(&self) -> Result<Vec<E>, DataAccessError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "{}: no data file yet", E::ENTITY_NAME);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let entities: Vec<E> = serde_json::from_slice(&bytes)?;
        debug!(
            path = %self.path.display(),
            count = entities.len(),
            "{}: loaded",
            E::ENTITY_NAME
        );
        Ok(entities)
    }

    async fn save(&mut self, entities: &[E]) -> Result<(), DataAccessError> {
        let json = serde_json::to_vec_pretty(entities)
            .map_err(|e| DataAccessError::SerializeError(Box::new(e)))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DataAccessError::WriteError(Box::new(e)))?;
        }
        fs::write(&self.path, json)
            .await
            .map_err(|e| DataAccessError::WriteError(Box::new(e)))?;
        debug!(
            path = %self.path.display(),
            count = entities.len(),
            "{}: saved",
            E::ENTITY_NAME
        );
        Ok(())
    }
}
