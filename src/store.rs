mod audit;
mod customer;
mod hotel;
mod reservation;

pub use self::audit::*;
pub use self::customer::*;
pub use self::hotel::*;
pub use self::reservation::*;

use async_trait::async_trait;

use crate::domain::{Entity, StoreError};

/// 表示結果
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection<E> {
    /// ID指定で取得した1件
    One(E),
    /// 全件（登録順）
    All(Vec<E>),
}

/// エンティティ管理
///
/// 操作のたびに全件を読み込み、変更があれば全件を書き戻す。
#[async_trait]
pub trait EntityManager {
    type Entity: Entity;
    type Draft: Send + 'static;
    type Patch: Send + 'static;

    /// 登録する
    async fn create(&mut self, draft: Self::Draft) -> Result<Self::Entity, StoreError>;
    /// 削除する
    async fn delete(&mut self, id: &<Self::Entity as Entity>::Id) -> Result<(), StoreError>;
    /// IDで取得する
    async fn find(&self, id: &<Self::Entity as Entity>::Id) -> Result<Self::Entity, StoreError>;
    /// 全件を取得する
    async fn list(&self) -> Result<Vec<Self::Entity>, StoreError>;
    /// 指定された項目だけを変更する
    async fn modify(
        &mut self,
        id: &<Self::Entity as Entity>::Id,
        patch: Self::Patch,
    ) -> Result<Self::Entity, StoreError>;

    /// IDがあれば1件、なければ全件を返す
    async fn display(
        &self,
        id: Option<&<Self::Entity as Entity>::Id>,
    ) -> Result<Selection<Self::Entity>, StoreError>
    where
        Self: Sync,
    {
        match id {
            Some(id) => Ok(Selection::One(self.find(id).await?)),
            None => Ok(Selection::All(self.list().await?)),
        }
    }
}
