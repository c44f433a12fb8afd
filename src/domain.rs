pub mod core;

use std::{
    error::Error,
    fmt::{Debug, Display},
    ops::Deref,
};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use self::core::{CustomerError, HotelError, HotelId, ReservationError};

/// 文字列のID
pub trait Id:
    Clone
    + Eq
    + Deref<Target = String>
    + From<String>
    + Display
    + Debug
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
{
}

pub trait Entity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync {
    type Id: Id;

    const ENTITY_NAME: &'static str;

    fn id(&self) -> &Self::Id;
}

/// エンティティ集合の永続化
///
/// 1種類のエンティティをまとめて読み書きする。`load`は挿入順を保ったまま全件を返す。
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// 全件を読み込む
    async fn load(&self) -> Result<Vec<E>, DataAccessError>;
    /// 全件を書き込む
    async fn save(&mut self, entities: &[E]) -> Result<(), DataAccessError>;
}

#[derive(Error, Debug)]
pub enum DataAccessError {
    #[error("Data read error: {0}")]
    ReadError(Box<dyn Error + Send + Sync>),
    #[error("Data write error: {0}")]
    WriteError(Box<dyn Error + Send + Sync>),
    #[error("Data parse error: {0}")]
    ParseError(Box<dyn Error + Send + Sync>),
    #[error("Data serialize error: {0}")]
    SerializeError(Box<dyn Error + Send + Sync>),
}

/// ストア操作のエラー
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(Box<dyn Error + Send + Sync>),
    #[error("{entity} with id {id} already exists")]
    Duplicate { entity: &'static str, id: String },
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("Referenced {entity} with id {id} does not exist")]
    Reference { entity: &'static str, id: String },
    #[error("Hotel {0} has no rooms available")]
    Capacity(HotelId),
    #[error("Hotel {0} has no reservations to cancel")]
    State(HotelId),
    #[error(transparent)]
    DataAccess(#[from] DataAccessError),
}

impl StoreError {
    pub fn duplicate<E: Entity>(id: &E::Id) -> Self {
        Self::Duplicate {
            entity: E::ENTITY_NAME,
            id: id.to_string(),
        }
    }

    pub fn not_found<E: Entity>(id: &E::Id) -> Self {
        Self::NotFound {
            entity: E::ENTITY_NAME,
            id: id.to_string(),
        }
    }

    /// 存在しないIDを参照エラーに読み替える
    pub fn into_reference(self) -> Self {
        match self {
            Self::NotFound { entity, id } => Self::Reference { entity, id },
            other => other,
        }
    }
}

impl From<CustomerError> for StoreError {
    fn from(value: CustomerError) -> Self {
        Self::Validation(Box::new(value))
    }
}

impl From<ReservationError> for StoreError {
    fn from(value: ReservationError) -> Self {
        Self::Validation(Box::new(value))
    }
}

impl From<HotelError> for StoreError {
    fn from(value: HotelError) -> Self {
        match value {
            HotelError::NoVacancy { hotel_id } => Self::Capacity(hotel_id),
            HotelError::NoReservations { hotel_id } => Self::State(hotel_id),
            other => Self::Validation(Box::new(other)),
        }
    }
}

/// 線形探索でIDの位置を返す
pub fn position<E: Entity>(entities: &[E], id: &E::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::core::{Customer, CustomerId, Hotel};

    #[test]
    fn test_store_error_from_hotel_error() {
        let hotel_id = HotelId::from("H001");
        assert!(matches!(
            StoreError::from(HotelError::NoVacancy {
                hotel_id: hotel_id.clone()
            }),
            StoreError::Capacity(id) if id == hotel_id
        ));
        assert!(matches!(
            StoreError::from(HotelError::NoReservations {
                hotel_id: hotel_id.clone()
            }),
            StoreError::State(id) if id == hotel_id
        ));
        assert!(matches!(
            StoreError::from(HotelError::InvalidRooms),
            StoreError::Validation(_)
        ));
    }

    #[test]
    fn test_into_reference() {
        let error = StoreError::not_found::<Hotel>(&HotelId::from("H999"));
        assert_eq!(error.to_string(), "hotel with id H999 not found");
        match error.into_reference() {
            StoreError::Reference { entity, id } => {
                assert_eq!(entity, "hotel");
                assert_eq!(id, "H999");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            StoreError::Capacity(HotelId::from("H001")).into_reference(),
            StoreError::Capacity(_)
        ));
    }

    #[test]
    fn test_position() {
        let customers = vec![
            Customer::create("C001".into(), "Juan".to_owned(), "juan@example.com".to_owned())
                .unwrap(),
            Customer::create("C002".into(), "Maria".to_owned(), "maria@example.com".to_owned())
                .unwrap(),
        ];
        assert_eq!(position(&customers, &CustomerId::from("C002")), Some(1));
        assert_eq!(position(&customers, &CustomerId::from("C003")), None);
    }
}
