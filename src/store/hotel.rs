use async_trait::async_trait;
use tracing::debug;

use crate::domain::core::{Hotel, HotelError, HotelId, HotelPatch, NewHotel};
use crate::domain::{position, Entity, Repository, StoreError};
use crate::infrastructure::JsonFileRepository;

use super::EntityManager;

/// ホテルストア
///
/// 通常のCRUDに加えて、予約済み部屋数の増減を扱う。
pub struct HotelStore<R = JsonFileRepository<Hotel>> {
    repository: R,
}

impl<R: Repository<Hotel>> HotelStore<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// 空室を1つ予約済みにする
    pub async fn reserve_room(&mut self, id: &HotelId) -> Result<Hotel, StoreError> {
        let mut hotels = self.repository.load().await?;
        let hotel = update(&mut hotels, id, Hotel::reserve_room)?;
        self.repository.save(&hotels).await?;
        debug!(
            hotel_id = %id,
            reserved_rooms = hotel.reserved_rooms(),
            "room reserved"
        );
        Ok(hotel)
    }

    /// 予約済みの部屋を1つ空室に戻す
    pub async fn cancel_reservation(&mut self, id: &HotelId) -> Result<Hotel, StoreError> {
        let mut hotels = self.repository.load().await?;
        let hotel = update(&mut hotels, id, Hotel::release_room)?;
        self.repository.save(&hotels).await?;
        debug!(
            hotel_id = %id,
            reserved_rooms = hotel.reserved_rooms(),
            "room released"
        );
        Ok(hotel)
    }
}

/// 対象のホテルの複製に変更を加え、成功した場合だけ集合に書き戻す
fn update<F>(hotels: &mut [Hotel], id: &HotelId, f: F) -> Result<Hotel, StoreError>
where
    F: FnOnce(&mut Hotel) -> Result<(), HotelError>,
{
    let index = position(hotels, id).ok_or_else(|| StoreError::not_found::<Hotel>(id))?;
    let mut hotel = hotels[index].clone();
    f(&mut hotel)?;
    hotels[index] = hotel.clone();
    Ok(hotel)
}

#[async_trait]
impl<R: Repository<Hotel>> EntityManager for HotelStore<R> {
    type Entity = Hotel;
    type Draft = NewHotel;
    type Patch = HotelPatch;

    async fn create(&mut self, draft: NewHotel) -> Result<Hotel, StoreError> {
        let hotel = Hotel::create(draft.hotel_id, draft.name, draft.location, draft.rooms)?;
        let mut hotels = self.repository.load().await?;
        if position(&hotels, hotel.id()).is_some() {
            return Err(StoreError::duplicate::<Hotel>(hotel.id()));
        }
        hotels.push(hotel.clone());
        self.repository.save(&hotels).await?;
        debug!(hotel_id = %hotel.id(), rooms = hotel.rooms(), "hotel created");
        Ok(hotel)
    }

    async fn delete(&mut self, id: &HotelId) -> Result<(), StoreError> {
        let mut hotels = self.repository.load().await?;
        let index = position(&hotels, id).ok_or_else(|| StoreError::not_found::<Hotel>(id))?;
        hotels.remove(index);
        self.repository.save(&hotels).await?;
        debug!(hotel_id = %id, "hotel deleted");
        Ok(())
    }

    async fn find(&self, id: &HotelId) -> Result<Hotel, StoreError> {
        self.repository
            .load()
            .await?
            .into_iter()
            .find(|h| h.id() == id)
            .ok_or_else(|| StoreError::not_found::<Hotel>(id))
    }

    async fn list(&self) -> Result<Vec<Hotel>, StoreError> {
        Ok(self.repository.load().await?)
    }

    async fn modify(&mut self, id: &HotelId, patch: HotelPatch) -> Result<Hotel, StoreError> {
        let mut hotels = self.repository.load().await?;
        let hotel = update(&mut hotels, id, |hotel| {
            if let Some(name) = patch.name {
                hotel.change_name(name);
            }
            if let Some(location) = patch.location {
                hotel.change_location(location);
            }
            if let Some(rooms) = patch.rooms {
                hotel.change_rooms(rooms)?;
            }
            Ok(())
        })?;
        self.repository.save(&hotels).await?;
        debug!(hotel_id = %id, "hotel modified");
        Ok(hotel)
    }
}
