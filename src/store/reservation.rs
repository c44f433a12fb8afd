use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::core::{
    Customer, Hotel, NewReservation, Reservation, ReservationId, ReservationPatch,
};
use crate::domain::{position, Entity, Repository, StoreError};
use crate::infrastructure::JsonFileRepository;
use crate::Storage;

use super::{CustomerStore, EntityManager, HotelStore};

/// 予約ストア
///
/// 予約の登録・取消のたびにホテルと顧客の存在を確認し、ホテルの予約済み部屋数を増減させる。
/// 3つのファイルはそれぞれ独立に書き込まれるため、複数プロセスからの同時操作には対応しない。
pub struct ReservationStore<
    R = JsonFileRepository<Reservation>,
    H = JsonFileRepository<Hotel>,
    C = JsonFileRepository<Customer>,
> {
    repository: R,
    hotels: HotelStore<H>,
    customers: CustomerStore<C>,
}

impl ReservationStore {
    /// 設定された保存先のJSONファイルで開く
    pub fn open(storage: &Storage) -> Self {
        Self::new(
            JsonFileRepository::new(storage.reservations_path()),
            HotelStore::new(JsonFileRepository::new(storage.hotels_path())),
            CustomerStore::new(JsonFileRepository::new(storage.customers_path())),
        )
    }
}

impl<R, H, C> ReservationStore<R, H, C>
where
    R: Repository<Reservation>,
    H: Repository<Hotel>,
    C: Repository<Customer>,
{
    pub fn new(repository: R, hotels: HotelStore<H>, customers: CustomerStore<C>) -> Self {
        Self {
            repository,
            hotels,
            customers,
        }
    }

    pub fn hotels(&self) -> &HotelStore<H> {
        &self.hotels
    }

    pub fn hotels_mut(&mut self) -> &mut HotelStore<H> {
        &mut self.hotels
    }

    pub fn customers(&self) -> &CustomerStore<C> {
        &self.customers
    }

    pub fn customers_mut(&mut self) -> &mut CustomerStore<C> {
        &mut self.customers
    }

    /// 予約を登録する
    ///
    /// 検証はホテル、顧客、予約IDの重複の順に行い、最後にホテルの空室を1つ確保する。
    /// 空室がなければ予約は保存されない。
    pub async fn create_reservation(
        &mut self,
        draft: NewReservation,
    ) -> Result<Reservation, StoreError> {
        let reservation = Reservation::create(
            draft.reservation_id,
            draft.customer_id,
            draft.hotel_id,
            draft.check_in,
            draft.check_out,
        )?;
        self.hotels
            .find(reservation.hotel_id())
            .await
            .map_err(StoreError::into_reference)?;
        self.customers
            .find(reservation.customer_id())
            .await
            .map_err(StoreError::into_reference)?;

        let mut reservations = self.repository.load().await?;
        if position(&reservations, reservation.id()).is_some() {
            return Err(StoreError::duplicate::<Reservation>(reservation.id()));
        }

        self.hotels.reserve_room(reservation.hotel_id()).await?;

        reservations.push(reservation.clone());
        if let Err(e) = self.repository.save(&reservations).await {
            if let Err(rollback) = self.hotels.cancel_reservation(reservation.hotel_id()).await {
                warn!(
                    reservation_id = %reservation.id(),
                    hotel_id = %reservation.hotel_id(),
                    "failed to give back reserved room: {}",
                    rollback
                );
            }
            return Err(e.into());
        }
        debug!(
            reservation_id = %reservation.id(),
            hotel_id = %reservation.hotel_id(),
            customer_id = %reservation.customer_id(),
            "reservation created"
        );
        Ok(reservation)
    }

    /// 予約を取り消す
    ///
    /// ホテル側の部屋数の戻しに失敗しても（ホテルが削除済み、予約済み部屋数が0など）
    /// 予約そのものは削除する。予約の保存に失敗した場合は戻した部屋を確保し直す。
    pub async fn cancel_reservation(&mut self, id: &ReservationId) -> Result<(), StoreError> {
        let mut reservations = self.repository.load().await?;
        let index = position(&reservations, id)
            .ok_or_else(|| StoreError::not_found::<Reservation>(id))?;
        let reservation = reservations.remove(index);

        let released = match self.hotels.cancel_reservation(reservation.hotel_id()).await {
            Ok(_) => true,
            Err(e @ (StoreError::NotFound { .. } | StoreError::State(_))) => {
                warn!(
                    reservation_id = %id,
                    hotel_id = %reservation.hotel_id(),
                    "hotel bookkeeping out of sync: {}",
                    e
                );
                false
            }
            Err(e) => return Err(e),
        };

        if let Err(e) = self.repository.save(&reservations).await {
            if released {
                if let Err(rollback) = self.hotels.reserve_room(reservation.hotel_id()).await {
                    warn!(
                        reservation_id = %id,
                        hotel_id = %reservation.hotel_id(),
                        "failed to take back released room: {}",
                        rollback
                    );
                }
            }
            return Err(e.into());
        }
        debug!(reservation_id = %id, "reservation cancelled");
        Ok(())
    }
}

#[async_trait]
impl<R, H, C> EntityManager for ReservationStore<R, H, C>
where
    R: Repository<Reservation>,
    H: Repository<Hotel>,
    C: Repository<Customer>,
{
    type Entity = Reservation;
    type Draft = NewReservation;
    type Patch = ReservationPatch;

    async fn create(&mut self, draft: NewReservation) -> Result<Reservation, StoreError> {
        self.create_reservation(draft).await
    }

    async fn delete(&mut self, id: &ReservationId) -> Result<(), StoreError> {
        self.cancel_reservation(id).await
    }

    async fn find(&self, id: &ReservationId) -> Result<Reservation, StoreError> {
        self.repository
            .load()
            .await?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| StoreError::not_found::<Reservation>(id))
    }

    async fn list(&self) -> Result<Vec<Reservation>, StoreError> {
        Ok(self.repository.load().await?)
    }

    async fn modify(
        &mut self,
        id: &ReservationId,
        patch: ReservationPatch,
    ) -> Result<Reservation, StoreError> {
        let mut reservations = self.repository.load().await?;
        let index = position(&reservations, id)
            .ok_or_else(|| StoreError::not_found::<Reservation>(id))?;
        let reservation = &mut reservations[index];
        if let Some(check_in) = patch.check_in {
            reservation.change_check_in(check_in);
        }
        if let Some(check_out) = patch.check_out {
            reservation.change_check_out(check_out);
        }
        let reservation = reservation.clone();
        self.repository.save(&reservations).await?;
        debug!(reservation_id = %id, "reservation modified");
        Ok(reservation)
    }
}
