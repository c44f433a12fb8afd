use std::collections::HashMap;

use derive_more::Display;

use crate::domain::core::{Customer, CustomerId, Hotel, HotelId, Reservation, ReservationId};
use crate::domain::{Entity, Repository, StoreError};

use super::{EntityManager, ReservationStore};

/// 整合性チェックで見つかった不整合
#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Discrepancy {
    /// 予約済み部屋数と実際の予約件数が一致しない
    #[display(
        fmt = "hotel {} records {} reserved rooms but has {} reservations",
        hotel_id,
        recorded,
        actual
    )]
    ReservedRoomsMismatch {
        hotel_id: HotelId,
        recorded: u32,
        actual: u32,
    },
    /// 予約済み部屋数が部屋数を超えている
    #[display(
        fmt = "hotel {} records {} reserved rooms but has only {} rooms",
        hotel_id,
        reserved_rooms,
        rooms
    )]
    Overbooked {
        hotel_id: HotelId,
        rooms: u32,
        reserved_rooms: u32,
    },
    /// 予約が存在しないホテルを参照している
    #[display(fmt = "reservation {} refers to unknown hotel {}", reservation_id, hotel_id)]
    UnknownHotel {
        reservation_id: ReservationId,
        hotel_id: HotelId,
    },
    /// 予約が存在しない顧客を参照している
    #[display(
        fmt = "reservation {} refers to unknown customer {}",
        reservation_id,
        customer_id
    )]
    UnknownCustomer {
        reservation_id: ReservationId,
        customer_id: CustomerId,
    },
}

impl<R, H, C> ReservationStore<R, H, C>
where
    R: Repository<Reservation>,
    H: Repository<Hotel>,
    C: Repository<Customer>,
{
    /// 3つの集合を突き合わせ、不整合を列挙する。何も書き換えない。
    pub async fn audit(&self) -> Result<Vec<Discrepancy>, StoreError> {
        let hotels = self.hotels().list().await?;
        let customers = self.customers().list().await?;
        let reservations = self.list().await?;

        let mut counts: HashMap<&HotelId, u32> = HashMap::new();
        let mut discrepancies = Vec::new();
        for reservation in &reservations {
            *counts.entry(reservation.hotel_id()).or_default() += 1;
            if !hotels.iter().any(|h| h.id() == reservation.hotel_id()) {
                discrepancies.push(Discrepancy::UnknownHotel {
                    reservation_id: reservation.id().clone(),
                    hotel_id: reservation.hotel_id().clone(),
                });
            }
            if !customers.iter().any(|c| c.id() == reservation.customer_id()) {
                discrepancies.push(Discrepancy::UnknownCustomer {
                    reservation_id: reservation.id().clone(),
                    customer_id: reservation.customer_id().clone(),
                });
            }
        }
        for hotel in &hotels {
            if hotel.reserved_rooms() > hotel.rooms() {
                discrepancies.push(Discrepancy::Overbooked {
                    hotel_id: hotel.id().clone(),
                    rooms: hotel.rooms(),
                    reserved_rooms: hotel.reserved_rooms(),
                });
            }
            let actual = counts.get(hotel.id()).copied().unwrap_or_default();
            if hotel.reserved_rooms() != actual {
                discrepancies.push(Discrepancy::ReservedRoomsMismatch {
                    hotel_id: hotel.id().clone(),
                    recorded: hotel.reserved_rooms(),
                    actual,
                });
            }
        }
        Ok(discrepancies)
    }
}
