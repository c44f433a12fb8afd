use derive_more::{Deref, Display, Error, From};
use serde::{Deserialize, Serialize};

use crate::domain::{Entity, Id};

use super::is_blank;

/// ホテルID
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Deref, Default,
)]
pub struct HotelId(String);

impl Id for HotelId {}

impl From<&str> for HotelId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// ホテルエンティティ
///
/// `reserved_rooms`は常に`0..=rooms`の範囲に収まる。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(rename = "hotel_id")]
    id: HotelId,
    name: String,
    location: String,
    rooms: u32,
    reserved_rooms: u32,
}

impl Hotel {
    pub fn create(
        id: HotelId,
        name: String,
        location: String,
        rooms: u32,
    ) -> Result<Self, HotelError> {
        Self::validate_created(&id, &name, &location, rooms)?;
        Ok(Hotel {
            id,
            name,
            location,
            rooms,
            reserved_rooms: 0,
        })
    }

    pub fn change_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn change_location(&mut self, location: String) {
        self.location = location;
    }

    /// 部屋数を変更する。予約済みの部屋数を下回る値は受け付けない。
    pub fn change_rooms(&mut self, rooms: u32) -> Result<(), HotelError> {
        Self::validate_rooms(rooms)?;
        if rooms < self.reserved_rooms {
            return Err(HotelError::RoomsBelowReserved {
                rooms,
                reserved_rooms: self.reserved_rooms,
            });
        }
        self.rooms = rooms;
        Ok(())
    }

    /// 部屋を1つ予約済みにする
    pub fn reserve_room(&mut self) -> Result<(), HotelError> {
        if self.reserved_rooms >= self.rooms {
            return Err(HotelError::NoVacancy {
                hotel_id: self.id.clone(),
            });
        }
        self.reserved_rooms += 1;
        Ok(())
    }

    /// 予約済みの部屋を1つ戻す
    pub fn release_room(&mut self) -> Result<(), HotelError> {
        if self.reserved_rooms == 0 {
            return Err(HotelError::NoReservations {
                hotel_id: self.id.clone(),
            });
        }
        self.reserved_rooms -= 1;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn rooms(&self) -> u32 {
        self.rooms
    }

    pub fn reserved_rooms(&self) -> u32 {
        self.reserved_rooms
    }

    pub fn vacancies(&self) -> u32 {
        self.rooms.saturating_sub(self.reserved_rooms)
    }

    fn validate_created(
        id: &HotelId,
        name: &str,
        location: &str,
        rooms: u32,
    ) -> Result<(), HotelError> {
        if is_blank(id) {
            return Err(HotelError::IdIsBlank);
        }
        if is_blank(name) {
            return Err(HotelError::NameIsBlank);
        }
        if is_blank(location) {
            return Err(HotelError::LocationIsBlank);
        }
        Self::validate_rooms(rooms)
    }

    fn validate_rooms(rooms: u32) -> Result<(), HotelError> {
        match rooms {
            0 => Err(HotelError::InvalidRooms),
            _ => Ok(()),
        }
    }
}

impl Entity for Hotel {
    type Id = HotelId;

    const ENTITY_NAME: &'static str = "hotel";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// ホテルの登録内容
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewHotel {
    pub hotel_id: HotelId,
    pub name: String,
    pub location: String,
    pub rooms: u32,
}

/// ホテルの変更内容
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HotelPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub rooms: Option<u32>,
}

/// ホテルエラー
#[derive(Error, Display, Debug)]
pub enum HotelError {
    /// IDが空欄です
    #[display(fmt = "Hotel id cannot be empty")]
    IdIsBlank,
    /// 名前が空欄です
    #[display(fmt = "Name cannot be empty")]
    NameIsBlank,
    /// 所在地が空欄です
    #[display(fmt = "Location cannot be empty")]
    LocationIsBlank,
    /// 部屋数は正の整数でなければなりません
    #[display(fmt = "Rooms must be a positive integer")]
    InvalidRooms,
    /// 部屋数が予約済みの部屋数を下回ります
    #[display(
        fmt = "Rooms cannot be reduced to {} while {} are reserved",
        rooms,
        reserved_rooms
    )]
    RoomsBelowReserved { rooms: u32, reserved_rooms: u32 },
    /// 空室がありません
    #[display(fmt = "Hotel {} has no rooms available", hotel_id)]
    NoVacancy { hotel_id: HotelId },
    /// 取り消す予約がありません
    #[display(fmt = "Hotel {} has no reservations to cancel", hotel_id)]
    NoReservations { hotel_id: HotelId },
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn plaza(rooms: u32) -> Hotel {
        Hotel::create(
            "H001".into(),
            "Hotel Plaza".to_owned(),
            "CDMX".to_owned(),
            rooms,
        )
        .unwrap()
    }

    #[test]
    fn test_hotel_create() {
        let hotel = plaza(50);
        assert_eq!(hotel.id(), &HotelId::from("H001"));
        assert_eq!(hotel.name(), "Hotel Plaza");
        assert_eq!(hotel.location(), "CDMX");
        assert_eq!(hotel.rooms(), 50);
        assert_eq!(hotel.reserved_rooms(), 0);
        assert_eq!(hotel.vacancies(), 50);
    }

    #[test]
    fn test_hotel_create_invalid() {
        assert!(matches!(
            Hotel::create("H001".into(), "Hotel Plaza".to_owned(), "CDMX".to_owned(), 0),
            Err(HotelError::InvalidRooms)
        ));
        assert!(matches!(
            Hotel::create("H001".into(), "Hotel Plaza".to_owned(), "".to_owned(), 5),
            Err(HotelError::LocationIsBlank)
        ));
        assert!(matches!(
            Hotel::create("".into(), "Hotel Plaza".to_owned(), "CDMX".to_owned(), 5),
            Err(HotelError::IdIsBlank)
        ));
        assert!(Hotel::create(" ".into(), " ".to_owned(), " ".to_owned(), 5).is_ok());
    }

    #[test]
    fn test_reserve_until_full() {
        let mut hotel = plaza(3);
        for expected in 1..=3 {
            hotel.reserve_room().unwrap();
            assert_eq!(hotel.reserved_rooms(), expected);
        }
        assert!(matches!(
            hotel.reserve_room(),
            Err(HotelError::NoVacancy { hotel_id }) if hotel_id == HotelId::from("H001")
        ));
        assert_eq!(hotel.reserved_rooms(), 3);
        assert_eq!(hotel.vacancies(), 0);
    }

    #[test]
    fn test_release_room() {
        let mut hotel = plaza(5);
        hotel.reserve_room().unwrap();
        hotel.release_room().unwrap();
        assert_eq!(hotel.reserved_rooms(), 0);
        assert!(matches!(
            hotel.release_room(),
            Err(HotelError::NoReservations { .. })
        ));
        assert_eq!(hotel.reserved_rooms(), 0);
    }

    #[test]
    fn test_change_rooms() {
        let mut hotel = plaza(5);
        hotel.reserve_room().unwrap();
        hotel.reserve_room().unwrap();
        assert!(matches!(
            hotel.change_rooms(1),
            Err(HotelError::RoomsBelowReserved {
                rooms: 1,
                reserved_rooms: 2
            })
        ));
        assert!(matches!(hotel.change_rooms(0), Err(HotelError::InvalidRooms)));
        hotel.change_rooms(2).unwrap();
        assert_eq!(hotel.rooms(), 2);
        assert_eq!(hotel.vacancies(), 0);
    }

    #[test]
    fn test_hotel_json() {
        let mut hotel = plaza(50);
        hotel.reserve_room().unwrap();
        assert_eq!(
            serde_json::to_value(&hotel).unwrap(),
            json!({
                "hotel_id": "H001",
                "name": "Hotel Plaza",
                "location": "CDMX",
                "rooms": 50,
                "reserved_rooms": 1,
            })
        );
    }

    #[test]
    fn test_hotel_json_ignores_embedded_reservations() {
        let hotel: Hotel = serde_json::from_value(json!({
            "hotel_id": "H001",
            "name": "Hotel Plaza",
            "location": "CDMX",
            "rooms": 5,
            "reserved_rooms": 1,
            "reservations": [
                {"customer_id": "C001", "check_in": "2026-03-01", "check_out": "2026-03-05"}
            ],
        }))
        .unwrap();
        assert_eq!(hotel.reserved_rooms(), 1);
        assert!(serde_json::to_value(&hotel)
            .unwrap()
            .get("reservations")
            .is_none());
    }
}
