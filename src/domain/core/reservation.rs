use derive_more::{Deref, Display, Error, From};
use serde::{Deserialize, Serialize};

use crate::domain::{Entity, Id};

use super::{is_blank, CustomerId, HotelId};

/// 予約ID
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Deref, Default,
)]
pub struct ReservationId(String);

impl Id for ReservationId {}

impl From<&str> for ReservationId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// 予約エンティティ
///
/// チェックイン日とチェックアウト日は文字列のまま保持し、日付としての検証はしない。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "reservation_id")]
    id: ReservationId,
    customer_id: CustomerId,
    hotel_id: HotelId,
    check_in: String,
    check_out: String,
}

impl Reservation {
    pub fn create(
        id: ReservationId,
        customer_id: CustomerId,
        hotel_id: HotelId,
        check_in: String,
        check_out: String,
    ) -> Result<Self, ReservationError> {
        Self::validate_created(&id, &customer_id, &hotel_id, &check_in, &check_out)?;
        Ok(Reservation {
            id,
            customer_id,
            hotel_id,
            check_in,
            check_out,
        })
    }

    pub fn change_check_in(&mut self, check_in: String) {
        self.check_in = check_in;
    }

    pub fn change_check_out(&mut self, check_out: String) {
        self.check_out = check_out;
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn hotel_id(&self) -> &HotelId {
        &self.hotel_id
    }

    pub fn check_in(&self) -> &str {
        &self.check_in
    }

    pub fn check_out(&self) -> &str {
        &self.check_out
    }

    fn validate_created(
        id: &ReservationId,
        customer_id: &CustomerId,
        hotel_id: &HotelId,
        check_in: &str,
        check_out: &str,
    ) -> Result<(), ReservationError> {
        if is_blank(id) {
            return Err(ReservationError::IdIsBlank);
        }
        if is_blank(customer_id) {
            return Err(ReservationError::CustomerIdIsBlank);
        }
        if is_blank(hotel_id) {
            return Err(ReservationError::HotelIdIsBlank);
        }
        if is_blank(check_in) {
            return Err(ReservationError::CheckInIsBlank);
        }
        if is_blank(check_out) {
            return Err(ReservationError::CheckOutIsBlank);
        }
        Ok(())
    }
}

impl Entity for Reservation {
    type Id = ReservationId;

    const ENTITY_NAME: &'static str = "reservation";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// 予約の登録内容
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewReservation {
    pub reservation_id: ReservationId,
    pub customer_id: CustomerId,
    pub hotel_id: HotelId,
    pub check_in: String,
    pub check_out: String,
}

/// 予約の変更内容
///
/// 顧客とホテルは変更できない。
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReservationPatch {
    pub check_in: Option<String>,
    pub check_out: Option<String>,
}

/// 予約エラー
#[derive(Error, Display, Debug)]
pub enum ReservationError {
    /// IDが空欄です
    #[display(fmt = "Reservation id cannot be empty")]
    IdIsBlank,
    /// 顧客IDが空欄です
    #[display(fmt = "Customer id cannot be empty")]
    CustomerIdIsBlank,
    /// ホテルIDが空欄です
    #[display(fmt = "Hotel id cannot be empty")]
    HotelIdIsBlank,
    /// チェックイン日が空欄です
    #[display(fmt = "Check-in date cannot be empty")]
    CheckInIsBlank,
    /// チェックアウト日が空欄です
    #[display(fmt = "Check-out date cannot be empty")]
    CheckOutIsBlank,
}
