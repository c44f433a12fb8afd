use derive_more::{Deref, Display, Error, From};
use serde::{Deserialize, Serialize};

use crate::domain::{Entity, Id};

use super::is_blank;

/// 顧客ID
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Deref, Default,
)]
pub struct CustomerId(String);

impl Id for CustomerId {}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// 顧客エンティティ
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "customer_id")]
    id: CustomerId,
    name: String,
    email: String,
}

impl Customer {
    pub fn create(id: CustomerId, name: String, email: String) -> Result<Self, CustomerError> {
        Self::validate_created(&id, &name, &email)?;
        Ok(Customer { id, name, email })
    }

    /// 名前を上書きする。未入力の検証は登録時にだけ行う。
    pub fn change_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn change_email(&mut self, email: String) {
        self.email = email;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    fn validate_created(id: &CustomerId, name: &str, email: &str) -> Result<(), CustomerError> {
        if is_blank(id) {
            return Err(CustomerError::IdIsBlank);
        }
        Self::validate_name(name)?;
        Self::validate_email(email)?;
        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), CustomerError> {
        match is_blank(name) {
            true => Err(CustomerError::NameIsBlank),
            false => Ok(()),
        }
    }

    fn validate_email(email: &str) -> Result<(), CustomerError> {
        match is_blank(email) {
            true => Err(CustomerError::EmailIsBlank),
            false => Ok(()),
        }
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    const ENTITY_NAME: &'static str = "customer";

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// 顧客の登録内容
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NewCustomer {
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
}

/// 顧客の変更内容
///
/// `None`の項目は変更しない。
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// 顧客エラー
#[derive(Error, Display, Debug)]
pub enum CustomerError {
    /// IDが空欄です
    #[display(fmt = "Customer id cannot be empty")]
    IdIsBlank,
    /// 名前が空欄です
    #[display(fmt = "Name cannot be empty")]
    NameIsBlank,
    /// メールアドレスが空欄です
    #[display(fmt = "Email cannot be empty")]
    EmailIsBlank,
}
