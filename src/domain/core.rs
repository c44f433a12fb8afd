mod customer;
mod hotel;
mod reservation;

pub use self::customer::*;
pub use self::hotel::*;
pub use self::reservation::*;

/// 空文字列を未入力とみなす。空白だけの値は受け付ける。
fn is_blank(value: &str) -> bool {
    value.is_empty()
}
