//! Presentational cards.
//!
//! Each card only reads its props. The cards form the three steps of the
//! walkthrough:
//!
//! 1. [`NameCard`]: a bare name
//! 2. [`UserCard`]: a whole [`User`](crate::user::User) record
//! 3. [`UserCard`] with [`UserCard::on_greet`]: the record plus a callback

mod name_card;
mod user_card;

pub use name_card::NameCard;
pub use user_card::{UserCard, UserCardProps};

pub(crate) const CARD_CLASS: &str = "card bg-gray-100 border rounded-lg p-4 m-2";
pub(crate) const HEADING_CLASS: &str = "text-xl font-bold";
pub(crate) const BUTTON_CLASS: &str = "mt-2 px-4 py-2 rounded bg-blue-500 text-white";
