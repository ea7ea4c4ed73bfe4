//! Validated GBFS field types.
//!
//! Every type here implements [`Field`](crate::foundation::Field) and serde's
//! `Serialize`/`Deserialize`, and can only be constructed through a validating
//! constructor.

pub mod calendar;
pub mod coordinates;
pub mod email;
pub mod enums;
pub mod id;
pub mod links;
pub mod locale;
pub mod numbers;
pub mod phone;
pub mod price;
pub mod temporal;

pub use calendar::{Day, Month, Year};
pub use coordinates::{Latitude, Longitude};
pub use email::Email;
pub use enums::{AlertType, DayOfWeek, Mobile, RentalMethod, UserType};
pub use id::Id;
pub use links::{Uri, Url};
pub use locale::{Currency, Language, Timezone};
pub use numbers::{NonNegativeFloat, NonNegativeInt};
pub use phone::PhoneNumber;
pub use price::Price;
pub use temporal::{Date, Time, Timestamp};
