//! Closed-set enumerations.
//!
//! Each type accepts exactly the literals listed for it, compared
//! case-sensitively, and renders back the same literal.

use crate::macros::closed_set;

closed_set! {
    /// The kind of a service alert.
    pub enum AlertType as AlertType {
        SystemClosure => "SYSTEM_CLOSURE",
        StationClosure => "STATION_CLOSURE",
        StationMove => "STATION_MOVE",
        Other => "OTHER",
    }
}

closed_set! {
    /// A day of the week as used in rental hours and pricing schedules.
    ///
    /// ```
    /// use gbfs_fields::types::DayOfWeek;
    ///
    /// let day: DayOfWeek = "sun".parse().unwrap();
    /// assert_eq!(day.ordinal(), 7);
    /// assert_eq!(day.weekday(), chrono::Weekday::Sun);
    /// assert!("Sunday".parse::<DayOfWeek>().is_err());
    /// ```
    pub enum DayOfWeek as DayOfWeek {
        Mon => "mon",
        Tue => "tue",
        Wed => "wed",
        Thu => "thu",
        Fri => "fri",
        Sat => "sat",
        Sun => "sun",
    }
}

impl DayOfWeek {
    /// The matching `chrono` weekday.
    #[must_use]
    pub const fn weekday(self) -> chrono::Weekday {
        match self {
            Self::Mon => chrono::Weekday::Mon,
            Self::Tue => chrono::Weekday::Tue,
            Self::Wed => chrono::Weekday::Wed,
            Self::Thu => chrono::Weekday::Thu,
            Self::Fri => chrono::Weekday::Fri,
            Self::Sat => chrono::Weekday::Sat,
            Self::Sun => chrono::Weekday::Sun,
        }
    }

    /// ISO 8601 weekday number, Monday = 1 through Sunday = 7.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Mon => 1,
            Self::Tue => 2,
            Self::Wed => 3,
            Self::Thu => 4,
            Self::Fri => 5,
            Self::Sat => 6,
            Self::Sun => 7,
        }
    }
}

impl From<DayOfWeek> for chrono::Weekday {
    fn from(day: DayOfWeek) -> Self {
        day.weekday()
    }
}

closed_set! {
    /// A mobile operating system targeted by a rental app.
    pub enum Mobile as Mobile {
        Android => "android",
        Ios => "ios",
    }
}

closed_set! {
    /// A payment or access method accepted at a station.
    pub enum RentalMethod as RentalMethod {
        Key => "KEY",
        CreditCard => "CREDITCARD",
        PayPass => "PAYPASS",
        ApplePay => "APPLEPAY",
        AndroidPay => "ANDROIDPAY",
        TransitCard => "TRANSITCARD",
        AccountNumber => "ACCOUNTNUMBER",
        Phone => "PHONE",
    }
}

closed_set! {
    pub enum UserType as UserType {
        Member => "member",
        NonMember => "nonmember",
    }
}

// ============================================================================
// TESTS
// ============================================================================
