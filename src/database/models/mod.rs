pub mod user;

pub use user::{
    age_in_years, ContactUpdate, InsertOutcome, NewUser, UpdateOutcome, UserBirthDate, UserName,
    UserRecord, UserSummary,
};
