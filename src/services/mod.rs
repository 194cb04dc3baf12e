pub mod ai;
pub mod contact;
pub mod i18n;
