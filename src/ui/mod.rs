pub mod components;
pub mod home;
