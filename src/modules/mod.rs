pub mod achievement;
pub mod category;
pub mod dashboard;
pub mod experience;
pub mod notification;
pub mod profile;
pub mod project;
pub mod public_api;
pub mod skill;
