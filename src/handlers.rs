pub mod amendments;
pub mod health;
pub mod periods;
pub mod quality;
pub mod rent_roll;
