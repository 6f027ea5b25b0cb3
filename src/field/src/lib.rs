pub mod controller_message;
pub mod fworld;
pub mod particle;
pub mod time_manager;

pub type V2 = nalgebra::Vector2<f32>;
