pub mod poster;
pub mod recommend;
