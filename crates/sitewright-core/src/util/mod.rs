pub mod slug;
pub mod unique;
