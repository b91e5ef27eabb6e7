pub mod course;
pub mod instructor;
pub mod lesson;
pub mod section;
pub mod user;
