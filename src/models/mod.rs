pub mod course;
pub mod mapping;

pub use course::{Course, CourseDto, CourseType};
pub use mapping::MappingError;
