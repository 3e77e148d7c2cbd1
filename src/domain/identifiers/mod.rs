pub mod question_id;
pub mod validation;

pub use question_id::QuestionId;
