mod comment;

pub use comment::JiraComment;
