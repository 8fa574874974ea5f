mod cast_vote;
mod get_index;
mod get_question;

pub use self::cast_vote::*;
pub use self::get_index::*;
pub use self::get_question::*;
