mod detail;
mod index;
mod results;
mod vote;

pub use self::detail::*;
pub use self::index::*;
pub use self::results::*;
pub use self::vote::*;

pub fn results_path(question_id: i32) -> String {
    format!("/{}/results/", question_id)
}
