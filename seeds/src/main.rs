#[macro_use]
extern crate log;

use std::env;

use chrono::{Duration, Utc};
use diesel::{self, Connection, PgConnection, RunQueryDsl};
use dotenv::dotenv;

use db::{
    get_conn,
    models::{Choice, Question},
    new_pool,
    schema::{choices, questions},
};
use errors::Error;

type Poll<'a> = (&'a str, i64, &'a [&'a str]);

const POLLS: &[Poll<'static>] = &[
    ("What's up?", 0, &["Not much", "The sky", "Just hacking again"]),
    (
        "Which editor do you use?",
        1,
        &["Vim", "Emacs", "Something with a GUI"],
    ),
    ("Tabs or spaces?", 3, &["Tabs", "Spaces"]),
    ("Best time for a standup?", 7, &["Morning", "After lunch", "Never"]),
];

/// Replaces every question and choice with `polls`. Runs in one transaction, so a
/// failed insert leaves the previous data in place.
fn seed(conn: &mut PgConnection, polls: &[Poll<'_>]) -> Result<(), Error> {
    conn.transaction::<_, Error, _>(|conn| {
        diesel::delete(choices::table).execute(conn)?;
        diesel::delete(questions::table).execute(conn)?;

        for (question_text, days_ago, choice_texts) in polls {
            let pub_date = Utc::now() - Duration::days(*days_ago);
            let question = Question::create(conn, question_text.to_string(), pub_date)?;
            for choice_text in choice_texts.iter() {
                Choice::create(conn, question.id, choice_text.to_string())?;
            }
            info!(
                "Seeded question {} with {} choices",
                question.id,
                choice_texts.len()
            );
        }

        Ok(())
    })
}

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| Error::InternalServerError("DATABASE_URL must be set".into()))?;
    let pool = new_pool(&database_url)?;
    let mut conn = get_conn(&pool)?;

    seed(&mut conn, POLLS)
}
