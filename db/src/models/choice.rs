use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::Question;
use crate::schema::choices;

#[derive(Associations, Clone, Debug, Deserialize, Identifiable, PartialEq, Queryable, Serialize)]
#[diesel(belongs_to(Question))]
#[diesel(table_name = choices)]
pub struct Choice {
    pub id: i32,
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

#[derive(Insertable)]
#[diesel(table_name = choices)]
pub struct NewChoice {
    pub question_id: i32,
    pub choice_text: String,
    pub votes: i32,
}

impl Choice {
    pub fn create(
        conn: &mut PgConnection,
        question_id: i32,
        choice_text: String,
    ) -> Result<Choice, Error> {
        let choice = diesel::insert_into(choices::table)
            .values(NewChoice {
                question_id,
                choice_text,
                votes: 0,
            })
            .get_result(conn)?;

        Ok(choice)
    }

    pub fn find_by_question(conn: &mut PgConnection, question: &Question) -> Result<Vec<Choice>, Error> {
        let results = Choice::belonging_to(question)
            .order(choices::id.asc())
            .load::<Choice>(conn)?;

        Ok(results)
    }

    /// Adds one vote to the choice in a single UPDATE so concurrent voters never
    /// overwrite each other. Returns false when the choice does not belong to the
    /// question.
    pub fn increment_votes(
        conn: &mut PgConnection,
        question_id: i32,
        choice_id: i32,
    ) -> Result<bool, Error> {
        use crate::schema::choices::dsl::{
            choices as choices_table, id, question_id as question_id_field, votes,
        };

        let updated = diesel::update(
            choices_table
                .filter(id.eq(choice_id))
                .filter(question_id_field.eq(question_id)),
        )
        .set(votes.eq(votes + 1))
        .execute(conn)?;

        Ok(updated == 1)
    }
}
