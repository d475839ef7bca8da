use crate::{
    model::mentee::{SortBy, SortOrder},
    server::{error::AppError, model::mentee::ListMenteesParam, service::mentee::MenteeService},
};
use test_utils::{
    builder::TestBuilder,
    factory::{create_mentee_with_responses, mentee::MenteeFactory},
};

mod list;

fn names(summaries: &[crate::server::model::mentee::MenteeSummary]) -> Vec<&str> {
    summaries.iter().map(|s| s.mentee.name.as_str()).collect()
}
