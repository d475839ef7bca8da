use crate::server::data::response::ResponseRepository;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{create_mentee, create_response, response::ResponseFactory},
};

mod count_by_mentee_ids;
mod get_by_mentee_id;
