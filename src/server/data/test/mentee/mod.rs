use crate::server::data::mentee::MenteeRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::mentee::MenteeFactory};

mod find_by_discord_id;
mod find_by_house;
mod get_houses;
