use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_mentee_table::Mentee;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Response::Table)
                    .if_not_exists()
                    .col(pk_auto(Response::Id))
                    .col(integer(Response::MenteeId))
                    .col(integer(Response::WeekNumber))
                    .col(text_null(Response::TextResponse))
                    .col(string_null(Response::VoiceResponseUrl))
                    .col(
                        timestamp_with_time_zone(Response::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_response_mentee_id")
                            .from(Response::Table, Response::MenteeId)
                            .to(Mentee::Table, Mentee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_response_mentee_id")
                    .table(Response::Table)
                    .col(Response::MenteeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Response::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Response {
    Table,
    Id,
    MenteeId,
    WeekNumber,
    TextResponse,
    VoiceResponseUrl,
    CreatedAt,
}
