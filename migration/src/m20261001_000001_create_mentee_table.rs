use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mentee::Table)
                    .if_not_exists()
                    .col(pk_auto(Mentee::Id))
                    .col(string_uniq(Mentee::DiscordId))
                    .col(string(Mentee::Name))
                    .col(string_null(Mentee::HouseRole))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_mentee_house_role")
                    .table(Mentee::Table)
                    .col(Mentee::HouseRole)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mentee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mentee {
    Table,
    Id,
    DiscordId,
    Name,
    HouseRole,
}
