use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "response")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mentee_id: i32,
    pub week_number: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub text_response: Option<String>,
    pub voice_response_url: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mentee::Entity",
        from = "Column::MenteeId",
        to = "super::mentee::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Mentee,
}

impl Related<super::mentee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mentee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
