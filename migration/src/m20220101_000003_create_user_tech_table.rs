use sea_orm_migration::prelude::*;

use crate::m20220101_000001_create_user_table::Users;
use crate::m20220101_000002_create_tech_table::Techs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum UserTechs {
    Table,
    UserId,
    TechId,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // FKs are declared inline: SQLite cannot add them with ALTER TABLE
        m.create_table(
            Table::create()
                .table(UserTechs::Table)
                .if_not_exists()
                .col(ColumnDef::new(UserTechs::UserId).integer().not_null())
                .col(ColumnDef::new(UserTechs::TechId).integer().not_null())
                .col(ColumnDef::new(UserTechs::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(UserTechs::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .primary_key(
                    Index::create()
                        .name("pk_user_techs")
                        .col(UserTechs::UserId)
                        .col(UserTechs::TechId)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_techs_user")
                        .from(UserTechs::Table, UserTechs::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_techs_tech")
                        .from(UserTechs::Table, UserTechs::TechId)
                        .to(Techs::Table, Techs::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // PK(user_id, tech_id) already covers lookups by user
        m.create_index(
            Index::create()
                .name("idx_user_techs_tech")
                .table(UserTechs::Table)
                .col(UserTechs::TechId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // indexes go with the table
        m.drop_table(Table::drop().table(UserTechs::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
