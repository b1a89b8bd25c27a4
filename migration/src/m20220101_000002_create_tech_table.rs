use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // table name is fixed to "techs"; see entity::tech
        manager
            .create_table(
                Table::create()
                    .table(Techs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Techs::Id).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Techs::Name).string().not_null())
                    .col(ColumnDef::new(Techs::CreatedAt).timestamp_with_time_zone().not_null())
                    .col(ColumnDef::new(Techs::UpdatedAt).timestamp_with_time_zone().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uk_techs_name")
                    .table(Techs::Table)
                    .col(Techs::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // uk_techs_name goes with the table
        manager.drop_table(Table::drop().table(Techs::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Techs {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
