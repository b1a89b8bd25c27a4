use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use chrono::Utc;
use entity::tech::{ActiveModel as TechActive, Entity as Tech, Model as TechModel};
use entity::user::{Entity as User, Model as UserModel};
use entity::user_tech::{ActiveModel as UserTechActive, Entity as UserTech};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::debug;

fn clean_name(name: &str) -> Result<&str, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("tech name must not be empty".into()));
    }
    Ok(name)
}

async fn find_tech_by_name<C: ConnectionTrait>(conn: &C, name: &str) -> Result<Option<TechModel>, DbErr> {
    Tech::find()
        .filter(entity::tech::Column::Name.eq(name))
        .one(conn)
        .await
}

// Must stay write-first: SQLite cannot upgrade a read snapshot under contention.
async fn find_or_create_tech_in<C: ConnectionTrait>(conn: &C, name: &str) -> Result<TechModel, DbErr> {
    let now = Utc::now();
    let inserted = Tech::insert(TechActive {
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    })
    .on_conflict(
        OnConflict::column(entity::tech::Column::Name)
            .do_nothing()
            .to_owned(),
    )
    .exec_without_returning(conn)
    .await?;
    if inserted > 0 {
        debug!("created tech {}", name);
    }
    find_tech_by_name(conn, name)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound("Tech not found".into()))
}

impl DatabaseService {
    pub async fn get_tech_by_id(&self, id: i32) -> Result<TechModel, AppError> {
        Ok(Tech::find_by_id(id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Tech not found".into()))?)
    }

    pub async fn get_tech_by_name(&self, name: &str) -> Result<Option<TechModel>, AppError> {
        Ok(find_tech_by_name(&self.database_connection, clean_name(name)?).await?)
    }

    pub async fn find_or_create_tech(&self, name: &str) -> Result<TechModel, AppError> {
        let name = clean_name(name)?;
        let txn = self.database_connection.begin().await?;
        let tech = find_or_create_tech_in(&txn, name).await?;
        txn.commit().await?;
        Ok(tech)
    }

    pub async fn list_techs(&self) -> Result<Vec<TechModel>, AppError> {
        Ok(Tech::find()
            .order_by_asc(entity::tech::Column::Name)
            .all(&self.database_connection)
            .await?)
    }

    /// Techs linked to a user. `NotFound` if the user does not exist.
    pub async fn list_user_techs(&self, user_id: i32) -> Result<Vec<TechModel>, AppError> {
        let user = self.get_user_by_id(user_id).await?;
        Ok(user
            .techs()
            .order_by_asc(entity::tech::Column::Name)
            .all(&self.database_connection)
            .await?)
    }

    /// Users linked to a tech. `NotFound` if the tech does not exist.
    pub async fn list_tech_users(&self, tech_id: i32) -> Result<Vec<UserModel>, AppError> {
        let tech = self.get_tech_by_id(tech_id).await?;
        Ok(tech
            .users()
            .order_by_asc(entity::user::Column::Id)
            .all(&self.database_connection)
            .await?)
    }

    /// Finds or creates the tech called `name` and links it to the user.
    /// Linking a pair that is already linked is a no-op.
    pub async fn add_user_tech(&self, user_id: i32, name: &str) -> Result<TechModel, AppError> {
        let name = clean_name(name)?;
        let txn = self.database_connection.begin().await?;

        let tech = find_or_create_tech_in(&txn, name).await?;

        if User::find_by_id(user_id).one(&txn).await?.is_none() {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        }

        let now = Utc::now();
        let linked = UserTech::insert(UserTechActive {
            user_id: Set(user_id),
            tech_id: Set(tech.id),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_tech::Column::UserId,
                entity::user_tech::Column::TechId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;
        if linked > 0 {
            debug!("linked user {} to tech {}", user_id, tech.id);
        }

        txn.commit().await?;
        Ok(tech)
    }

    /// Unlinks the tech called `name` from the user. The tech row is kept.
    pub async fn remove_user_tech(&self, user_id: i32, name: &str) -> Result<(), AppError> {
        let name = clean_name(name)?;
        let user = self.get_user_by_id(user_id).await?;
        let tech = find_tech_by_name(&self.database_connection, name)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("Tech not found".into()))?;

        if let Some(link) = UserTech::find_by_id((user.id, tech.id))
            .one(&self.database_connection)
            .await?
        {
            link.delete(&self.database_connection).await?;
            debug!("unlinked user {} from tech {}", user.id, tech.id);
        }
        Ok(())
    }
}
