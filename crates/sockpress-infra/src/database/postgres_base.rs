use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, IdenStatic, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait,
};
use uuid::Uuid;

use sockpress_core::RepoError;
use sockpress_core::ports::BaseRepository;

/// Generic PostgreSQL repository over one table.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

/// Map a store error onto the repository taxonomy, keeping its payload.
pub(crate) fn backend_error(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        other => {
            let err_str = other.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Backend(err_str)
            }
        }
    }
}

pub(crate) fn decode_rows<M, T>(rows: Vec<M>) -> Result<Vec<T>, RepoError>
where
    T: TryFrom<M, Error = RepoError>,
{
    rows.into_iter().map(T::try_from).collect()
}

#[async_trait]
impl<E, T> BaseRepository<T, Uuid> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = Uuid>,
    T: TryFrom<E::Model, Error = RepoError> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let rows = E::find().all(&self.db).await.map_err(backend_error)?;
        decode_rows(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(backend_error)?;

        result.map(T::try_from).transpose()
    }

    async fn save(&self, entity: T) -> Result<T, RepoError> {
        let primary: Vec<E::Column> = E::PrimaryKey::iter().map(|key| key.into_column()).collect();
        let is_primary = |column: &E::Column| primary.iter().any(|p| p.as_str() == column.as_str());

        let upsert = OnConflict::columns(primary.iter().copied())
            .update_columns(E::Column::iter().filter(|column| !is_primary(column)))
            .to_owned();

        let active_model: E::ActiveModel = entity.into();
        let model = E::insert(active_model)
            .on_conflict(upsert)
            .exec_with_returning(&self.db)
            .await
            .map_err(backend_error)?;

        T::try_from(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(backend_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
