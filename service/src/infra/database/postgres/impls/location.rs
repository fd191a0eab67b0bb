//! [`Location`]-related [`Database`] implementations.

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{location, Location},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

impl<C> Database<Select<By<Option<Location>, location::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Location>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Location>, location::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, name, description, address, city, country, \
                   image_url, created_at \
            FROM locations \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&by.into_inner()])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| Location {
                id: row.get("id"),
                name: row.get("name"),
                description: row.get("description"),
                address: row.get("address"),
                city: row.get("city"),
                country: row.get("country"),
                image_url: row.get("image_url"),
                created_at: row.get("created_at"),
            }))
    }
}
