//! Catalog [`Item`]-related [`Database`] implementations.

use common::{
    operations::{By, Lock, Select},
    Money,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::catalog::{
        self, Accommodation, Activity, Equipment, Item, Pass, SportsSchool,
    },
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read::catalog::{AccommodationFilter, SeasonFilter},
};

use super::count;

/// Reads a [`Money`] amount from the provided `column` of the `row`, in the
/// currency of its `currency` column.
fn money(row: &Row, column: &str) -> Money {
    Money {
        amount: row.get(column),
        currency: row.get("currency"),
    }
}

fn accommodation(row: &Row) -> Accommodation {
    Accommodation {
        id: row.get("id"),
        location_id: row.get("location_id"),
        name: row.get("name"),
        description: row.get("description"),
        kind: row.get("type"),
        capacity: count(row, "capacity"),
        price_per_night: money(row, "price_per_night"),
        amenities: row.get("amenities"),
        image_url: row.get("image_url"),
        available: row.get("available"),
        created_at: row.get("created_at"),
    }
}

fn activity(row: &Row) -> Activity {
    Activity {
        id: row.get("id"),
        location_id: row.get("location_id"),
        name: row.get("name"),
        description: row.get("description"),
        season: row.get("season"),
        difficulty_level: row.get("difficulty_level"),
        duration_hours: row.get("duration_hours"),
        price: money(row, "price"),
        max_participants: count(row, "max_participants"),
        image_url: row.get("image_url"),
        available: row.get("available"),
        created_at: row.get("created_at"),
    }
}

fn sports_school(row: &Row) -> SportsSchool {
    SportsSchool {
        id: row.get("id"),
        location_id: row.get("location_id"),
        name: row.get("name"),
        description: row.get("description"),
        sport_type: row.get("sport_type"),
        season: row.get("season"),
        skill_level: row.get("skill_level"),
        duration_days: count(row, "duration_days"),
        price: money(row, "price"),
        max_students: count(row, "max_students"),
        image_url: row.get("image_url"),
        available: row.get("available"),
        created_at: row.get("created_at"),
    }
}

fn equipment(row: &Row) -> Equipment {
    Equipment {
        id: row.get("id"),
        location_id: row.get("location_id"),
        name: row.get("name"),
        description: row.get("description"),
        category: row.get("category"),
        season: row.get("season"),
        size: row.get("size"),
        price_per_day: money(row, "price_per_day"),
        quantity_available: count(row, "quantity_available"),
        image_url: row.get("image_url"),
        created_at: row.get("created_at"),
    }
}

fn pass(row: &Row) -> Pass {
    Pass {
        id: row.get("id"),
        location_id: row.get("location_id"),
        name: row.get("name"),
        description: row.get("description"),
        season: row.get("season"),
        duration_days: count(row, "duration_days"),
        price: money(row, "price"),
        benefits: row.get("benefits"),
        image_url: row.get("image_url"),
        available: row.get("available"),
        created_at: row.get("created_at"),
    }
}

impl<C> Database<Select<By<Option<Accommodation>, catalog::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Accommodation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Accommodation>, catalog::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, location_id, name, description, type, capacity, \
                   price_per_night, currency, amenities, image_url, \
                   available, created_at \
            FROM accommodations \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&by.into_inner()])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(accommodation))
    }
}

impl<C> Database<Select<By<Vec<Accommodation>, AccommodationFilter>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Accommodation>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Accommodation>, AccommodationFilter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let AccommodationFilter { kind } = by.into_inner();

        const SQL: &str = "\
            SELECT id, location_id, name, description, type, capacity, \
                   price_per_night, currency, amenities, image_url, \
                   available, created_at \
            FROM accommodations \
            WHERE available \
              AND ($1::TEXT IS NULL OR type = $1::TEXT) \
            ORDER BY price_per_night ASC, id";
        Ok(self
            .query(SQL, &[&kind])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(accommodation)
            .collect())
    }
}

impl<C> Database<Select<By<Option<Activity>, catalog::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Activity>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Activity>, catalog::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, location_id, name, description, season, \
                   difficulty_level, duration_hours, price, currency, \
                   max_participants, image_url, available, created_at \
            FROM activities \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&by.into_inner()])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(activity))
    }
}

impl<C> Database<Select<By<Vec<Activity>, SeasonFilter>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Activity>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Activity>, SeasonFilter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let SeasonFilter { season } = by.into_inner();

        const SQL: &str = "\
            SELECT id, location_id, name, description, season, \
                   difficulty_level, duration_hours, price, currency, \
                   max_participants, image_url, available, created_at \
            FROM activities \
            WHERE available \
              AND ($1::TEXT IS NULL OR $1::TEXT = 'all' \
                   OR season IN ($1::TEXT, 'all')) \
            ORDER BY season DESC, name, id";
        Ok(self
            .query(SQL, &[&season])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(activity)
            .collect())
    }
}

impl<C> Database<Select<By<Option<SportsSchool>, catalog::Id>>>
    for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<SportsSchool>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<SportsSchool>, catalog::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, location_id, name, description, sport_type, season, \
                   skill_level, duration_days, price, currency, \
                   max_students, image_url, available, created_at \
            FROM sports_schools \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&by.into_inner()])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(sports_school))
    }
}

impl<C> Database<Select<By<Vec<SportsSchool>, SeasonFilter>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<SportsSchool>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<SportsSchool>, SeasonFilter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let SeasonFilter { season } = by.into_inner();

        const SQL: &str = "\
            SELECT id, location_id, name, description, sport_type, season, \
                   skill_level, duration_days, price, currency, \
                   max_students, image_url, available, created_at \
            FROM sports_schools \
            WHERE available \
              AND ($1::TEXT IS NULL OR $1::TEXT = 'all' \
                   OR season IN ($1::TEXT, 'all')) \
            ORDER BY season DESC, sport_type, name, id";
        Ok(self
            .query(SQL, &[&season])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(sports_school)
            .collect())
    }
}

impl<C> Database<Select<By<Option<Equipment>, catalog::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Equipment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Equipment>, catalog::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, location_id, name, description, category, season, \
                   size, price_per_day, currency, quantity_available, \
                   image_url, created_at \
            FROM equipment \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&by.into_inner()])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(equipment))
    }
}

impl<C> Database<Select<By<Vec<Equipment>, SeasonFilter>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Equipment>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Equipment>, SeasonFilter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let SeasonFilter { season } = by.into_inner();

        const SQL: &str = "\
            SELECT id, location_id, name, description, category, season, \
                   size, price_per_day, currency, quantity_available, \
                   image_url, created_at \
            FROM equipment \
            WHERE quantity_available > 0 \
              AND ($1::TEXT IS NULL OR $1::TEXT = 'all' \
                   OR season IN ($1::TEXT, 'all')) \
            ORDER BY season DESC, category, name, id";
        Ok(self
            .query(SQL, &[&season])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(equipment)
            .collect())
    }
}

impl<C> Database<Select<By<Option<Pass>, catalog::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Pass>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Pass>, catalog::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        const SQL: &str = "\
            SELECT id, location_id, name, description, season, \
                   duration_days, price, currency, benefits, image_url, \
                   available, created_at \
            FROM activity_passes \
            WHERE id = $1::UUID";
        Ok(self
            .query_opt(SQL, &[&by.into_inner()])
            .await
            .map_err(tracerr::wrap!())?
            .as_ref()
            .map(pass))
    }
}

impl<C> Database<Select<By<Vec<Pass>, SeasonFilter>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Pass>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Pass>, SeasonFilter>>,
    ) -> Result<Self::Ok, Self::Err> {
        let SeasonFilter { season } = by.into_inner();

        const SQL: &str = "\
            SELECT id, location_id, name, description, season, \
                   duration_days, price, currency, benefits, image_url, \
                   available, created_at \
            FROM activity_passes \
            WHERE available \
              AND ($1::TEXT IS NULL OR $1::TEXT = 'all' \
                   OR season IN ($1::TEXT, 'all')) \
            ORDER BY price ASC, id";
        Ok(self
            .query(SQL, &[&season])
            .await
            .map_err(tracerr::wrap!())?
            .iter()
            .map(pass)
            .collect())
    }
}

impl<C> Database<Select<By<Option<Item>, catalog::Ref>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Option<Item>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Item>, catalog::Ref>>,
    ) -> Result<Self::Ok, Self::Err> {
        let catalog::Ref { kind, id } = by.into_inner();
        Ok(match kind {
            catalog::Kind::Accommodation => self
                .execute(Select(By::<Option<Accommodation>, _>::new(id)))
                .await
                .map_err(tracerr::wrap!())?
                .map(Item::from),
            catalog::Kind::Activity => self
                .execute(Select(By::<Option<Activity>, _>::new(id)))
                .await
                .map_err(tracerr::wrap!())?
                .map(Item::from),
            catalog::Kind::SportsSchool => self
                .execute(Select(By::<Option<SportsSchool>, _>::new(id)))
                .await
                .map_err(tracerr::wrap!())?
                .map(Item::from),
            catalog::Kind::Equipment => self
                .execute(Select(By::<Option<Equipment>, _>::new(id)))
                .await
                .map_err(tracerr::wrap!())?
                .map(Item::from),
            catalog::Kind::Pass => self
                .execute(Select(By::<Option<Pass>, _>::new(id)))
                .await
                .map_err(tracerr::wrap!())?
                .map(Item::from),
        })
    }
}

impl<C> Database<Lock<By<Item, catalog::Ref>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Lock(by): Lock<By<Item, catalog::Ref>>,
    ) -> Result<Self::Ok, Self::Err> {
        let catalog::Ref { kind, id } = by.into_inner();

        // Missing rows lock nothing, so the following `Select` reports them.
        let sql = match kind {
            catalog::Kind::Accommodation => {
                "SELECT FROM accommodations WHERE id = $1::UUID FOR UPDATE"
            }
            catalog::Kind::Activity => {
                "SELECT FROM activities WHERE id = $1::UUID FOR UPDATE"
            }
            catalog::Kind::SportsSchool => {
                "SELECT FROM sports_schools WHERE id = $1::UUID FOR UPDATE"
            }
            catalog::Kind::Equipment => {
                "SELECT FROM equipment WHERE id = $1::UUID FOR UPDATE"
            }
            catalog::Kind::Pass => {
                "SELECT FROM activity_passes WHERE id = $1::UUID FOR UPDATE"
            }
        };
        self.exec(sql, &[&id]).await.map_err(tracerr::wrap!()).map(drop)
    }
}
