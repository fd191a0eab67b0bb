//! [`Booking`]-related [`Database`] implementations.

use std::cmp::Reverse;

use common::{
    operations::{By, Insert, Select},
    Money,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{
        booking::{Enrollment, Participation, Purchase, Rental, Stay},
        catalog, user, Booking,
    },
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read::booking::{Hold, Period, Reserved},
};

use super::count;

fn total_price(row: &Row) -> Money {
    Money {
        amount: row.get("total_price"),
        currency: row.get("currency"),
    }
}

impl<C> Database<Insert<Booking>> for Postgres<C>
where
    C: Connection,
{
    type Ok = ();
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Insert(booking): Insert<Booking>,
    ) -> Result<Self::Ok, Self::Err> {
        match booking {
            Booking::Stay(Stay {
                id,
                user_id,
                accommodation_id,
                check_in_date,
                check_out_date,
                guests,
                total_price,
                status,
                created_at,
            }) => {
                const SQL: &str = "\
                    INSERT INTO accommodation_bookings (\
                        id, user_id, accommodation_id, \
                        check_in_date, check_out_date, guests, \
                        total_price, currency, status, created_at\
                    ) VALUES (\
                        $1::UUID, $2::UUID, $3::UUID, \
                        $4::DATE, $5::DATE, $6::INT4, \
                        $7::NUMERIC, $8::TEXT, $9::TEXT, $10::TIMESTAMPTZ\
                    )";
                self.exec(
                    SQL,
                    &[
                        &id,
                        &user_id,
                        &accommodation_id,
                        &check_in_date,
                        &check_out_date,
                        &i32::from(guests),
                        &total_price.amount,
                        &total_price.currency,
                        &status,
                        &created_at,
                    ],
                )
                .await
            }
            Booking::Participation(Participation {
                id,
                user_id,
                activity_id,
                booking_date,
                participants,
                total_price,
                status,
                created_at,
            }) => {
                const SQL: &str = "\
                    INSERT INTO activity_bookings (\
                        id, user_id, activity_id, \
                        booking_date, participants, \
                        total_price, currency, status, created_at\
                    ) VALUES (\
                        $1::UUID, $2::UUID, $3::UUID, \
                        $4::DATE, $5::INT4, \
                        $6::NUMERIC, $7::TEXT, $8::TEXT, $9::TIMESTAMPTZ\
                    )";
                self.exec(
                    SQL,
                    &[
                        &id,
                        &user_id,
                        &activity_id,
                        &booking_date,
                        &i32::from(participants),
                        &total_price.amount,
                        &total_price.currency,
                        &status,
                        &created_at,
                    ],
                )
                .await
            }
            Booking::Enrollment(Enrollment {
                id,
                user_id,
                sports_school_id,
                start_date,
                students,
                total_price,
                status,
                created_at,
            }) => {
                const SQL: &str = "\
                    INSERT INTO sports_school_bookings (\
                        id, user_id, sports_school_id, \
                        start_date, students, \
                        total_price, currency, status, created_at\
                    ) VALUES (\
                        $1::UUID, $2::UUID, $3::UUID, \
                        $4::DATE, $5::INT4, \
                        $6::NUMERIC, $7::TEXT, $8::TEXT, $9::TIMESTAMPTZ\
                    )";
                self.exec(
                    SQL,
                    &[
                        &id,
                        &user_id,
                        &sports_school_id,
                        &start_date,
                        &i32::from(students),
                        &total_price.amount,
                        &total_price.currency,
                        &status,
                        &created_at,
                    ],
                )
                .await
            }
            Booking::Rental(Rental {
                id,
                user_id,
                equipment_id,
                rental_start_date,
                rental_end_date,
                quantity,
                total_price,
                status,
                created_at,
            }) => {
                const SQL: &str = "\
                    INSERT INTO equipment_rentals (\
                        id, user_id, equipment_id, \
                        rental_start_date, rental_end_date, quantity, \
                        total_price, currency, status, created_at\
                    ) VALUES (\
                        $1::UUID, $2::UUID, $3::UUID, \
                        $4::DATE, $5::DATE, $6::INT4, \
                        $7::NUMERIC, $8::TEXT, $9::TEXT, $10::TIMESTAMPTZ\
                    )";
                self.exec(
                    SQL,
                    &[
                        &id,
                        &user_id,
                        &equipment_id,
                        &rental_start_date,
                        &rental_end_date,
                        &i32::from(quantity),
                        &total_price.amount,
                        &total_price.currency,
                        &status,
                        &created_at,
                    ],
                )
                .await
            }
            Booking::Purchase(Purchase {
                id,
                user_id,
                pass_id,
                purchase_date,
                start_date,
                end_date,
                total_price,
                status,
                created_at,
            }) => {
                const SQL: &str = "\
                    INSERT INTO pass_purchases (\
                        id, user_id, pass_id, \
                        purchase_date, start_date, end_date, \
                        total_price, currency, status, created_at\
                    ) VALUES (\
                        $1::UUID, $2::UUID, $3::UUID, \
                        $4::DATE, $5::DATE, $6::DATE, \
                        $7::NUMERIC, $8::TEXT, $9::TEXT, $10::TIMESTAMPTZ\
                    )";
                self.exec(
                    SQL,
                    &[
                        &id,
                        &user_id,
                        &pass_id,
                        &purchase_date,
                        &start_date,
                        &end_date,
                        &total_price.amount,
                        &total_price.currency,
                        &status,
                        &created_at,
                    ],
                )
                .await
            }
        }
        .map_err(tracerr::wrap!())
        .map(drop)
    }
}

impl<C> Database<Select<By<Reserved, Period>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Reserved;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Reserved, Period>>,
    ) -> Result<Self::Ok, Self::Err> {
        let Period { item, start, end } = by.into_inner();

        let sql = match item.kind {
            catalog::Kind::Accommodation => {
                "SELECT check_in_date AS start_date, \
                        check_out_date AS end_date, \
                        1::INT4 AS units \
                 FROM accommodation_bookings \
                 WHERE accommodation_id = $1::UUID \
                   AND status IN ('pending', 'confirmed') \
                   AND check_in_date < $3::DATE \
                   AND check_out_date > $2::DATE"
            }
            catalog::Kind::Equipment => {
                "SELECT rental_start_date AS start_date, \
                        rental_end_date AS end_date, \
                        quantity AS units \
                 FROM equipment_rentals \
                 WHERE equipment_id = $1::UUID \
                   AND status IN ('pending', 'confirmed') \
                   AND rental_start_date < $3::DATE \
                   AND rental_end_date > $2::DATE"
            }
            // Bookings of these don't compete for stock.
            catalog::Kind::Activity
            | catalog::Kind::SportsSchool
            | catalog::Kind::Pass => return Ok(Reserved::default()),
        };

        let rows = self
            .query(sql, &[&item.id, &start, &end])
            .await
            .map_err(tracerr::wrap!())?;
        Ok(Reserved::peak(
            start,
            end,
            rows.iter().map(|r| Hold {
                start: r.get("start_date"),
                end: r.get("end_date"),
                units: u32::from(count(r, "units")),
            }),
        ))
    }
}

impl<C> Database<Select<By<Vec<Booking>, user::Id>>> for Postgres<C>
where
    C: Connection,
{
    type Ok = Vec<Booking>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Booking>, user::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let user_id = by.into_inner();
        let mut bookings = Vec::new();

        const STAYS_SQL: &str = "\
            SELECT id, user_id, accommodation_id, \
                   check_in_date, check_out_date, guests, \
                   total_price, currency, status, created_at \
            FROM accommodation_bookings \
            WHERE user_id = $1::UUID";
        bookings.extend(
            self.query(STAYS_SQL, &[&user_id])
                .await
                .map_err(tracerr::wrap!())?
                .iter()
                .map(|row| {
                    Booking::Stay(Stay {
                        id: row.get("id"),
                        user_id: row.get("user_id"),
                        accommodation_id: row.get("accommodation_id"),
                        check_in_date: row.get("check_in_date"),
                        check_out_date: row.get("check_out_date"),
                        guests: count(row, "guests"),
                        total_price: total_price(row),
                        status: row.get("status"),
                        created_at: row.get("created_at"),
                    })
                }),
        );

        const PARTICIPATIONS_SQL: &str = "\
            SELECT id, user_id, activity_id, booking_date, participants, \
                   total_price, currency, status, created_at \
            FROM activity_bookings \
            WHERE user_id = $1::UUID";
        bookings.extend(
            self.query(PARTICIPATIONS_SQL, &[&user_id])
                .await
                .map_err(tracerr::wrap!())?
                .iter()
                .map(|row| {
                    Booking::Participation(Participation {
                        id: row.get("id"),
                        user_id: row.get("user_id"),
                        activity_id: row.get("activity_id"),
                        booking_date: row.get("booking_date"),
                        participants: count(row, "participants"),
                        total_price: total_price(row),
                        status: row.get("status"),
                        created_at: row.get("created_at"),
                    })
                }),
        );

        const ENROLLMENTS_SQL: &str = "\
            SELECT id, user_id, sports_school_id, start_date, students, \
                   total_price, currency, status, created_at \
            FROM sports_school_bookings \
            WHERE user_id = $1::UUID";
        bookings.extend(
            self.query(ENROLLMENTS_SQL, &[&user_id])
                .await
                .map_err(tracerr::wrap!())?
                .iter()
                .map(|row| {
                    Booking::Enrollment(Enrollment {
                        id: row.get("id"),
                        user_id: row.get("user_id"),
                        sports_school_id: row.get("sports_school_id"),
                        start_date: row.get("start_date"),
                        students: count(row, "students"),
                        total_price: total_price(row),
                        status: row.get("status"),
                        created_at: row.get("created_at"),
                    })
                }),
        );

        const RENTALS_SQL: &str = "\
            SELECT id, user_id, equipment_id, \
                   rental_start_date, rental_end_date, quantity, \
                   total_price, currency, status, created_at \
            FROM equipment_rentals \
            WHERE user_id = $1::UUID";
        bookings.extend(
            self.query(RENTALS_SQL, &[&user_id])
                .await
                .map_err(tracerr::wrap!())?
                .iter()
                .map(|row| {
                    Booking::Rental(Rental {
                        id: row.get("id"),
                        user_id: row.get("user_id"),
                        equipment_id: row.get("equipment_id"),
                        rental_start_date: row.get("rental_start_date"),
                        rental_end_date: row.get("rental_end_date"),
                        quantity: count(row, "quantity"),
                        total_price: total_price(row),
                        status: row.get("status"),
                        created_at: row.get("created_at"),
                    })
                }),
        );

        const PURCHASES_SQL: &str = "\
            SELECT id, user_id, pass_id, \
                   purchase_date, start_date, end_date, \
                   total_price, currency, status, created_at \
            FROM pass_purchases \
            WHERE user_id = $1::UUID";
        bookings.extend(
            self.query(PURCHASES_SQL, &[&user_id])
                .await
                .map_err(tracerr::wrap!())?
                .iter()
                .map(|row| {
                    Booking::Purchase(Purchase {
                        id: row.get("id"),
                        user_id: row.get("user_id"),
                        pass_id: row.get("pass_id"),
                        purchase_date: row.get("purchase_date"),
                        start_date: row.get("start_date"),
                        end_date: row.get("end_date"),
                        total_price: total_price(row),
                        status: row.get("status"),
                        created_at: row.get("created_at"),
                    })
                }),
        );

        bookings.sort_by_key(|b| Reverse(b.created_at()));
        Ok(bookings)
    }
}
