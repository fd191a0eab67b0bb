//! [`Command`] for creating a new [`Booking`].

use common::operations::{
    By, Commit, Insert, Lock, Select, Transact, Transacted,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        booking::{self, pricing},
        catalog, user, Booking,
    },
    infra::{database, Database},
    read::booking::{Period, Reserved},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Booking`] of a catalog item.
#[derive(Clone, Copy, Debug)]
pub struct CreateBooking {
    /// ID of the user booking, if authenticated.
    pub user_id: Option<user::Id>,

    /// [`booking::Request`] to book by.
    pub request: booking::Request,
}

impl<Db> Command<CreateBooking> for Service<Db>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<catalog::Item, catalog::Ref>>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<catalog::Item>, catalog::Ref>>,
            Ok = Option<catalog::Item>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Reserved, Period>>,
            Ok = Reserved,
            Err = Traced<database::Error>,
        > + Database<Insert<Booking>, Err = Traced<database::Error>>
        + Database<Commit, Err = Traced<database::Error>>,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateBooking) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBooking { user_id, request } = cmd;
        let item_ref = request.item();

        if user_id.is_none() {
            return Err(tracerr::new!(E::Rejected(
                pricing::Error::NotAuthenticated
            )));
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid concurrent bookings of the same item.
        tx.execute(Lock(By::<catalog::Item, _>::new(item_ref)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        let item = tx
            .execute(Select(By::<Option<catalog::Item>, _>::new(item_ref)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::ItemNotExists(item_ref))
            .map_err(tracerr::wrap!())?;

        let priced = pricing::validate_and_price(
            user_id,
            &item.terms(),
            request.pricing(),
        )
        .map_err(tracerr::from_and_wrap!(=> E))?;

        if let (Some(stock), pricing::Span::Range { start, end }) =
            (item.stock(), priced.quote.span)
        {
            let Reserved(reserved) = tx
                .execute(Select(By::<Reserved, _>::new(Period {
                    item: item_ref,
                    start,
                    end,
                })))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;

            let remaining = u32::from(stock).saturating_sub(reserved);
            let held = item.held_units(priced.quote.party_size);
            if u32::from(held) > remaining {
                return Err(tracerr::new!(match item {
                    catalog::Item::Accommodation(_) => {
                        E::AlreadyBooked(item_ref)
                    }
                    catalog::Item::Activity(_)
                    | catalog::Item::SportsSchool(_)
                    | catalog::Item::Equipment(_)
                    | catalog::Item::Pass(_) => E::OutOfStock {
                        item: item_ref,
                        remaining,
                    },
                }));
            }
        }

        let booking =
            Booking::new(&item, priced).map_err(tracerr::from_and_wrap!(=> E))?;
        tx.execute(Insert(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
            .map(drop)?;

        log::info!(
            booking.id = %booking.id(),
            user.id = %booking.user_id(),
            item = %item_ref,
            total_price = %booking.total_price(),
            "booking created",
        );

        Ok(booking)
    }
}

/// Error of [`CreateBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    #[from]
    Db(database::Error),

    /// [`booking::Request`] doesn't satisfy the item's [`pricing::Terms`].
    #[display("Booking rejected: {_0}")]
    #[from]
    Rejected(pricing::Error),

    /// Requested item does not exist.
    #[display("`{_0}` does not exist")]
    ItemNotExists(#[error(not(source))] catalog::Ref),

    /// Requested accommodation is already booked for an overlapping period.
    #[display("`{_0}` is already booked for the selected dates")]
    AlreadyBooked(#[error(not(source))] catalog::Ref),

    /// Not enough units of the requested item are left for the requested
    /// dates.
    #[display("`{item}` has {remaining} unit(s) left for the selected dates")]
    OutOfStock {
        /// Requested item.
        item: catalog::Ref,

        /// Number of units left.
        remaining: u32,
    },
}

#[cfg(test)]
mod spec {
    use std::sync::{Arc, Mutex};

    use common::{
        operations::{By, Commit, Insert, Lock, Select, Transact},
        Currency, Date, Handler, Money,
    };
    use tracerr::Traced;
    use uuid::Uuid;

    use crate::{
        command::Command as _,
        domain::{
            booking::{self, pricing},
            catalog::{self, accommodation, Accommodation, Equipment, Season},
            location, user, Booking,
        },
        infra::database,
        read::booking::{Hold, Period, Reserved},
        Config, Service,
    };

    use super::{CreateBooking, ExecutionError as E};

    /// In-memory catalog and bookings, shared by all its clones.
    #[derive(Clone, Debug, Default)]
    struct Memory(Arc<Mutex<State>>);

    #[derive(Debug, Default)]
    struct State {
        items: Vec<catalog::Item>,
        bookings: Vec<Booking>,
        locks: Vec<catalog::Ref>,
    }

    impl Handler<Transact> for Memory {
        type Ok = Self;
        type Err = Traced<database::Error>;

        async fn execute(&self, _: Transact) -> Result<Self::Ok, Self::Err> {
            Ok(self.clone())
        }
    }

    impl Handler<Commit> for Memory {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(&self, _: Commit) -> Result<Self::Ok, Self::Err> {
            Ok(())
        }
    }

    impl Handler<Lock<By<catalog::Item, catalog::Ref>>> for Memory {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Lock(by): Lock<By<catalog::Item, catalog::Ref>>,
        ) -> Result<Self::Ok, Self::Err> {
            self.0.lock().unwrap().locks.push(by.into_inner());
            Ok(())
        }
    }

    impl Handler<Select<By<Option<catalog::Item>, catalog::Ref>>> for Memory {
        type Ok = Option<catalog::Item>;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Select(by): Select<By<Option<catalog::Item>, catalog::Ref>>,
        ) -> Result<Self::Ok, Self::Err> {
            let item_ref = by.into_inner();
            Ok(self
                .0
                .lock()
                .unwrap()
                .items
                .iter()
                .find(|i| i.to_ref() == item_ref)
                .cloned())
        }
    }

    impl Handler<Select<By<Reserved, Period>>> for Memory {
        type Ok = Reserved;
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Select(by): Select<By<Reserved, Period>>,
        ) -> Result<Self::Ok, Self::Err> {
            let Period { item, start, end } = by.into_inner();
            let holds = self
                .0
                .lock()
                .unwrap()
                .bookings
                .iter()
                .filter(|b| b.item() == item && b.status().is_holding())
                .filter_map(|b| match b {
                    Booking::Stay(s) if s.overlaps(start, end) => Some(Hold {
                        start: s.check_in_date,
                        end: s.check_out_date,
                        units: 1,
                    }),
                    Booking::Rental(r) if r.overlaps(start, end) => Some(Hold {
                        start: r.rental_start_date,
                        end: r.rental_end_date,
                        units: u32::from(r.quantity),
                    }),
                    Booking::Stay(_)
                    | Booking::Rental(_)
                    | Booking::Participation(_)
                    | Booking::Enrollment(_)
                    | Booking::Purchase(_) => None,
                })
                .collect::<Vec<_>>();
            Ok(Reserved::peak(start, end, holds))
        }
    }

    impl Handler<Insert<Booking>> for Memory {
        type Ok = ();
        type Err = Traced<database::Error>;

        async fn execute(
            &self,
            Insert(booking): Insert<Booking>,
        ) -> Result<Self::Ok, Self::Err> {
            self.0.lock().unwrap().bookings.push(booking);
            Ok(())
        }
    }

    fn usd(s: &str) -> Money {
        Money {
            amount: s.parse().unwrap(),
            currency: Currency::Usd,
        }
    }

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn user() -> Option<user::Id> {
        Some(Uuid::new_v4().into())
    }

    fn chalet(available: bool) -> Accommodation {
        Accommodation {
            id: catalog::Id::new(),
            location_id: location::Id::from(Uuid::nil()),
            name: catalog::Name::new("Pine Chalet").unwrap(),
            description: None,
            kind: accommodation::Type::Chalet,
            capacity: 4,
            price_per_night: usd("100.00"),
            amenities: vec!["Fireplace".into(), "Sauna".into()],
            image_url: None,
            available,
            created_at: catalog::CreationDateTime::now(),
        }
    }

    fn skis(quantity_available: u16) -> Equipment {
        Equipment {
            id: catalog::Id::new(),
            location_id: location::Id::from(Uuid::nil()),
            name: catalog::Name::new("Touring Skis").unwrap(),
            description: None,
            category: "skis".into(),
            season: Season::Winter,
            size: Some("170cm".into()),
            price_per_day: usd("25.00"),
            quantity_available,
            image_url: None,
            created_at: catalog::CreationDateTime::now(),
        }
    }

    fn service(items: Vec<catalog::Item>) -> (Service<Memory>, Memory) {
        let db = Memory::default();
        db.0.lock().unwrap().items = items;
        (Service::new(Config::hs256(b"secret", None), db.clone()), db)
    }

    fn stay(
        accommodation: &Accommodation,
        check_in: &str,
        check_out: &str,
    ) -> booking::Request {
        booking::Request::Stay {
            accommodation_id: accommodation.id,
            check_in: Some(date(check_in)),
            check_out: Some(date(check_out)),
            guests: 2,
        }
    }

    fn rental(
        equipment: &Equipment,
        start: &str,
        end: &str,
        quantity: u16,
    ) -> booking::Request {
        booking::Request::Rental {
            equipment_id: equipment.id,
            start: Some(date(start)),
            end: Some(date(end)),
            quantity,
        }
    }

    #[tokio::test]
    async fn books_stay() {
        let chalet = chalet(true);
        let (svc, db) = service(vec![chalet.clone().into()]);
        let user_id = user();

        let booking = svc
            .execute(CreateBooking {
                user_id,
                request: stay(&chalet, "2025-06-01", "2025-06-04"),
            })
            .await
            .unwrap();

        assert_eq!(Some(booking.user_id()), user_id);
        assert_eq!(booking.total_price(), usd("300.00"));
        assert_eq!(booking.status(), booking::Status::Confirmed);
        assert_eq!(booking.start_date(), date("2025-06-01"));
        assert_eq!(booking.end_date(), Some(date("2025-06-04")));

        let state = db.0.lock().unwrap();
        assert_eq!(state.bookings.len(), 1);
        assert_eq!(state.locks, [booking.item()]);
    }

    #[tokio::test]
    async fn requires_authentication_before_anything() {
        let (svc, db) = service(vec![]);

        let err = svc
            .execute(CreateBooking {
                user_id: None,
                request: stay(&chalet(true), "2025-06-04", "2025-06-01"),
            })
            .await
            .unwrap_err();

        assert!(
            matches!(
                err.as_ref(),
                E::Rejected(pricing::Error::NotAuthenticated),
            ),
            "{err}",
        );
        assert!(db.0.lock().unwrap().locks.is_empty());
    }

    #[tokio::test]
    async fn fails_on_unknown_item() {
        let (svc, _) = service(vec![]);

        let err = svc
            .execute(CreateBooking {
                user_id: user(),
                request: stay(&chalet(true), "2025-06-01", "2025-06-04"),
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), E::ItemNotExists(_)), "{err}");
    }

    #[tokio::test]
    async fn rejects_invalid_request_without_persisting() {
        let unavailable = chalet(false);
        let available = chalet(true);
        let (svc, db) =
            service(vec![unavailable.clone().into(), available.clone().into()]);

        for (request, expected) in [
            (
                stay(&unavailable, "2025-06-01", "2025-06-04"),
                pricing::Error::ItemUnavailable,
            ),
            (
                stay(&available, "2025-06-04", "2025-06-04"),
                pricing::Error::InvalidDateRange,
            ),
            (
                booking::Request::Stay {
                    accommodation_id: available.id,
                    check_in: Some(date("2025-06-01")),
                    check_out: None,
                    guests: 2,
                },
                pricing::Error::MissingDates,
            ),
            (
                booking::Request::Stay {
                    accommodation_id: available.id,
                    check_in: Some(date("2025-06-01")),
                    check_out: Some(date("2025-06-04")),
                    guests: 5,
                },
                pricing::Error::CapacityExceeded {
                    capacity: pricing::Capacity::Bounded(4),
                    party_size: 5,
                },
            ),
        ] {
            let err = svc
                .execute(CreateBooking {
                    user_id: user(),
                    request,
                })
                .await
                .unwrap_err();

            assert!(
                matches!(err.as_ref(), E::Rejected(e) if *e == expected),
                "expected `{expected}`, got: {err}",
            );
        }
        assert!(db.0.lock().unwrap().bookings.is_empty());
    }

    #[tokio::test]
    async fn rejects_overlapping_stay() {
        let chalet = chalet(true);
        let (svc, db) = service(vec![chalet.clone().into()]);

        drop(
            svc.execute(CreateBooking {
                user_id: user(),
                request: stay(&chalet, "2025-06-01", "2025-06-04"),
            })
            .await
            .unwrap(),
        );

        let err = svc
            .execute(CreateBooking {
                user_id: user(),
                request: stay(&chalet, "2025-06-03", "2025-06-06"),
            })
            .await
            .unwrap_err();
        assert!(matches!(err.as_ref(), E::AlreadyBooked(_)), "{err}");

        // Checking in on the day of another stay's checkout is fine.
        drop(
            svc.execute(CreateBooking {
                user_id: user(),
                request: stay(&chalet, "2025-06-04", "2025-06-06"),
            })
            .await
            .unwrap(),
        );
        assert_eq!(db.0.lock().unwrap().bookings.len(), 2);
    }

    #[tokio::test]
    async fn rents_equipment_within_stock() {
        let skis = skis(3);
        let (svc, _) = service(vec![skis.clone().into()]);

        let first = svc
            .execute(CreateBooking {
                user_id: user(),
                request: rental(&skis, "2025-01-10", "2025-01-13", 2),
            })
            .await
            .unwrap();
        assert_eq!(first.total_price(), usd("150.00"));

        let err = svc
            .execute(CreateBooking {
                user_id: user(),
                request: rental(&skis, "2025-01-12", "2025-01-14", 2),
            })
            .await
            .unwrap_err();
        assert!(
            matches!(err.as_ref(), E::OutOfStock { remaining: 1, .. }),
            "{err}",
        );

        drop(
            svc.execute(CreateBooking {
                user_id: user(),
                request: rental(&skis, "2025-01-12", "2025-01-14", 1),
            })
            .await
            .unwrap(),
        );
        drop(
            svc.execute(CreateBooking {
                user_id: user(),
                request: rental(&skis, "2025-01-13", "2025-01-15", 3),
            })
            .await
            .unwrap_err(),
        );
    }

    #[tokio::test]
    async fn counts_equipment_stock_per_day() {
        let skis = skis(3);
        let (svc, _) = service(vec![skis.clone().into()]);

        for (start, end, quantity) in [
            ("2025-01-10", "2025-01-12", 2),
            ("2025-01-12", "2025-01-14", 2),
            ("2025-01-10", "2025-01-14", 1),
        ] {
            drop(
                svc.execute(CreateBooking {
                    user_id: user(),
                    request: rental(&skis, start, end, quantity),
                })
                .await
                .unwrap(),
            );
        }

        let err = svc
            .execute(CreateBooking {
                user_id: user(),
                request: rental(&skis, "2025-01-10", "2025-01-14", 1),
            })
            .await
            .unwrap_err();
        assert!(
            matches!(err.as_ref(), E::OutOfStock { remaining: 0, .. }),
            "{err}",
        );
    }
}
