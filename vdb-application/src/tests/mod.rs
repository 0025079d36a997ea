pub mod prelude {
    use std::time::Duration;

    pub use vdb_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub use crate::{prelude as flows, sqlite};

    pub fn actor(id: &str, role: Role) -> Actor {
        Actor {
            id: id.into(),
            role,
        }
    }

    pub fn new_location(name: &str) -> usecases::NewLocation {
        usecases::NewLocation {
            name_vi: name.into(),
            name_en: None,
            lat: 10.7769,
            lng: 106.7009,
            address_vi: "135 Nam Kỳ Khởi Nghĩa, Quận 1".into(),
            address_en: None,
            district_vi: "Quận 1".into(),
            district_en: None,
            cuisine_vi: "Việt".into(),
            cuisine_en: None,
            category: Category::Food,
            price_range: PriceRange::From100kTo300k,
            phone: None,
            website: None,
            hours_open: Some("07:00".into()),
            hours_close: Some("22:00".into()),
            description_vi: None,
            description_en: None,
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db_connections =
                sqlite::Connections::init(":memory:", 1, Duration::from_secs(5)).unwrap();
            sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self { db_connections }
        }

        pub fn create_location(&self, name: &str, submitted_by: &str) -> Id {
            flows::create_location(
                &self.db_connections,
                new_location(name),
                &actor(submitted_by, Role::User),
            )
            .unwrap()
            .id
        }

        pub fn approve(&self, id: &Id) {
            flows::review_location(
                &self.db_connections,
                id.as_str(),
                ModerationStatus::Approved,
                &actor("admin", Role::Admin),
            )
            .unwrap();
        }

        pub fn add_owner(&self, location_id: &Id, user_id: &str, status: ModerationStatus) {
            self.db_connections
                .exclusive()
                .unwrap()
                .transaction(|conn| {
                    conn.create_location_owner(&LocationOwner {
                        location_id: location_id.clone(),
                        user_id: user_id.into(),
                        status,
                        created_at: Timestamp::now(),
                    })
                })
                .unwrap();
        }

        pub fn create_user(&self, id: &str, name: Option<&str>) {
            self.db_connections
                .exclusive()
                .unwrap()
                .transaction(|conn| {
                    conn.create_user(&User {
                        id: id.into(),
                        name: name.map(Into::into),
                        email: None,
                    })
                })
                .unwrap();
        }
    }
}
